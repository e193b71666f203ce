// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::time::{SystemTime, UNIX_EPOCH};

use rampart_rand::{EntropySource, RandomSession, SystemEntropySource, SystemRandomSession};

use crate::error::TokenError;

/// Token length used when the caller does not specify one.
pub const DEFAULT_LENGTH: usize = 16;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIALS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Selector for one character class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharClass {
    /// Enabled with the built-in alphabet for this class.
    #[default]
    Default,
    /// Enabled with a caller-supplied, non-empty alphabet.
    Custom(String),
    /// Disabled; contributes no characters.
    Off,
}

/// Point in time encoded into the optional token prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenInstant {
    /// The current system time.
    Now,
    /// A caller-supplied instant, in Unix milliseconds.
    Millis(u64),
}

/// Options for [`generate_token`].
///
/// The default configuration produces a 16-character token drawing on all
/// four built-in alphabets, with no timestamp prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOptions {
    /// Total output length in characters, timestamp prefix included.
    pub length: usize,
    /// Uppercase letter class.
    pub uppercase: CharClass,
    /// Lowercase letter class.
    pub lowercase: CharClass,
    /// Digit class.
    pub digits: CharClass,
    /// Special symbol class.
    pub specials: CharClass,
    /// Optional base-36 timestamp prepended to the output.
    pub timestamp: Option<TokenInstant>,
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: CharClass::Default,
            lowercase: CharClass::Default,
            digits: CharClass::Default,
            specials: CharClass::Default,
            timestamp: None,
        }
    }
}

/// Generates a token using a throwaway OS-backed session.
///
/// See [`generate_token_with`] for the full contract.
///
/// # Errors
///
/// Same conditions as [`generate_token_with`].
pub fn generate_token(options: &TokenOptions) -> Result<String, TokenError> {
    let mut session = SystemRandomSession::new(SystemEntropySource {});

    generate_token_with(options, &mut session)
}

/// Generates a token of exactly `options.length` characters.
///
/// Classes are processed in the fixed order uppercase, lowercase, digits,
/// specials. Each enabled class contributes one guaranteed character drawn
/// from its own alphabet; the rest of the body is drawn uniformly from the
/// union of enabled alphabets. The working sequence is shuffled with the
/// same session before emission, so guaranteed characters land at uniform
/// positions.
///
/// # Errors
///
/// - [`TokenError::TimestampExceedsLength`] if the encoded timestamp does
///   not leave at least one body character
/// - [`TokenError::InvalidLength`] if `options.length` is zero
/// - [`TokenError::EmptyAlphabet`] if a custom alphabet is empty
/// - [`TokenError::NoCharacterClasses`] if every class is disabled
/// - [`TokenError::LengthTooShort`] if the enabled classes outnumber the
///   body characters, which would break the per-class guarantee
/// - [`TokenError::Rand`] on entropy failure
pub fn generate_token_with<E: EntropySource, const BLOCK: usize>(
    options: &TokenOptions,
    session: &mut RandomSession<E, BLOCK>,
) -> Result<String, TokenError> {
    let prefix = match options.timestamp {
        Some(instant) => {
            let encoded = to_base36(instant_millis(instant));

            if options.length <= encoded.len() {
                return Err(TokenError::TimestampExceedsLength);
            }

            encoded
        }
        None => String::new(),
    };

    if options.length == 0 {
        return Err(TokenError::InvalidLength);
    }

    let body_len = options.length - prefix.len();

    let classes = [
        (&options.uppercase, UPPERCASE),
        (&options.lowercase, LOWERCASE),
        (&options.digits, DIGITS),
        (&options.specials, SPECIALS),
    ];

    let mut full_alphabet: Vec<char> = Vec::new();
    let mut body: Vec<char> = Vec::new();

    for (class, default) in classes {
        let Some(alphabet) = resolve_alphabet(class, default)? else {
            continue;
        };

        let chars: Vec<char> = alphabet.chars().collect();
        let index = session.next_below(chars.len() as i64)? as usize;

        // Guaranteed character comes from the class's own alphabet, not the
        // cumulative one.
        body.push(chars[index]);
        full_alphabet.extend(chars);
    }

    if body.is_empty() {
        return Err(TokenError::NoCharacterClasses);
    }
    if body.len() > body_len {
        return Err(TokenError::LengthTooShort);
    }

    for _ in 0..body_len - body.len() {
        let index = session.next_below(full_alphabet.len() as i64)? as usize;
        body.push(full_alphabet[index]);
    }

    rampart_rand::shuffle_with(&mut body, session)?;

    let mut token = String::with_capacity(options.length);
    token.push_str(&prefix);
    token.extend(body);

    Ok(token)
}

fn resolve_alphabet<'a>(
    class: &'a CharClass,
    default: &'a str,
) -> Result<Option<&'a str>, TokenError> {
    match class {
        CharClass::Default => Ok(Some(default)),
        CharClass::Custom(alphabet) if alphabet.is_empty() => Err(TokenError::EmptyAlphabet),
        CharClass::Custom(alphabet) => Ok(Some(alphabet)),
        CharClass::Off => Ok(None),
    }
}

fn instant_millis(instant: TokenInstant) -> u64 {
    match instant {
        TokenInstant::Now => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0),
        TokenInstant::Millis(millis) => millis,
    }
}

pub(crate) fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return String::from("0");
    }

    let mut digits: Vec<char> = Vec::new();

    while value > 0 {
        digits.push(BASE36[(value % 36) as usize] as char);
        value /= 36;
    }

    digits.iter().rev().collect()
}
