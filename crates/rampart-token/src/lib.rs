// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_token
//!
//! Secure fixed-length token generation over `rampart_rand`.
//!
//! Builds strings from four character classes (uppercase, lowercase,
//! digits, specials), each individually enabled with its default alphabet,
//! enabled with a custom alphabet, or disabled. Every enabled class is
//! guaranteed at least one character in the output; the remainder is drawn
//! uniformly from the union of enabled alphabets and the whole working
//! sequence is shuffled before emission. An optional base-36 timestamp can
//! be prepended, consuming characters from the requested length.
//!
//! One buffered [`RandomSession`](rampart_rand::RandomSession) serves all
//! draws of a generation call, so a 16-character token normally costs a
//! single entropy fetch.
//!
//! ## Example
//!
//! ```rust
//! use rampart_token::{CharClass, TokenOptions, generate_token};
//!
//! // 12 characters, digits and lowercase only.
//! let options = TokenOptions {
//!     length: 12,
//!     uppercase: CharClass::Off,
//!     specials: CharClass::Off,
//!     ..TokenOptions::default()
//! };
//!
//! let token = generate_token(&options).expect("Failed to generate token");
//! assert_eq!(token.chars().count(), 12);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod token;

pub use error::TokenError;
pub use token::{
    CharClass, DEFAULT_LENGTH, TokenInstant, TokenOptions, generate_token, generate_token_with,
};
