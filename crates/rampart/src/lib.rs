// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Security-adjacent primitives with the sharp edges filed off.</em></p>
//!
//! ---
//!
//! Rampart is a small library of security-adjacent building blocks:
//! unbiased bounded random numbers, secure shuffling, guaranteed-class
//! token generation, constant-time comparison, byte/text codecs, SHA-2
//! digesting, and defensive sanitization of structured values.
//!
//! # Features
//!
//! - 🎲 **Unbiased by construction** — bounded draws use rejection
//!   sampling, never bare modulo
//! - ⚡ **Buffered sessions** — one entropy fetch serves dozens of draws
//! - 🔑 **Guaranteed character classes** — generated tokens always
//!   represent every enabled alphabet
//! - ⏱️ **Constant-time comparison** — timing depends on operand length,
//!   never content
//! - 🧹 **Pollution-safe values** — forbidden keys scrubbed at every
//!   nesting level
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::rand::{SystemEntropySource, SystemRandomSession};
//! use rampart::token::{TokenOptions, generate_token};
//! use rampart::util::secure_compare;
//!
//! // Unbiased dice off one buffered session.
//! let mut session = SystemRandomSession::new(SystemEntropySource {});
//! let roll = session.next_in_range(1, 7)?;
//! assert!((1..7).contains(&roll));
//!
//! // A 16-character token with all four default classes.
//! let token = generate_token(&TokenOptions::default())?;
//! assert_eq!(token.chars().count(), 16);
//!
//! // Verify an incoming secret without leaking where it differs.
//! let ok = secure_compare(token.as_bytes(), Some(token.as_bytes()))?;
//! assert!(ok);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crates
//!
//! | Module | Concern |
//! |--------|---------|
//! | [`rand`] | entropy sources, bounded draws, sessions, shuffling |
//! | [`token`] | guaranteed-class token generation |
//! | [`util`] | constant-time comparison |
//! | [`codec`] | hex / base64 / base64url |
//! | [`digest`] | SHA-2 wrapper with encoded output |
//! | [`sanitize`] | forbidden-key scrubbing for nested values |
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use rampart_codec as codec;
pub use rampart_digest as digest;
pub use rampart_rand as rand;
pub use rampart_sanitize as sanitize;
pub use rampart_token as token;
pub use rampart_util as util;
