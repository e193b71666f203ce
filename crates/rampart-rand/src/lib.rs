// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_rand
//!
//! Unbiased bounded random number generation for the Rampart primitives.
//!
//! Maps raw 32-bit words from a cryptographically secure entropy source onto
//! arbitrary `[min, max)` ranges without modulo bias, with optional exclusion
//! sets and a buffered session mode that amortizes entropy fetches across
//! many draws.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`RandomSession`]: buffered generator holding a pre-fetched entropy block
//!
//! ## Operations
//!
//! - [`draw_below`] / [`draw_in_range`] / [`draw_in_range_excluding`]:
//!   one-shot draws that fetch only the entropy they need
//! - [`shuffle`] / [`shuffle_with`]: Fisher-Yates permutation driven by
//!   bounded draws
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::{RandomSession, SystemEntropySource, DEFAULT_BLOCK};
//!
//! let mut session = RandomSession::<SystemEntropySource, DEFAULT_BLOCK>::new(SystemEntropySource {});
//!
//! // Roll a die many times off one entropy block.
//! for _ in 0..100 {
//!     let roll = session.next_in_range(1, 7).expect("Failed to draw");
//!     assert!((1..7).contains(&roll));
//! }
//! ```
//!
//! ## Bias model
//!
//! A raw `u32` reduced with `%` skews toward low values whenever the range
//! does not divide 2^32. Draws therefore reject any raw word at or above
//! `2^32 - (2^32 % range)` and redraw, which keeps the accepted interval
//! exactly divisible by the range. Rejection probability is always below
//! 50%, so the retry loop terminates after one or two iterations with
//! overwhelming probability.
//!
//! ## Platform Support
//!
//! Entropy comes from `getrandom` on all platforms:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASM: JS `crypto.getRandomValues`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod draw;
mod error;
mod session;
mod shuffle;
mod support;
mod system;
mod traits;

pub use draw::{draw_below, draw_in_range, draw_in_range_excluding};
pub use error::{EntropyError, RandError};
pub use session::{DEFAULT_BLOCK, RandomSession, SystemRandomSession};
pub use shuffle::{shuffle, shuffle_with};
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
