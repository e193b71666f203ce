// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_util
//!
//! Constant-time comparison primitives for the Rampart stack.
//!
//! - [`constant_time_eq`]: data-independent slice equality
//! - [`secure_compare`]: verifier-side comparison that tolerates an absent
//!   right-hand operand without leaking timing about the reference
//!
//! Both run in time determined by operand lengths alone, never by where a
//! mismatch occurs.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod compare;
mod error;

pub use compare::{constant_time_eq, secure_compare};
pub use error::CompareError;
