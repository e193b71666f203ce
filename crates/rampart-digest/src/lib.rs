// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_digest
//!
//! Thin digest wrapper over the `sha2` crate: three fixed SHA-2 variants,
//! raw or text-encoded output. Stateless pass-through with a final encoding
//! step; the algorithm and encoding selectors are closed enums, so there is
//! no unsupported-option failure path.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod digest;

pub use digest::{DigestAlgorithm, DigestEncoding, digest, digest_encoded};
