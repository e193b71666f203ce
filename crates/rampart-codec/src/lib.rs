// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_codec
//!
//! Byte/text transcoding for the Rampart stack: hex, base64 (standard,
//! padded) and base64url (URL-safe, unpadded).
//!
//! Encoding is infallible; decoding is strict and fails with a
//! [`CodecError`] on malformed input. An empty input decodes to an empty
//! vector in every codec.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod codec;
mod error;

pub use codec::{
    base64_decode, base64_encode, base64url_decode, base64url_encode, hex_decode, hex_encode,
};
pub use error::CodecError;
