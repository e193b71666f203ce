// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use crate::error::CodecError;

/// Encodes bytes as lowercase hex.
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decodes hex text (either case) into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHex`] on non-hex characters or odd input
/// length.
pub fn hex_decode(text: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(text).map_err(|_| CodecError::InvalidHex)
}

/// Encodes bytes as standard padded base64.
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes standard padded base64 text into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] on malformed input.
pub fn base64_decode(text: &str) -> Result<Vec<u8>, CodecError> {
    STANDARD.decode(text).map_err(|_| CodecError::InvalidBase64)
}

/// Encodes bytes as URL-safe, unpadded base64.
pub fn base64url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decodes URL-safe, unpadded base64 text into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] on malformed input.
pub fn base64url_decode(text: &str) -> Result<Vec<u8>, CodecError> {
    URL_SAFE_NO_PAD.decode(text).map_err(|_| CodecError::InvalidBase64)
}
