// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use sha2::{Digest, Sha256, Sha384, Sha512};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// SHA-256 (32-byte digest).
    Sha256,
    /// SHA-384 (48-byte digest).
    Sha384,
    /// SHA-512 (64-byte digest).
    Sha512,
}

/// Text encodings for digest output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestEncoding {
    /// Lowercase hex.
    Hex,
    /// Standard padded base64.
    Base64,
    /// URL-safe unpadded base64.
    Base64Url,
}

/// Computes the digest of `data` and returns the raw bytes.
pub fn digest(data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// Computes the digest of `data` and encodes it as text.
pub fn digest_encoded(data: &[u8], algorithm: DigestAlgorithm, encoding: DigestEncoding) -> String {
    let raw = digest(data, algorithm);

    match encoding {
        DigestEncoding::Hex => rampart_codec::hex_encode(&raw),
        DigestEncoding::Base64 => rampart_codec::base64_encode(&raw),
        DigestEncoding::Base64Url => rampart_codec::base64url_encode(&raw),
    }
}
