// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Errors that can occur while decoding text into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input is not valid hex (non-hex character or odd length).
    #[error("invalid hex input")]
    InvalidHex,

    /// The input is not valid base64 for the selected engine.
    #[error("invalid base64 input")]
    InvalidBase64,
}
