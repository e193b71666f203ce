// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_rand::RandError;

/// Errors that can occur during token generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// A bounded draw or entropy fetch failed.
    #[error("random draw failed")]
    Rand(#[from] RandError),

    /// The requested length is zero.
    #[error("token length must be at least 1")]
    InvalidLength,

    /// Every character class is disabled.
    #[error("no character classes selected")]
    NoCharacterClasses,

    /// A custom alphabet is empty.
    #[error("custom alphabet must not be empty")]
    EmptyAlphabet,

    /// The encoded timestamp does not leave room for any random characters.
    #[error("token length must exceed the encoded timestamp length")]
    TimestampExceedsLength,

    /// The enabled classes outnumber the characters available for the body.
    #[error("token length too short to represent every enabled class")]
    LengthTooShort,
}
