// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entropy and bounded-draw error types.

/// Errors that can occur while obtaining entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntropyError {
    /// The platform entropy source is unavailable or failed to produce data.
    #[error("entropy source not available")]
    EntropyNotAvailable,
}

/// Errors that can occur during a bounded random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RandError {
    /// The underlying entropy source failed.
    #[error("entropy source not available")]
    Entropy(#[from] EntropyError),

    /// `max` was not strictly greater than `min`.
    #[error("invalid range: max must be greater than min")]
    InvalidRange,

    /// The requested span exceeds what a single 32-bit draw can cover.
    #[error("range exceeds the 32-bit sampling domain")]
    RangeTooLarge,

    /// The exclusion set rejects every value in `[min, max)`.
    #[error("exclusion set covers the entire range")]
    ExhaustedRange,
}
