// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot bounded draws.
//!
//! Each call builds a throwaway session whose block holds a single 32-bit
//! word, so every draw attempt fetches exactly the entropy it consumes and
//! no generator state survives the call. Use a [`RandomSession`] instead
//! when drawing many values.

use crate::error::RandError;
use crate::session::RandomSession;
use crate::system::SystemEntropySource;

/// Block size for throwaway sessions: one word per entropy fetch.
const ONE_SHOT_BLOCK: usize = 4;

/// Draws one unbiased integer in `[0, max)` from the OS entropy source.
///
/// # Errors
///
/// Returns [`RandError::InvalidRange`] if `max <= 0` and propagates entropy
/// failures.
pub fn draw_below(max: i64) -> Result<i64, RandError> {
    draw_in_range(0, max)
}

/// Draws one unbiased integer in `[min, max)` from the OS entropy source.
///
/// # Errors
///
/// Returns [`RandError::InvalidRange`] if `max <= min`,
/// [`RandError::RangeTooLarge`] if `max - min > 2^32`, and propagates
/// entropy failures.
pub fn draw_in_range(min: i64, max: i64) -> Result<i64, RandError> {
    let mut session = RandomSession::<_, ONE_SHOT_BLOCK>::new(SystemEntropySource {});

    session.next_in_range(min, max)
}

/// Draws one unbiased integer in `[min, max)` avoiding `exclude`, from the
/// OS entropy source.
///
/// # Errors
///
/// In addition to the [`draw_in_range`] errors, returns
/// [`RandError::ExhaustedRange`] if the exclusions reject every value in
/// the range.
pub fn draw_in_range_excluding(min: i64, max: i64, exclude: &[i64]) -> Result<i64, RandError> {
    let mut session = RandomSession::<_, ONE_SHOT_BLOCK>::new(SystemEntropySource {});

    session.next_in_range_excluding(min, max, exclude)
}
