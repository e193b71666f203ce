// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place Fisher-Yates shuffling driven by bounded draws.
//!
//! The Fisher-Yates shuffle reaches every permutation with uniform
//! probability, inheriting the unbiasedness of the underlying draw.

use crate::error::RandError;
use crate::session::{RandomSession, SystemRandomSession};
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Shuffles a slice in place using an existing session.
///
/// Walks from the last index down to 1, swapping each element with one at
/// an index drawn uniformly from `[0, i]`. Passing one session across many
/// shuffle calls is the supported pattern for amortizing entropy cost.
///
/// Slices of length 0 or 1 are returned unchanged without drawing.
///
/// # Errors
///
/// Propagates draw failures; slices longer than 2^32 elements fail with
/// [`RandError::RangeTooLarge`].
pub fn shuffle_with<T, E: EntropySource, const BLOCK: usize>(
    data: &mut [T],
    session: &mut RandomSession<E, BLOCK>,
) -> Result<(), RandError> {
    if data.len() <= 1 {
        return Ok(());
    }

    for i in (1..data.len()).rev() {
        let j = session.next_below((i + 1) as i64)? as usize;
        data.swap(i, j);
    }

    Ok(())
}

/// Shuffles a slice in place using a throwaway OS-backed session.
///
/// # Errors
///
/// Same conditions as [`shuffle_with`].
pub fn shuffle<T>(data: &mut [T]) -> Result<(), RandError> {
    let mut session = SystemRandomSession::new(SystemEntropySource {});

    shuffle_with(data, &mut session)
}
