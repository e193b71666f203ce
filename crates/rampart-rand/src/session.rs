// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::collections::BTreeSet;

use crate::error::RandError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Default entropy block size in bytes (64 draws per fetch).
pub const DEFAULT_BLOCK: usize = 256;

/// One raw 32-bit sample per draw attempt.
const WORD: usize = core::mem::size_of::<u32>();

/// Largest domain a single 32-bit draw can cover without bias.
const DOMAIN: u64 = 1 << 32;

/// A [`RandomSession`] over the OS entropy source with the default block size.
pub type SystemRandomSession = RandomSession<SystemEntropySource, DEFAULT_BLOCK>;

/// Buffered bounded random generator.
///
/// Owns a pre-fetched block of `BLOCK` entropy bytes and a cursor into it.
/// Each draw attempt consumes one little-endian `u32` word; the block is
/// refilled from the entropy source only when exhausted, so a session
/// amortizes entropy-source calls across many draws (shuffling, token
/// generation). Output distribution is identical to one-shot draws.
///
/// The block starts stale (cursor at the end) and is filled lazily on the
/// first draw, so constructing a session that is never used costs nothing.
///
/// # Unbiased sampling
///
/// Draws map a raw `u32` onto `[min, max)` by rejection sampling: any raw
/// word at or above `2^32 - (2^32 % range)` is discarded and redrawn, which
/// keeps the accepted interval exactly divisible by the range and every
/// output value equally likely.
///
/// # Concurrency
///
/// A session is a plain mutable value with no internal synchronization.
/// Use one session per thread, or serialize access externally; independent
/// sessions share no state.
///
/// # Example
///
/// ```ignore
/// use rampart_rand::{RandomSession, SystemEntropySource, DEFAULT_BLOCK};
///
/// let mut session = RandomSession::<_, DEFAULT_BLOCK>::new(SystemEntropySource {});
/// let value = session.next_in_range_excluding(50, 150, &[55, 60, 65])?;
/// ```
pub struct RandomSession<E: EntropySource, const BLOCK: usize> {
    entropy: E,
    block: [u8; BLOCK],
    cursor: usize,
}

impl<E: EntropySource, const BLOCK: usize> RandomSession<E, BLOCK> {
    /// Creates a session with a stale block; the first draw fills it.
    ///
    /// # Arguments
    ///
    /// * `entropy` - Entropy source backing the block refills
    pub fn new(entropy: E) -> Self {
        const {
            assert!(BLOCK >= WORD && BLOCK % WORD == 0);
        }

        Self {
            entropy,
            block: [0u8; BLOCK],
            cursor: BLOCK,
        }
    }

    /// Draws one unbiased integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidRange`] if `max <= 0`,
    /// [`RandError::RangeTooLarge`] if `max > 2^32`, and propagates entropy
    /// failures.
    pub fn next_below(&mut self, max: i64) -> Result<i64, RandError> {
        self.draw_bounded(0, max, None)
    }

    /// Draws one unbiased integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidRange`] if `max <= min`,
    /// [`RandError::RangeTooLarge`] if `max - min > 2^32`, and propagates
    /// entropy failures.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandError> {
        self.draw_bounded(min, max, None)
    }

    /// Draws one unbiased integer in `[min, max)` that is not in `exclude`.
    ///
    /// Duplicate exclusion entries are collapsed; entries outside the range
    /// are ignored.
    ///
    /// # Errors
    ///
    /// In addition to the [`next_in_range`](Self::next_in_range) errors,
    /// returns [`RandError::ExhaustedRange`] if the exclusions reject every
    /// value in the range.
    pub fn next_in_range_excluding(
        &mut self,
        min: i64,
        max: i64,
        exclude: &[i64],
    ) -> Result<i64, RandError> {
        let excluded: BTreeSet<i64> = exclude.iter().copied().collect();

        self.draw_bounded(min, max, Some(&excluded))
    }

    fn draw_bounded(
        &mut self,
        min: i64,
        max: i64,
        exclude: Option<&BTreeSet<i64>>,
    ) -> Result<i64, RandError> {
        // i128 so i64::MIN..i64::MAX spans cannot overflow the check.
        let span = (max as i128) - (min as i128);

        if span <= 0 {
            return Err(RandError::InvalidRange);
        }
        if span > DOMAIN as i128 {
            return Err(RandError::RangeTooLarge);
        }

        let range = span as u64;

        if let Some(excluded) = exclude {
            if excluded.range(min..max).count() as u64 >= range {
                return Err(RandError::ExhaustedRange);
            }
        }

        // Everything at or above safe_limit would skew `raw % range` toward
        // low values; reject it and redraw.
        let safe_limit = DOMAIN - (DOMAIN % range);

        loop {
            let raw = self.next_word()? as u64;

            if raw >= safe_limit {
                continue;
            }

            let candidate = min + (raw % range) as i64;

            if let Some(excluded) = exclude {
                if excluded.contains(&candidate) {
                    continue;
                }
            }

            return Ok(candidate);
        }
    }

    fn next_word(&mut self) -> Result<u32, RandError> {
        if self.cursor == BLOCK {
            self.entropy.fill_bytes(&mut self.block)?;
            self.cursor = 0;
        }

        let word = u32::from_le_bytes([
            self.block[self.cursor],
            self.block[self.cursor + 1],
            self.block[self.cursor + 2],
            self.block[self.cursor + 3],
        ]);
        self.cursor += WORD;

        Ok(word)
    }

    /// Returns the backing entropy source, for test inspection.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    #[cfg(test)]
    pub(crate) fn cursor_for_test(&self) -> usize {
        self.cursor
    }
}
