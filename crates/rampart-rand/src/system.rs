// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// OS-backed entropy source.
///
/// Delegates to the `getrandom` crate, which selects the appropriate
/// platform CSPRNG (`getrandom(2)`, `getentropy`, `BCryptGenRandom`,
/// `crypto.getRandomValues`). Stateless; construct freely.
pub struct SystemEntropySource {}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}
