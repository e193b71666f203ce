// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to the real entropy source).
    None,
    /// Always fail fill_bytes.
    FailAlways,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
}

/// Mock entropy source for testing.
///
/// Wraps [`SystemEntropySource`] but allows simulating failures via
/// [`MockEntropySourceBehaviour`] and counting `fill_bytes` calls. A
/// scripted variant replays a fixed byte sequence cyclically so bounded
/// draws become fully deterministic.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    script: Option<Vec<u8>>,
    script_pos: Cell<usize>,
    fill_bytes_count: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            script: None,
            script_pos: Cell::new(0),
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Creates a mock that replays `script` cyclically instead of real entropy.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn with_script(script: Vec<u8>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");

        Self {
            inner: SystemEntropySource {},
            behaviour: MockEntropySourceBehaviour::None,
            script: Some(script),
            script_pos: Cell::new(0),
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&self) {
        self.fill_bytes_count.set(0);
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }

    fn fill_from_script(&self, script: &[u8], dest: &mut [u8]) {
        let mut pos = self.script_pos.get();

        for byte in dest.iter_mut() {
            *byte = script[pos % script.len()];
            pos += 1;
        }

        self.script_pos.set(pos);
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let current = self.fill_bytes_count.get();
        self.fill_bytes_count.set(current + 1);

        match self.behaviour {
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if current + 1 == n => {
                Err(EntropyError::EntropyNotAvailable)
            }
            _ => match &self.script {
                Some(script) => {
                    self.fill_from_script(script, dest);
                    Ok(())
                }
                None => self.inner.fill_bytes(dest),
            },
        }
    }
}
