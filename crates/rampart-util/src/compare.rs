// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use subtle::ConstantTimeEq;

use crate::error::CompareError;

/// Compares two byte slices in constant time.
///
/// Execution time depends on the operand lengths, never on the position of
/// the first differing byte. Slices of different lengths compare unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Compares an incoming value against a non-empty reference in constant time.
///
/// `incoming` may legitimately be absent ("no value supplied"); the
/// comparison still walks every byte of `reference` and returns `false`, so
/// execution time depends only on `reference`'s length. Bytes past the end
/// of a shorter `incoming` are read as 0. Text operands enter as their
/// UTF-8 bytes.
///
/// # Errors
///
/// Returns [`CompareError::EmptyReference`] if `reference` is empty. This
/// is a caller-usage error, reported before any byte of either operand is
/// inspected.
pub fn secure_compare(reference: &[u8], incoming: Option<&[u8]>) -> Result<bool, CompareError> {
    if reference.is_empty() {
        return Err(CompareError::EmptyReference);
    }

    let other = incoming.unwrap_or(&[]);

    // Absence and length skew poison the accumulator up front; the loop
    // below never terminates early on them.
    let mut mismatch: u64 = u64::from(incoming.is_none());
    mismatch |= (reference.len() as u64) ^ (other.len() as u64);

    for (index, &byte) in reference.iter().enumerate() {
        let candidate = other.get(index).copied().unwrap_or(0);
        mismatch |= u64::from(byte ^ candidate);
    }

    Ok(mismatch.ct_eq(&0).into())
}
