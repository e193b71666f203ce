// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serde_json::Value;

/// Key names removed from every object level.
pub const FORBIDDEN_KEYS: [&str; 3] = ["__proto__", "prototype", "constructor"];

/// Removes forbidden keys from `value` and everything nested inside it.
///
/// Walks objects and arrays with an explicit worklist, so traversal depth
/// is bounded by the heap rather than the call stack. Scalars are left
/// untouched. The value is mutated in place; the return value is the
/// number of entries removed.
pub fn sanitize(value: &mut Value) -> usize {
    let mut removed = 0;
    let mut worklist: Vec<&mut Value> = vec![value];

    while let Some(node) = worklist.pop() {
        match node {
            Value::Object(map) => {
                for key in FORBIDDEN_KEYS {
                    if map.remove(key).is_some() {
                        removed += 1;
                    }
                }

                worklist.extend(map.values_mut());
            }
            Value::Array(items) => worklist.extend(items.iter_mut()),
            _ => {}
        }
    }

    removed
}
