// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_sanitize
//!
//! Defensive scrubbing of structured values against prototype-pollution
//! style key injection. Removes entries named `__proto__`, `prototype` or
//! `constructor` at every level of a nested [`serde_json::Value`], in
//! place.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let mut payload = json!({
//!     "name": "alice",
//!     "__proto__": { "admin": true },
//!     "settings": { "constructor": {}, "theme": "dark" },
//! });
//!
//! let removed = rampart_sanitize::sanitize(&mut payload);
//!
//! assert_eq!(removed, 2);
//! assert_eq!(payload, json!({ "name": "alice", "settings": { "theme": "dark" } }));
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod sanitize;

pub use sanitize::{FORBIDDEN_KEYS, sanitize};
