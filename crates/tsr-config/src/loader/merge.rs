//! Configuration merging logic
//!
//! Sources are combined key by key: a key present in the overlay replaces the
//! base value wholesale. Values are never merged recursively, so an array or
//! object from the overlay fully replaces the base one.

use serde_json::{Map, Value};

/// Merge `overlay` on top of `base`, with `overlay` taking precedence.
///
/// Takes ownership of `base` and only borrows `overlay`, so caller-owned
/// overrides are left untouched.
pub fn merge(mut base: Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overlay {
        base.insert(key.clone(), value.clone());
    }
    base
}
