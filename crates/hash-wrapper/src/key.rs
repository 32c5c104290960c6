//! Attribute key spellings.
//!
//! Callers name attributes either with a symbol-style spelling (`:pricing`)
//! or a plain string (`pricing`). Lookups try the spelling as given first,
//! then the canonical string form.

use serde_json::{Map, Value};

pub const SYMBOL_SIGIL: char = ':';

/// Canonical string spelling of an attribute name.
///
/// ```
/// use hash_wrapper::canonical_key;
///
/// assert_eq!(canonical_key(":pricing"), "pricing");
/// assert_eq!(canonical_key("pricing"), "pricing");
/// ```
pub fn canonical_key(name: &str) -> &str {
    name.strip_prefix(SYMBOL_SIGIL).unwrap_or(name)
}

/// Native spelling first, canonical spelling second.
pub(crate) fn lookup<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(name) {
        return Some(value);
    }
    let canonical = canonical_key(name);
    if canonical.len() == name.len() {
        return None;
    }
    map.get(canonical)
}
