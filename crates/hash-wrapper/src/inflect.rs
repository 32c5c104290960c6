//! Attribute name to default type name.
//!
//! `offers` becomes `Offer`, `line_items` becomes `LineItem`. The rule is
//! deliberately small: drop one trailing `s` (kept after another `s`), then
//! camelize each `_`-separated word. `::` namespaces are camelized
//! segment by segment.

use crate::key::canonical_key;

/// Type name for a nested map read under `attr`; empty when `attr` has no
/// word characters outside `_` and the symbol sigil.
pub fn default_type_name(attr: &str) -> String {
    let singular = singularize(canonical_key(attr));
    singular
        .split("::")
        .map(camelize)
        .collect::<Vec<_>>()
        .join("::")
}

fn singularize(word: &str) -> &str {
    if word.len() > 1 && word.ends_with('s') && !word.ends_with("ss") {
        &word[..word.len() - 1]
    } else {
        word
    }
}

fn camelize(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for part in segment.split('_').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
