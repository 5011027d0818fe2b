//! Slug and label derivation.
//!
//! Resource slugs are a pure function of the resource's type name: the
//! last path segment is split on CamelCase boundaries, lowercased,
//! hyphen-joined, and the final word pluralized. The slug in turn keys
//! the per-session selection cache.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Suffix appended to the resource slug to form the cache key.
pub const CACHE_KEY_SUFFIX: &str = "-columns-filter-fields";

/// Words whose plural does not follow the regular suffix rules.
static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("child", "children"),
        ("person", "people"),
        ("man", "men"),
        ("woman", "women"),
        ("foot", "feet"),
        ("tooth", "teeth"),
        ("goose", "geese"),
        ("mouse", "mice"),
        ("datum", "data"),
        ("criterion", "criteria"),
    ])
});

/// Derive the stable slug for a resource type name.
///
/// Accepts either a bare type name or a full path; only the last
/// `::`-delimited segment matters. Examples:
/// `"InvoiceItem"` → `"invoice-items"`,
/// `"resources::Invoice"` → `"invoices"`.
pub fn resource_slug(type_name: &str) -> String {
    let name = type_name.rsplit("::").next().unwrap_or(type_name);

    let mut words = split_camel(name);
    if let Some(last) = words.pop() {
        words.push(pluralize(&last));
    }
    words.join("-")
}

/// Full session-store key for a resource slug.
pub fn cache_key(slug: &str) -> String {
    format!("{slug}{CACHE_KEY_SUFFIX}")
}

/// Split a CamelCase name into lowercased words.
fn split_camel(name: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in name.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            words.push(current);
            current = String::new();
        }
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Pluralize a single lowercase English word.
///
/// Irregulars first, then suffix rules: `s`/`x`/`z`/`ch`/`sh` take
/// `es`, consonant + `y` becomes `ies`, everything else takes `s`.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(plural) = IRREGULAR_PLURALS.get(word) {
        return (*plural).to_string();
    }

    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('y') {
        let preceded_by_vowel = stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if !preceded_by_vowel {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}

/// Humanize an attribute name into a display label.
///
/// Dot-separated segments are labelized independently and rejoined
/// with dots; within a segment, `_`, `-` and `,` become spaces and each
/// word's first letter is uppercased. `"billing_address.zip_code"` →
/// `"Billing Address.Zip Code"`.
pub fn labelize(attribute: &str) -> String {
    attribute
        .split('.')
        .map(|segment| {
            segment
                .replace(['_', '-', ','], " ")
                .split_whitespace()
                .map(uppercase_first)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
