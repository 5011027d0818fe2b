//! Filter-parameter decoding.
//!
//! The host transmits active filters as an opaque, base64-encoded JSON
//! array of single-key descriptor maps: `[{"<filter-key>": value}, ...]`.
//! Decoding is deliberately forgiving: absent or malformed input decodes
//! to an empty descriptor list, never an error, because a broken filter
//! parameter must not fail the request.

use base64::prelude::*;
use serde_json::{Map, Value};

/// Decoder over one request's raw encoded filter parameter.
pub struct FilterDecoder<'a> {
    raw: Option<&'a str>,
}

impl<'a> FilterDecoder<'a> {
    pub fn new(raw: Option<&'a str>) -> Self {
        Self { raw }
    }

    /// Decode the payload into filter descriptors.
    ///
    /// Bad base64, bad JSON, a non-array payload, or non-object array
    /// elements all degrade to an empty (or shorter) descriptor list.
    pub fn descriptors(&self) -> Vec<Map<String, Value>> {
        let Some(raw) = self.raw else {
            return Vec::new();
        };

        let Ok(bytes) = BASE64_STANDARD.decode(raw.trim()) else {
            return Vec::new();
        };

        let Ok(value) = serde_json::from_slice::<Value>(&bytes) else {
            return Vec::new();
        };

        match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Extract the inline column selection marked by `filter_key`.
    ///
    /// Scans descriptors in order for the first one containing
    /// `filter_key`. Returns `Some` only when that value is a JSON
    /// array; its string elements become the selection (non-string
    /// elements are dropped). `Some(vec![])` means the user explicitly
    /// deselected every column, which is distinct from `None` (no
    /// inline selection on this request).
    pub fn selection(&self, filter_key: &str) -> Option<Vec<String>> {
        let descriptors = self.descriptors();
        let value = descriptors
            .iter()
            .find_map(|descriptor| descriptor.get(filter_key))?;

        match value {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(json: &str) -> String {
        BASE64_STANDARD.encode(json)
    }

    #[test]
    fn absent_parameter_decodes_to_empty() {
        let decoder = FilterDecoder::new(None);
        assert!(decoder.descriptors().is_empty());
        assert_eq!(decoder.selection("columns-filter"), None);
    }

    #[test]
    fn malformed_base64_decodes_to_empty() {
        let decoder = FilterDecoder::new(Some("%%%not-base64%%%"));
        assert!(decoder.descriptors().is_empty());
    }

    #[test]
    fn malformed_json_decodes_to_empty() {
        let raw = encode("{not json");
        let decoder = FilterDecoder::new(Some(&raw));
        assert!(decoder.descriptors().is_empty());
    }

    #[test]
    fn non_array_payload_decodes_to_empty() {
        let raw = encode(r#"{"columns-filter": ["name"]}"#);
        let decoder = FilterDecoder::new(Some(&raw));
        assert!(decoder.descriptors().is_empty());
    }

    #[test]
    fn non_object_elements_are_skipped() {
        let raw = encode(r#"[42, {"columns-filter": ["name"]}, "noise"]"#);
        let decoder = FilterDecoder::new(Some(&raw));
        assert_eq!(decoder.descriptors().len(), 1);
        assert_eq!(
            decoder.selection("columns-filter"),
            Some(vec!["name".to_string()])
        );
    }

    #[test]
    fn selection_takes_first_matching_descriptor() {
        let raw = encode(
            r#"[{"status": "active"}, {"columns-filter": ["name", "email"]}, {"columns-filter": ["id"]}]"#,
        );
        let decoder = FilterDecoder::new(Some(&raw));
        assert_eq!(
            decoder.selection("columns-filter"),
            Some(vec!["name".to_string(), "email".to_string()])
        );
    }

    #[test]
    fn scalar_selection_value_is_absent() {
        let raw = encode(r#"[{"columns-filter": "name"}]"#);
        let decoder = FilterDecoder::new(Some(&raw));
        assert_eq!(decoder.selection("columns-filter"), None);
    }

    #[test]
    fn null_selection_value_is_absent() {
        let raw = encode(r#"[{"columns-filter": null}]"#);
        let decoder = FilterDecoder::new(Some(&raw));
        assert_eq!(decoder.selection("columns-filter"), None);
    }

    #[test]
    fn empty_array_is_an_explicit_empty_selection() {
        let raw = encode(r#"[{"columns-filter": []}]"#);
        let decoder = FilterDecoder::new(Some(&raw));
        assert_eq!(decoder.selection("columns-filter"), Some(Vec::new()));
    }

    #[test]
    fn non_string_elements_are_dropped() {
        let raw = encode(r#"[{"columns-filter": ["name", 3, null, "email"]}]"#);
        let decoder = FilterDecoder::new(Some(&raw));
        assert_eq!(
            decoder.selection("columns-filter"),
            Some(vec!["name".to_string(), "email".to_string()])
        );
    }
}
