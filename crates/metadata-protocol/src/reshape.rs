//! Descriptor reshaping.
//!
//! Map service descriptors publish several list-valued fields as a single
//! comma-separated string (`"supportedExtensions": "KmlServer, LayerMetadata"`).
//! These are rewritten into JSON arrays after parsing so the rest of the
//! pipeline only ever sees lists.

use serde_json::Value;

/// Whether a descriptor field holds a comma-separated list.
///
/// Matches `keywords`, `capabilities`, and any field starting with
/// `supported` (`supportedExtensions`, `supportedImageFormatTypes`, ...),
/// ignoring case.
pub fn is_comma_list_field(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower == "keywords" || lower == "capabilities" || lower.starts_with("supported")
}

/// Rewrite comma-separated list fields into arrays, at every depth.
///
/// Only string values are split; a field that is already an array, a number,
/// or an object is left alone. An empty string becomes an empty array.
pub fn reshape_descriptor(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, child)| {
                    let child = reshape_descriptor(child);
                    let child = match child {
                        Value::String(s) if is_comma_list_field(&key) => split_list(&s),
                        other => other,
                    };
                    (key, child)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(reshape_descriptor).collect()),
        other => other,
    }
}

fn split_list(s: &str) -> Value {
    if s.trim().is_empty() {
        return Value::Array(Vec::new());
    }
    Value::Array(
        s.split(',')
            .map(|part| Value::String(part.trim().to_string()))
            .collect(),
    )
}
