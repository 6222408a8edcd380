//! Map service JSON descriptors.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{MetadataError, MetadataResult};

/// A map service's JSON descriptor.
///
/// The schema is free-form, so the document is kept as an ordered JSON object
/// with typed accessors for the handful of fields the pipeline reads. List
/// fields such as `supportedExtensions` are expected to have been split into
/// arrays already.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServiceDescriptor {
    fields: Map<String, Value>,
}

impl ServiceDescriptor {
    /// Wrap a parsed descriptor. The top-level value must be an object.
    pub fn from_value(url: &str, value: Value) -> MetadataResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(MetadataError::unexpected_shape(
                url,
                format!("service descriptor must be a JSON object, got {}", json_kind(&other)),
            )),
        }
    }

    /// Raw access to any descriptor field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Names of the server object extensions enabled on the service.
    ///
    /// `None` when the field is absent or not a list.
    pub fn supported_extensions(&self) -> Option<Vec<&str>> {
        self.string_list("supportedExtensions")
    }

    pub fn keywords(&self) -> Option<Vec<&str>> {
        self.string_list("keywords")
    }

    /// Operations the service allows (e.g. "Map", "Query", "Data").
    pub fn capabilities(&self) -> Option<Vec<&str>> {
        self.string_list("capabilities")
    }

    pub fn current_version(&self) -> Option<f64> {
        self.fields.get("currentVersion").and_then(Value::as_f64)
    }

    fn string_list(&self, key: &str) -> Option<Vec<&str>> {
        match self.fields.get(key)? {
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_supported_extensions_list() {
        let descriptor = ServiceDescriptor::from_value(
            "u",
            json!({ "supportedExtensions": ["KmlServer", "LayerMetadata"] }),
        )
        .unwrap();
        assert_eq!(
            descriptor.supported_extensions(),
            Some(vec!["KmlServer", "LayerMetadata"])
        );
    }

    #[test]
    fn test_unsplit_string_is_not_a_list() {
        let descriptor =
            ServiceDescriptor::from_value("u", json!({ "supportedExtensions": "KmlServer" }))
                .unwrap();
        assert_eq!(descriptor.supported_extensions(), None);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = ServiceDescriptor::from_value("http://host/x", json!([1, 2])).unwrap_err();
        assert!(matches!(err, MetadataError::UnexpectedShape { .. }));
        assert!(err.to_string().contains("got array"));
    }

    #[test]
    fn test_current_version() {
        let descriptor =
            ServiceDescriptor::from_value("u", json!({ "currentVersion": 10.81 })).unwrap();
        assert_eq!(descriptor.current_version(), Some(10.81));
        assert_eq!(descriptor.keywords(), None);
    }
}
