//! Resolved metadata documents, keyed by dataset.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// What a dataset resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataDocument {
    /// URL of the dataset's metadata document
    Url(String),
    /// A layerSources value that was not a non-empty list, kept as-is
    Passthrough(Value),
}

impl MetadataDocument {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            MetadataDocument::Url(url) => Some(url),
            MetadataDocument::Passthrough(_) => None,
        }
    }
}

/// Ordered mapping of dataset name to its metadata document.
///
/// Serializes as a JSON object in entry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDocumentMap {
    entries: Vec<(String, MetadataDocument)>,
}

impl MetadataDocumentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding exactly one resolved dataset.
    pub fn single(dataset: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            entries: vec![(dataset.into(), MetadataDocument::Url(url.into()))],
        }
    }

    pub fn insert(&mut self, dataset: impl Into<String>, document: MetadataDocument) {
        let dataset = dataset.into();
        match self.entries.iter_mut().find(|(name, _)| *name == dataset) {
            Some((_, existing)) => *existing = document,
            None => self.entries.push((dataset, document)),
        }
    }

    pub fn get(&self, dataset: &str) -> Option<&MetadataDocument> {
        self.entries
            .iter()
            .find(|(name, _)| name == dataset)
            .map(|(_, document)| document)
    }

    /// Convenience lookup for a resolved document URL.
    pub fn url(&self, dataset: &str) -> Option<&str> {
        self.get(dataset).and_then(MetadataDocument::as_url)
    }

    /// Resolved `(dataset, url)` pairs in entry order.
    pub fn urls(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, document)| Some((name.as_str(), document.as_url()?)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataDocument)> {
        self.entries.iter().map(|(name, document)| (name.as_str(), document))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetadataDocumentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, document) in &self.entries {
            match document {
                MetadataDocument::Url(url) => map.serialize_entry(name, url)?,
                MetadataDocument::Passthrough(value) => map.serialize_entry(name, value)?,
            }
        }
        map.end()
    }
}
