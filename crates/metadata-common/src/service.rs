//! Service references derived from map service URLs.

use serde::{Deserialize, Serialize};

/// A map service URL split into the service root and an optional sublayer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceReference {
    /// Map service root, without a trailing slash or layer segment
    pub base_url: String,

    /// Sublayer identifier when the URL designates a single layer
    pub layer_id: Option<u32>,
}

impl ServiceReference {
    pub fn new(base_url: impl Into<String>, layer_id: Option<u32>) -> Self {
        Self {
            base_url: base_url.into(),
            layer_id,
        }
    }

    /// Whether this reference designates one sublayer rather than the whole service.
    pub fn is_single_layer(&self) -> bool {
        self.layer_id.is_some()
    }
}

impl std::fmt::Display for ServiceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.layer_id {
            Some(id) => write!(f, "{}/{}", self.base_url, id),
            None => write!(f, "{}", self.base_url),
        }
    }
}
