//! Web map item data, as returned by a portal's item data endpoint.

use serde::{Deserialize, Serialize};

/// The parts of a web map document the metadata lister reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebMap {
    #[serde(default)]
    pub operational_layers: Vec<OperationalLayer>,
}

/// A layer entry in a web map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalLayer {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Service URL; absent for layers stored inline (feature collections)
    #[serde(default)]
    pub url: Option<String>,
}

impl OperationalLayer {
    /// Title to show for the layer, falling back to its ID.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

impl WebMap {
    /// Layers backed by a service URL, in web map order.
    pub fn service_layers(&self) -> impl Iterator<Item = &OperationalLayer> {
        self.operational_layers.iter().filter(|layer| layer.url.is_some())
    }
}
