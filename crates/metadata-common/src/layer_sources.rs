//! Dataset to layer ID mappings published by the LayerMetadata extension.

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::json_kind;
use crate::{MetadataError, MetadataResult};

/// One dataset and the layers it backs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerSource {
    pub dataset: String,
    pub layer_ids: Vec<u32>,
}

/// Ordered mapping of dataset name to the layer IDs drawn from it.
///
/// Entry order matches the order of the source document. All layers listed
/// under one dataset share the same metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerSourceMap {
    entries: Vec<LayerSource>,
}

impl LayerSourceMap {
    /// Read a layerSources document (`{"dataset": [0, 1], ...}`).
    ///
    /// Values that are not arrays, and array items that are not non-negative
    /// integers, are ignored.
    pub fn from_value(url: &str, value: &Value) -> MetadataResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            MetadataError::unexpected_shape(
                url,
                format!("layer sources must be a JSON object, got {}", json_kind(value)),
            )
        })?;

        let entries = object
            .iter()
            .filter_map(|(dataset, ids)| {
                let ids = ids.as_array()?;
                Some(LayerSource {
                    dataset: dataset.clone(),
                    layer_ids: ids
                        .iter()
                        .filter_map(Value::as_u64)
                        .filter_map(|id| u32::try_from(id).ok())
                        .collect(),
                })
            })
            .collect();

        Ok(Self { entries })
    }

    /// The first dataset, in document order, whose layers include `layer_id`.
    pub fn dataset_for_layer(&self, layer_id: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|source| source.layer_ids.contains(&layer_id))
            .map(|source| source.dataset.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerSource> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
