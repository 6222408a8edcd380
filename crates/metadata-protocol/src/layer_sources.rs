//! Metadata document derivation from layerSources documents.
//!
//! Two modes:
//! - Whole service: every dataset with at least one layer resolves to the
//!   metadata document of its first layer. Layers sharing a dataset share a
//!   document, so one representative ID is enough.
//! - Single layer: the first dataset (document order) that lists the layer
//!   resolves to the metadata document of that layer.

use metadata_common::{
    LayerSourceMap, MetadataDocument, MetadataDocumentMap, MetadataError, MetadataResult,
};
use serde_json::Value;
use tracing::debug;

use crate::service_url::metadata_document_url;

/// Build the metadata document map for a whole service.
///
/// Array values with at least one element become the URL of the document for
/// the first element. Any other value, including an empty array, is carried
/// through unchanged.
pub fn whole_service_documents(
    url: &str,
    base_url: &str,
    layer_sources: Value,
) -> MetadataResult<MetadataDocumentMap> {
    let Value::Object(datasets) = layer_sources else {
        return Err(MetadataError::unexpected_shape(
            url,
            "layer sources must be a JSON object",
        ));
    };

    let mut documents = MetadataDocumentMap::new();
    for (dataset, value) in datasets {
        let document = match value {
            Value::Array(ids) if !ids.is_empty() => {
                MetadataDocument::Url(metadata_document_url(base_url, id_segment(&ids[0])))
            }
            other => {
                debug!(dataset = %dataset, "Layer source value passed through unchanged");
                MetadataDocument::Passthrough(other)
            }
        };
        documents.insert(dataset, document);
    }

    Ok(documents)
}

/// Resolve the metadata document for one sublayer.
///
/// Returns `None` when no dataset lists `layer_id`.
pub fn single_layer_documents(
    base_url: &str,
    sources: &LayerSourceMap,
    layer_id: u32,
) -> Option<MetadataDocumentMap> {
    let dataset = sources.dataset_for_layer(layer_id)?;
    Some(MetadataDocumentMap::single(
        dataset,
        metadata_document_url(base_url, layer_id),
    ))
}

fn id_segment(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
