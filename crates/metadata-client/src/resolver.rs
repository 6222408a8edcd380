//! Layer-source resolution.

use metadata_common::{LayerSourceMap, MetadataDocumentMap, MetadataResult, ServiceReference};
use metadata_protocol::{
    layer_sources_url, parse_service_url, single_layer_documents, supports_layer_metadata,
    whole_service_documents,
};
use tracing::{debug, info, instrument};

use crate::descriptor::fetch_service_descriptor;
use crate::fetch::Fetch;

/// Resolves dataset metadata document URLs for map service URLs.
///
/// Holds no state besides the fetcher, so one resolver can serve any number
/// of concurrent resolutions.
#[derive(Debug, Clone)]
pub struct LayerSourceResolver<F> {
    fetch: F,
}

impl<F: Fetch> LayerSourceResolver<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetch
    }

    /// Resolve the metadata documents for a service or sublayer URL.
    ///
    /// Returns `Ok(None)` when the service lacks the LayerMetadata extension
    /// or, for a sublayer URL, when no dataset lists the layer.
    #[instrument(skip(self))]
    pub async fn resolve(&self, url: &str) -> MetadataResult<Option<MetadataDocumentMap>> {
        let reference = parse_service_url(url)?;
        self.resolve_reference(url, &reference).await
    }

    /// Resolve with an already parsed reference for `url`.
    pub async fn resolve_reference(
        &self,
        url: &str,
        reference: &ServiceReference,
    ) -> MetadataResult<Option<MetadataDocumentMap>> {
        let descriptor = fetch_service_descriptor(&self.fetch, &reference.base_url).await?;
        if !supports_layer_metadata(&descriptor) {
            debug!(service = %reference.base_url, "LayerMetadata extension not enabled");
            return Ok(None);
        }

        // Built from the request URL, not the service root.
        let sources_url = layer_sources_url(url);
        let value = self.fetch.get_json(&sources_url).await?;

        let documents = match reference.layer_id {
            None => Some(whole_service_documents(&sources_url, &reference.base_url, value)?),
            Some(layer_id) => {
                let sources = LayerSourceMap::from_value(&sources_url, &value)?;
                single_layer_documents(&reference.base_url, &sources, layer_id)
            }
        };

        match &documents {
            Some(map) => info!(
                service = %reference,
                datasets = map.len(),
                "Resolved metadata documents"
            ),
            None => debug!(service = %reference, "Layer not listed in layer sources"),
        }
        Ok(documents)
    }
}
