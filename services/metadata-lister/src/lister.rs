//! Resolves metadata for every service layer of a web map.

use futures::stream::{self, StreamExt};
use metadata_client::{Fetch, LayerSourceResolver};
use metadata_common::{MetadataDocumentMap, MetadataError, OperationalLayer, WebMap};
use tracing::{info, warn};

/// Outcome of resolving one layer.
#[derive(Debug)]
pub enum Outcome {
    Documents(MetadataDocumentMap),
    /// Extension not enabled, layer not listed, or nothing published
    NoMetadata,
    Failed(MetadataError),
}

/// One operational layer and what its metadata resolved to.
#[derive(Debug)]
pub struct LayerReport {
    pub id: String,
    pub title: String,
    pub url: String,
    pub outcome: Outcome,
}

/// Treat bare service URLs as an untitled web map.
pub fn web_map_from_urls(urls: &[String]) -> WebMap {
    WebMap {
        operational_layers: urls
            .iter()
            .map(|url| OperationalLayer {
                id: url.clone(),
                title: url.clone(),
                url: Some(url.clone()),
            })
            .collect(),
    }
}

/// Resolve every service-backed layer, at most `max_concurrent` at a time.
///
/// Reports come back in web map order regardless of completion order. A
/// failing layer does not affect the others.
pub async fn resolve_web_map<F: Fetch>(
    resolver: &LayerSourceResolver<F>,
    web_map: &WebMap,
    max_concurrent: usize,
) -> Vec<LayerReport> {
    let reports: Vec<LayerReport> = stream::iter(web_map.service_layers())
        .map(|layer| resolve_layer(resolver, layer))
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    let failed = reports
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
        .count();
    info!(layers = reports.len(), failed = failed, "Resolved web map layers");
    reports
}

async fn resolve_layer<F: Fetch>(
    resolver: &LayerSourceResolver<F>,
    layer: &OperationalLayer,
) -> LayerReport {
    let url = layer.url.clone().unwrap_or_default();
    let outcome = match resolver.resolve(&url).await {
        Ok(Some(documents)) if !documents.is_empty() => Outcome::Documents(documents),
        Ok(_) => Outcome::NoMetadata,
        Err(e) => {
            warn!(layer = %layer.id, kind = e.kind(), error = %e, "Metadata resolution failed");
            Outcome::Failed(e)
        }
    };

    LayerReport {
        id: layer.id.clone(),
        title: layer.display_title().to_string(),
        url,
        outcome,
    }
}
