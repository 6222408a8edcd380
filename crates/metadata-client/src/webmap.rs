//! Web map item data retrieval.
//!
//! Authentication is the caller's concern: the item data URL is requested
//! as given, so a token query parameter must already be attached.

use metadata_common::{MetadataError, MetadataResult, WebMap};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::fetch::{parse_json, Fetch};

/// `{portal_url}/sharing/rest/content/items/{item_id}/data?f=json`
pub fn item_data_url(portal_url: &str, item_id: &str) -> String {
    format!(
        "{}/sharing/rest/content/items/{}/data?f=json",
        portal_url.trim_end_matches('/'),
        item_id
    )
}

/// Fetch and parse a web map's item data.
#[instrument(skip(fetch))]
pub async fn fetch_web_map<F: Fetch + ?Sized>(fetch: &F, url: &str) -> MetadataResult<WebMap> {
    let body = fetch.get_text(url).await?;
    parse_web_map(url, &body)
}

/// Parse web map item data. The document must carry an `operationalLayers` list.
pub fn parse_web_map(url: &str, body: &str) -> MetadataResult<WebMap> {
    let value = parse_json(url, body)?;
    if !matches!(value.get("operationalLayers"), Some(Value::Array(_))) {
        return Err(MetadataError::unexpected_shape(
            url,
            "web map has no operationalLayers list",
        ));
    }

    let web_map: WebMap = serde_json::from_value(value)
        .map_err(|e| MetadataError::unexpected_shape(url, e.to_string()))?;

    debug!(layers = web_map.operational_layers.len(), "Parsed web map");
    Ok(web_map)
}
