//! Map service descriptor retrieval.

use metadata_common::{MetadataResult, ServiceDescriptor};
use metadata_protocol::{descriptor_url, reshape_descriptor};
use tracing::{debug, instrument};

use crate::fetch::Fetch;

/// Fetch `{base_url}?f=json` and reshape its comma-separated list fields.
///
/// Fails with a transport error if the request fails, and with a malformed
/// response error (carrying the parser message) if the body is not JSON,
/// which is what an HTML error page produces.
#[instrument(skip(fetch))]
pub async fn fetch_service_descriptor<F: Fetch + ?Sized>(
    fetch: &F,
    base_url: &str,
) -> MetadataResult<ServiceDescriptor> {
    let url = descriptor_url(base_url);
    let value = fetch.get_json(&url).await?;
    let descriptor = ServiceDescriptor::from_value(&url, reshape_descriptor(value))?;

    debug!(
        extensions = ?descriptor.supported_extensions(),
        "Fetched service descriptor"
    );
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use test_utils::{descriptors, HTML_ERROR_PAGE, SERVICE_URL};

    #[tokio::test]
    async fn test_descriptor_is_reshaped() {
        let fetcher = StaticFetcher::new().with_response(
            format!("{}?f=json", SERVICE_URL),
            descriptors::WITH_LAYER_METADATA,
        );

        let descriptor = fetch_service_descriptor(&fetcher, SERVICE_URL).await.unwrap();
        assert_eq!(
            descriptor.supported_extensions(),
            Some(vec!["KmlServer", "LayerMetadata", "WMSServer"])
        );
        assert_eq!(descriptor.capabilities(), Some(vec!["Map", "Query", "Data"]));
        assert_eq!(
            descriptor.get("documentInfo").unwrap()["Keywords"],
            serde_json::json!(["roads", "rail"])
        );
        assert_eq!(descriptor.get("maxRecordCount"), Some(&serde_json::json!(1000)));
    }

    #[tokio::test]
    async fn test_html_error_page() {
        let fetcher =
            StaticFetcher::new().with_response(format!("{}?f=json", SERVICE_URL), HTML_ERROR_PAGE);

        let err = fetch_service_descriptor(&fetcher, SERVICE_URL).await.unwrap_err();
        assert!(err.is_html_error_page());
        assert!(err.to_string().contains("unexpected token '<'"));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let fetcher = StaticFetcher::new();
        let err = fetch_service_descriptor(&fetcher, SERVICE_URL).await.unwrap_err();
        assert_eq!(err.kind(), "TransportError");
    }
}
