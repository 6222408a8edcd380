//! Service URL grammar and request URL construction.

use metadata_common::{MetadataError, MetadataResult, ServiceReference};

/// Path of the LayerMetadata extension below a map service.
pub const EXTENSION_PATH: &str = "exts/LayerMetadata";

/// Split a map service URL into its service root and optional sublayer ID.
///
/// Expected formats:
/// - `{service}` or `{service}/` (whole service)
/// - `{service}/{layerId}` or `{service}/{layerId}/` (single sublayer)
///
/// Only a final path segment made entirely of ASCII digits counts as a layer
/// ID; `.../MapServer2` is a whole-service URL.
///
/// URLs with a query string or fragment are rejected: request URLs are built
/// by appending paths and `?f=json`, so a token must be supplied by the
/// fetcher rather than embedded in the service URL.
pub fn parse_service_url(url: &str) -> MetadataResult<ServiceReference> {
    if url.contains(|c: char| c == '?' || c == '#') {
        return Err(MetadataError::MalformedUrl(format!(
            "{} (query strings and fragments are not supported)",
            url
        )));
    }

    let trimmed = url.strip_suffix('/').unwrap_or(url);
    if trimmed.is_empty() {
        return Err(MetadataError::MalformedUrl(url.to_string()));
    }

    if let Some((base, segment)) = trimmed.rsplit_once('/') {
        if !base.is_empty() && !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
        {
            let layer_id: u32 = segment.parse().map_err(|_| {
                MetadataError::MalformedUrl(format!("{} (layer ID out of range)", url))
            })?;
            return Ok(ServiceReference::new(base, Some(layer_id)));
        }
    }

    Ok(ServiceReference::new(trimmed, None))
}

/// `{base_url}?f=json`
pub fn descriptor_url(base_url: &str) -> String {
    format!("{}?f=json", base_url)
}

/// URL of the layerSources document for a request URL.
///
/// Built from the URL as given, not from the parsed service root, so a
/// sublayer URL keeps its layer segment: `.../MapServer/3` requests
/// `.../MapServer/3/exts/LayerMetadata/layerSources?f=json`.
// TODO confirm against a live LayerMetadata deployment whether sublayer URLs
// should use the service root here instead.
pub fn layer_sources_url(request_url: &str) -> String {
    let trimmed = request_url.strip_suffix('/').unwrap_or(request_url);
    format!("{}/{}/layerSources?f=json", trimmed, EXTENSION_PATH)
}

/// `{base_url}/exts/LayerMetadata/metadata/{id}`
pub fn metadata_document_url(base_url: &str, id: impl std::fmt::Display) -> String {
    format!("{}/{}/metadata/{}", base_url, EXTENSION_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &str = "https://host/arcgis/rest/services/Roads/MapServer";

    #[test]
    fn test_whole_service() {
        let r = parse_service_url(SERVICE).unwrap();
        assert_eq!(r.base_url, SERVICE);
        assert_eq!(r.layer_id, None);
        assert!(!r.is_single_layer());
    }

    #[test]
    fn test_whole_service_trailing_slash() {
        let r = parse_service_url(&format!("{}/", SERVICE)).unwrap();
        assert_eq!(r.base_url, SERVICE);
        assert_eq!(r.layer_id, None);
    }

    #[test]
    fn test_single_layer() {
        let r = parse_service_url(&format!("{}/12", SERVICE)).unwrap();
        assert_eq!(r.base_url, SERVICE);
        assert_eq!(r.layer_id, Some(12));
    }

    #[test]
    fn test_single_layer_trailing_slash() {
        let r = parse_service_url(&format!("{}/0/", SERVICE)).unwrap();
        assert_eq!(r.base_url, SERVICE);
        assert_eq!(r.layer_id, Some(0));
    }

    #[test]
    fn test_digits_inside_word_are_not_a_layer() {
        let url = "https://host/arcgis/rest/services/Roads2024/MapServer2";
        let r = parse_service_url(url).unwrap();
        assert_eq!(r.base_url, url);
        assert_eq!(r.layer_id, None);
    }

    #[test]
    fn test_mixed_segment_is_not_a_layer() {
        let url = "https://host/services/Layer/3a";
        assert_eq!(parse_service_url(url).unwrap().layer_id, None);
    }

    #[test]
    fn test_only_one_trailing_slash_removed() {
        let r = parse_service_url("https://host/MapServer//").unwrap();
        assert_eq!(r.base_url, "https://host/MapServer/");
        assert_eq!(r.layer_id, None);
    }

    #[test]
    fn test_empty_is_malformed() {
        assert!(matches!(parse_service_url(""), Err(MetadataError::MalformedUrl(_))));
        assert!(matches!(parse_service_url("/"), Err(MetadataError::MalformedUrl(_))));
    }

    #[test]
    fn test_query_string_is_malformed() {
        let err = parse_service_url(&format!("{}/3?token=abc", SERVICE)).unwrap_err();
        assert!(matches!(err, MetadataError::MalformedUrl(_)));
        assert!(err.to_string().contains("query strings"));
        assert!(parse_service_url(&format!("{}#layers", SERVICE)).is_err());
    }

    #[test]
    fn test_layer_id_overflow_is_malformed() {
        let err = parse_service_url("https://host/MapServer/99999999999").unwrap_err();
        assert_eq!(err.kind(), "MalformedUrlError");
    }

    #[test]
    fn test_bare_number_is_whole_service() {
        let r = parse_service_url("42").unwrap();
        assert_eq!(r.base_url, "42");
        assert_eq!(r.layer_id, None);
    }

    #[test]
    fn test_request_urls() {
        assert_eq!(descriptor_url(SERVICE), format!("{}?f=json", SERVICE));
        assert_eq!(
            metadata_document_url(SERVICE, 4),
            format!("{}/exts/LayerMetadata/metadata/4", SERVICE)
        );
    }

    #[test]
    fn test_layer_sources_url_keeps_layer_segment() {
        assert_eq!(
            layer_sources_url(&format!("{}/3/", SERVICE)),
            format!("{}/3/exts/LayerMetadata/layerSources?f=json", SERVICE)
        );
        assert_eq!(
            layer_sources_url(SERVICE),
            format!("{}/exts/LayerMetadata/layerSources?f=json", SERVICE)
        );
    }
}
