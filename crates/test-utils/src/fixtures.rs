//! Common test fixtures for metadata resolution tests.
//!
//! Documents are kept as raw JSON text so tests exercise the same parsing
//! path as live responses.

/// Root of the map service used throughout the fixtures.
pub const SERVICE_URL: &str = "https://gis.example.com/arcgis/rest/services/Transport/MapServer";

/// `SERVICE_URL` followed by a layer segment.
pub fn layer_url(layer_id: u32) -> String {
    format!("{}/{}", SERVICE_URL, layer_id)
}

/// Map service descriptors (`GET {service}?f=json`).
pub mod descriptors {
    /// Service with the LayerMetadata extension enabled.
    pub const WITH_LAYER_METADATA: &str = r#"{
  "currentVersion": 10.81,
  "serviceDescription": "Roads, rails, and trails",
  "mapName": "Transport",
  "capabilities": "Map,Query,Data",
  "supportedImageFormatTypes": "PNG32,PNG24,PNG,JPG",
  "supportedExtensions": "KmlServer, LayerMetadata, WMSServer",
  "documentInfo": {
    "Title": "Transport",
    "Keywords": "roads,rail"
  },
  "maxRecordCount": 1000,
  "layers": [
    { "id": 0, "name": "Interstates" },
    { "id": 1, "name": "Highways" },
    { "id": 2, "name": "Rail" }
  ]
}"#;

    /// Service without the extension.
    pub const WITHOUT_LAYER_METADATA: &str = r#"{
  "currentVersion": 10.81,
  "capabilities": "Map,Query",
  "supportedExtensions": "KmlServer, WMSServer"
}"#;

    /// Service that publishes no extension list at all.
    pub const NO_EXTENSIONS: &str = r#"{ "currentVersion": 10.0, "capabilities": "Map" }"#;
}

/// layerSources documents (`GET {url}/exts/LayerMetadata/layerSources?f=json`).
pub mod layer_sources {
    /// Two datasets; layers 0 and 1 share dataset A.
    pub const SIMPLE: &str = r#"{"A":[0,1],"B":[2]}"#;

    /// Layer 3 appears under two datasets; the first one listed wins.
    pub const OVERLAPPING: &str = r#"{"Interstates":[0],"Highways":[1,3],"Roads":[3,4]}"#;

    /// Entries that are not non-empty lists.
    pub const WITH_EMPTY: &str = r#"{"Rail":[2],"Unused":[],"Note":"legacy"}"#;
}

/// Web map item data documents.
pub mod webmaps {
    /// Two service layers and one inline feature collection.
    pub const TRANSPORT: &str = r#"{
  "operationalLayers": [
    {
      "id": "transport_0",
      "title": "Interstates",
      "url": "https://gis.example.com/arcgis/rest/services/Transport/MapServer/0"
    },
    {
      "id": "sketch",
      "title": "Sketch",
      "featureCollection": { "layers": [] }
    },
    {
      "id": "transport",
      "title": "Transport",
      "url": "https://gis.example.com/arcgis/rest/services/Transport/MapServer"
    }
  ],
  "baseMap": { "title": "Topographic", "baseMapLayers": [] },
  "version": "2.26"
}"#;
}

/// What an ArcGIS Server or proxy returns when the request fails upstream.
pub const HTML_ERROR_PAGE: &str = "<!DOCTYPE html>\n<html><head><title>Error</title></head><body>Service not started</body></html>";
