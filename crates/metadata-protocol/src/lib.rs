//! Map service LayerMetadata extension protocol.
//!
//! Pure functions only; requests are issued by `metadata-client`.
//!
//! Supports:
//! - Splitting service URLs into a service root and sublayer ID
//! - Reshaping service descriptors (comma-separated list fields)
//! - Detecting the LayerMetadata server object extension
//! - Deriving metadata document URLs from layerSources documents

pub mod capability;
pub mod layer_sources;
pub mod reshape;
pub mod service_url;

pub use capability::{supports_layer_metadata, LAYER_METADATA_EXTENSION};
pub use layer_sources::{single_layer_documents, whole_service_documents};
pub use reshape::{is_comma_list_field, reshape_descriptor};
pub use service_url::{
    descriptor_url, layer_sources_url, metadata_document_url, parse_service_url,
};
