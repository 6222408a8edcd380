//! Common types shared by the layer metadata crates and services.

pub mod descriptor;
pub mod error;
pub mod layer_sources;
pub mod metadata;
pub mod service;
pub mod webmap;

pub use descriptor::ServiceDescriptor;
pub use error::{MetadataError, MetadataResult};
pub use layer_sources::LayerSourceMap;
pub use metadata::{MetadataDocument, MetadataDocumentMap};
pub use service::ServiceReference;
pub use webmap::{OperationalLayer, WebMap};
