//! LayerMetadata extension detection.

use metadata_common::ServiceDescriptor;

/// Extension name a map service lists in `supportedExtensions` when the
/// LayerMetadata server object extension is enabled.
pub const LAYER_METADATA_EXTENSION: &str = "LayerMetadata";

/// Check whether a service exposes the LayerMetadata extension.
///
/// Exact, case-sensitive match against the reshaped extension list.
pub fn supports_layer_metadata(descriptor: &ServiceDescriptor) -> bool {
    descriptor
        .supported_extensions()
        .is_some_and(|extensions| extensions.contains(&LAYER_METADATA_EXTENSION))
}
