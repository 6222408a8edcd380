//! Metadata resolution client.
//!
//! Talks to a map service and its LayerMetadata extension:
//! - Fetches and reshapes the service descriptor
//! - Checks for the extension
//! - Fetches layerSources and derives metadata document URLs for a whole
//!   service or a single sublayer
//!
//! Each resolution is at most two sequential requests with no retries and no
//! shared state, so resolutions for different layers can run concurrently.

pub mod descriptor;
pub mod fetch;
pub mod resolver;
pub mod webmap;

pub use descriptor::fetch_service_descriptor;
pub use fetch::{Fetch, FetcherConfig, HttpFetcher, StaticFetcher};
pub use resolver::LayerSourceResolver;
pub use webmap::{fetch_web_map, item_data_url, parse_web_map};
