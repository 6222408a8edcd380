//! Shared test utilities for the layer metadata workspace.
//!
//! This crate provides:
//! - JSON fixtures for map service descriptors, layerSources documents and
//!   web maps, including the HTML error page servers return instead of JSON
//! - Path and temporary file helpers
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! ```ignore
//! use test_utils::{descriptors, layer_sources, SERVICE_URL};
//! ```

pub mod fixtures;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use paths::*;
