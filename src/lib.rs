//! gst-which
//!
//! Answers "which plugin file provides element X / plugin Y?" against a
//! GStreamer-style plugin registry.
//!
//! # Architecture
//!
//! ## Registry indexing (`registry` module)
//! - `build_indexes()` - one pass over a `PluginSource`, producing
//!   element → plugin and plugin → path tables
//!
//! ## Query resolution (`query` module)
//! - `resolve()` - turn names into the sorted, de-duplicated set of plugin
//!   paths, by element name or by plugin name
//!
//! ## Plugin sources (`source` module)
//! - `PluginSource` - the registry seam; feature lists are scoped handles
//! - `MemorySource`, `RegistrySnapshot` - in-memory and JSON-file registries
//! - `GstRegistrySource` - the live GStreamer registry (`gstreamer` feature)
//!
//! ## Glue
//! - `cli` - argument parsing
//! - `config` - environment settings
//! - `render` - verbose diagnostics and the final path line

pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod error;
#[cfg(feature = "gstreamer")]
pub mod gst_registry;
pub mod plugin;
pub mod query;
pub mod registry;
pub mod render;
pub mod source;

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
#[cfg(feature = "gstreamer")]
pub use gst_registry::GstRegistrySource;
pub use plugin::{Feature, PluginRecord};
pub use query::{resolve, LookupMode, QueryResult, Resolution};
pub use registry::{build_indexes, ElementIndex, IndexOutcome, PluginPathIndex, RegistryIndex};
pub use source::{FeatureList, MemorySource, PluginSource, RegistrySnapshot};
