//! Registry indexing.
//!
//! Walks a [`PluginSource`] once and copies out two lookup tables:
//! element name → owning plugin, and plugin name → file path. Nothing here
//! fails; incomplete registry entries are skipped and reported as
//! [`Diagnostic`]s.

use crate::diagnostic::Diagnostic;
use crate::plugin::PluginRecord;
use crate::source::PluginSource;
use std::collections::HashMap;
use tracing::{debug, info};

/// Element name → name of the plugin providing it.
pub type ElementIndex = HashMap<String, String>;

/// Plugin name → file path of the plugin.
pub type PluginPathIndex = HashMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryIndex {
    pub elements: ElementIndex,
    pub plugin_paths: PluginPathIndex,
}

impl RegistryIndex {
    /// Path of the plugin that provides `element`.
    pub fn element_path(&self, element: &str) -> Option<(&str, &str)> {
        let plugin = self.elements.get(element)?;
        let path = self.plugin_paths.get(plugin)?;
        Some((plugin.as_str(), path.as_str()))
    }

    pub fn plugin_path(&self, plugin: &str) -> Option<&str> {
        self.plugin_paths.get(plugin).map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct IndexOutcome {
    pub index: RegistryIndex,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds both indexes from a single pass over `source`.
///
/// Duplicate element or plugin names resolve to whichever entry the registry
/// enumerated last.
pub fn build_indexes<S: PluginSource + ?Sized>(source: &S) -> IndexOutcome {
    let mut outcome = IndexOutcome::default();

    for entry in source.plugins() {
        let Some(record) = entry else {
            debug!("skipping empty registry entry");
            outcome.diagnostics.push(Diagnostic::NullPlugin);
            continue;
        };
        index_plugin(source, record, &mut outcome);
    }

    info!(
        plugins = outcome.index.plugin_paths.len(),
        elements = outcome.index.elements.len(),
        "registry indexed"
    );
    outcome
}

fn index_plugin<S: PluginSource + ?Sized>(
    source: &S,
    record: PluginRecord,
    outcome: &mut IndexOutcome,
) {
    let static_elements = record.is_static_elements();
    let (name, path) = match (record.name, record.filename) {
        (Some(name), Some(path)) => (name, path),
        // Statically linked elements never have a file; nothing to report.
        _ if static_elements => return,
        (name, _) => {
            debug!(plugin = ?name, "skipping plugin without name or file");
            outcome
                .diagnostics
                .push(Diagnostic::MissingPluginInfo { name });
            return;
        }
    };

    outcome.index.plugin_paths.insert(name.clone(), path);
    outcome.diagnostics.push(Diagnostic::ListingPlugin {
        plugin: name.clone(),
    });

    let features = source.features(&name);
    let mut count = 0usize;
    for element in features.iter().filter_map(|f| f.element_name()) {
        outcome
            .index
            .elements
            .insert(element.to_owned(), name.clone());
        outcome.diagnostics.push(Diagnostic::ListedElement {
            element: element.to_owned(),
        });
        count += 1;
    }
    drop(features);

    debug!(plugin = %name, elements = count, "indexed plugin");
}
