//! Plugin sources: the seam between the indexer and whatever registry backs it.
//!
//! - [`MemorySource`] - fixture records held in memory
//! - [`RegistrySnapshot`] - a JSON dump of a registry, loaded from disk
//! - `GstRegistrySource` - the live GStreamer registry (`gstreamer` feature)

use crate::error::{Error, Result};
use crate::plugin::{Feature, PluginRecord};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fs;
use std::path::Path;

/// Read-only view of a plugin registry.
pub trait PluginSource {
    /// Every registry entry in enumeration order. `None` marks an absent entry.
    fn plugins(&self) -> Vec<Option<PluginRecord>>;

    /// Features registered by the named plugin. The returned list is released
    /// back to the source when dropped.
    fn features(&self, plugin: &str) -> FeatureList<'_>;
}

/// Scoped handle over one plugin's feature list.
pub struct FeatureList<'a> {
    features: Vec<Feature>,
    release: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> FeatureList<'a> {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            release: None,
        }
    }

    /// Runs `release` exactly once, when the list goes out of scope.
    pub fn with_release(features: Vec<Feature>, release: impl FnOnce() + 'a) -> Self {
        Self {
            features,
            release: Some(Box::new(release)),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<'a, 'b> IntoIterator for &'b FeatureList<'a> {
    type Item = &'b Feature;
    type IntoIter = std::slice::Iter<'b, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drop for FeatureList<'_> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for FeatureList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureList")
            .field("features", &self.features)
            .field("pending_release", &self.release.is_some())
            .finish()
    }
}

/// In-memory registry. Keeps count of feature lists handed out and returned so
/// callers can check none leak.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: Vec<Option<PluginRecord>>,
    acquired: Cell<usize>,
    released: Cell<usize>,
}

impl MemorySource {
    pub fn new(records: Vec<Option<PluginRecord>>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Appends an absent registry entry.
    pub fn push_absent(&mut self) {
        self.records.push(None);
    }

    pub fn push(&mut self, record: PluginRecord) {
        self.records.push(Some(record));
    }

    pub fn acquired_lists(&self) -> usize {
        self.acquired.get()
    }

    pub fn released_lists(&self) -> usize {
        self.released.get()
    }
}

impl FromIterator<PluginRecord> for MemorySource {
    fn from_iter<I: IntoIterator<Item = PluginRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Some).collect())
    }
}

impl PluginSource for MemorySource {
    fn plugins(&self) -> Vec<Option<PluginRecord>> {
        self.records.clone()
    }

    fn features(&self, plugin: &str) -> FeatureList<'_> {
        // Lookup is by name, like the registry's, so same-named entries pool
        // their features.
        let features = self
            .records
            .iter()
            .flatten()
            .filter(|record| record.name.as_deref() == Some(plugin))
            .flat_map(|record| record.features.iter().cloned())
            .collect();

        self.acquired.set(self.acquired.get() + 1);
        FeatureList::with_release(features, move || {
            self.released.set(self.released.get() + 1);
        })
    }
}

/// Serializable dump of a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub plugins: Vec<Option<PluginRecord>>,
}

impl RegistrySnapshot {
    /// Copies every plugin of `source`, with its features, into a snapshot.
    pub fn capture<S: PluginSource + ?Sized>(source: &S) -> Self {
        let plugins = source
            .plugins()
            .into_iter()
            .map(|entry| {
                entry.map(|mut record| {
                    if let Some(name) = record.name.as_deref() {
                        record.features = source.features(name).iter().cloned().collect();
                    }
                    record
                })
            })
            .collect();
        Self { plugins }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::Snapshot {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|source| Error::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn into_source(self) -> MemorySource {
        MemorySource::new(self.plugins)
    }
}
