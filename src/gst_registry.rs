//! Live GStreamer registry.

use crate::error::{Error, Result};
use crate::plugin::{Feature, PluginRecord};
use crate::source::{FeatureList, PluginSource};
use gstreamer as gst;
use gstreamer::prelude::*;

pub struct GstRegistrySource {
    registry: gst::Registry,
}

impl GstRegistrySource {
    /// Initializes GStreamer and takes the process-wide registry.
    pub fn init() -> Result<Self> {
        gst::init().map_err(|e| Error::Init(e.to_string()))?;
        Ok(Self {
            registry: gst::Registry::get(),
        })
    }
}

impl PluginSource for GstRegistrySource {
    fn plugins(&self) -> Vec<Option<PluginRecord>> {
        self.registry
            .plugins()
            .into_iter()
            .map(|plugin| {
                Some(PluginRecord {
                    name: Some(plugin.plugin_name().to_string()),
                    filename: plugin
                        .filename()
                        .map(|path| path.to_string_lossy().into_owned()),
                    features: Vec::new(),
                })
            })
            .collect()
    }

    /// The registry's list is held by the returned handle and unreffed when
    /// the handle drops.
    fn features(&self, plugin: &str) -> FeatureList<'_> {
        let list = self.registry.features_by_plugin(plugin);
        let features = list
            .iter()
            .map(|feature| match feature.downcast_ref::<gst::ElementFactory>() {
                Some(factory) => Feature::ElementFactory {
                    name: factory.name().to_string(),
                },
                None => Feature::Other {
                    name: Some(feature.name().to_string()),
                },
            })
            .collect();
        FeatureList::with_release(features, move || drop(list))
    }
}
