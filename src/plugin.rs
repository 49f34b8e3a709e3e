use serde::{Deserialize, Serialize};

/// Name of the pseudo plugin GStreamer registers for statically linked
/// elements. It never has a file on disk.
pub const STATIC_ELEMENTS: &str = "staticelements";

/// Owned copy of one registry plugin entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    pub name: Option<String>,
    pub filename: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl PluginRecord {
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            filename: Some(filename.into()),
            features: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.features.push(Feature::ElementFactory {
            name: element.into(),
        });
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn is_static_elements(&self) -> bool {
        self.name.as_deref() == Some(STATIC_ELEMENTS)
    }
}

/// A capability a plugin exposes to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feature {
    ElementFactory {
        name: String,
    },
    /// Type finders, device providers, tracers and the like.
    Other {
        #[serde(default)]
        name: Option<String>,
    },
}

impl Feature {
    /// Returns the element name when this feature is an element factory.
    pub fn element_name(&self) -> Option<&str> {
        match self {
            Feature::ElementFactory { name } => Some(name),
            Feature::Other { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_element_factories_have_element_names() {
        let element = Feature::ElementFactory {
            name: "videoconvert".into(),
        };
        let typefind = Feature::Other {
            name: Some("video/x-raw".into()),
        };
        assert_eq!(element.element_name(), Some("videoconvert"));
        assert_eq!(typefind.element_name(), None);
    }

    #[test]
    fn feature_kind_is_tagged_in_json() {
        let feature: Feature =
            serde_json::from_str(r#"{"kind":"element_factory","name":"fakesink"}"#).unwrap();
        assert_eq!(feature.element_name(), Some("fakesink"));

        let other: Feature = serde_json::from_str(r#"{"kind":"other"}"#).unwrap();
        assert_eq!(other, Feature::Other { name: None });
    }

    #[test]
    fn recognizes_static_elements() {
        let record = PluginRecord {
            name: Some(STATIC_ELEMENTS.into()),
            filename: None,
            features: Vec::new(),
        };
        assert!(record.is_static_elements());
        let core = PluginRecord::new("coreelements", "/lib/libgstcoreelements.so");
        assert!(!core.is_static_elements());
    }
}
