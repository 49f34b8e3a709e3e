//! Resolving command-line names into plugin file paths.

use crate::diagnostic::Diagnostic;
use crate::registry::RegistryIndex;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Names are element names.
    #[default]
    ByElement,
    /// Names are plugin names.
    ByPlugin,
}

/// Unique plugin paths, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    paths: BTreeSet<String>,
}

impl QueryResult {
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// The output line: paths separated by spaces, newline-terminated.
    /// `None` when there is nothing to print.
    pub fn to_line(&self) -> Option<String> {
        if self.paths.is_empty() {
            return None;
        }
        let mut line = self.iter().collect::<Vec<_>>().join(" ");
        line.push('\n');
        Some(line)
    }
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub paths: QueryResult,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves every query against `index`. Each path appears in the result once,
/// however many queries lead to it.
pub fn resolve<Q: AsRef<str>>(
    queries: &[Q],
    mode: LookupMode,
    index: &RegistryIndex,
) -> Resolution {
    let mut resolution = Resolution::default();

    for query in queries.iter().map(AsRef::as_ref) {
        let (path, diagnostic) = match mode {
            LookupMode::ByElement => lookup_element(query, index),
            LookupMode::ByPlugin => lookup_plugin(query, index),
        };
        if let Some(path) = path {
            resolution.paths.insert(path);
        }
        resolution.diagnostics.push(diagnostic);
    }

    resolution
}

fn lookup_element<'i>(element: &str, index: &'i RegistryIndex) -> (Option<&'i str>, Diagnostic) {
    match index.element_path(element) {
        Some((plugin, path)) => (
            Some(path),
            Diagnostic::ElementFound {
                element: element.to_owned(),
                plugin: plugin.to_owned(),
                path: path.to_owned(),
            },
        ),
        None => (
            None,
            Diagnostic::ElementNotFound {
                element: element.to_owned(),
            },
        ),
    }
}

fn lookup_plugin<'i>(plugin: &str, index: &'i RegistryIndex) -> (Option<&'i str>, Diagnostic) {
    match index.plugin_path(plugin) {
        Some(path) => (
            Some(path),
            Diagnostic::PluginFound {
                plugin: plugin.to_owned(),
                path: path.to_owned(),
            },
        ),
        None => (
            None,
            Diagnostic::PluginNotFound {
                plugin: plugin.to_owned(),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginRecord;
    use crate::registry::build_indexes;
    use crate::source::MemorySource;
    use pretty_assertions::assert_eq;

    fn index() -> RegistryIndex {
        let source: MemorySource = [
            PluginRecord::new("videoconvert", "/lib/gst/libvideoconvert.so")
                .with_element("videoconvert"),
            PluginRecord::new("coreelements", "/lib/gst/libgstcoreelements.so")
                .with_element("fakesink")
                .with_element("queue")
                .with_element("tee"),
            PluginRecord::new("audiotestsrc", "/lib/gst/libgstaudiotestsrc.so")
                .with_element("audiotestsrc"),
        ]
        .into_iter()
        .collect();
        build_indexes(&source).index
    }

    fn paths(resolution: &Resolution) -> Vec<&str> {
        resolution.paths.iter().collect()
    }

    #[test]
    fn element_resolves_to_owning_plugin_path() {
        let resolution = resolve(&["videoconvert"], LookupMode::ByElement, &index());
        assert_eq!(paths(&resolution), vec!["/lib/gst/libvideoconvert.so"]);
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::ElementFound {
                element: "videoconvert".into(),
                plugin: "videoconvert".into(),
                path: "/lib/gst/libvideoconvert.so".into(),
            }]
        );
    }

    #[test]
    fn plugin_mode_matches_plugin_names() {
        let index = index();
        let resolution = resolve(&["videoconvert"], LookupMode::ByPlugin, &index);
        assert_eq!(paths(&resolution), vec!["/lib/gst/libvideoconvert.so"]);

        // element names are not plugin names
        let resolution = resolve(&["queue"], LookupMode::ByPlugin, &index);
        assert!(resolution.paths.is_empty());
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::PluginNotFound {
                plugin: "queue".into()
            }]
        );
    }

    #[test]
    fn elements_of_one_plugin_collapse_to_one_path() {
        let resolution = resolve(&["fakesink", "queue", "tee"], LookupMode::ByElement, &index());
        assert_eq!(resolution.paths.len(), 1);
        assert_eq!(resolution.diagnostics.len(), 3);
    }

    #[test]
    fn output_is_sorted_and_order_independent() {
        let index = index();
        let forward = resolve(
            &["videoconvert", "audiotestsrc", "queue"],
            LookupMode::ByElement,
            &index,
        );
        let backward = resolve(
            &["queue", "audiotestsrc", "videoconvert"],
            LookupMode::ByElement,
            &index,
        );

        assert_eq!(forward.paths, backward.paths);
        assert_eq!(
            forward.paths.to_line().as_deref(),
            Some(concat!(
                "/lib/gst/libgstaudiotestsrc.so ",
                "/lib/gst/libgstcoreelements.so ",
                "/lib/gst/libvideoconvert.so\n",
            ))
        );
    }

    #[test]
    fn resolving_twice_gives_the_same_result() {
        let index = index();
        let queries = ["tee", "missing", "videoconvert"];
        let first = resolve(&queries, LookupMode::ByElement, &index);
        let second = resolve(&queries, LookupMode::ByElement, &index);
        assert_eq!(first.paths, second.paths);
        assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn unknown_names_print_nothing() {
        let resolution = resolve(&["nonexistentelem"], LookupMode::ByElement, &index());
        assert!(resolution.paths.is_empty());
        assert_eq!(resolution.paths.to_line(), None);
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::ElementNotFound {
                element: "nonexistentelem".into()
            }]
        );
    }

    #[test]
    fn element_of_unindexed_plugin_is_not_found() {
        let mut index = RegistryIndex::default();
        index.elements.insert("orphan".into(), "ghost".into());

        let resolution = resolve(&["orphan"], LookupMode::ByElement, &index);
        assert!(resolution.paths.is_empty());
    }

    #[test]
    fn no_queries_no_output() {
        let resolution = resolve::<&str>(&[], LookupMode::ByElement, &index());
        assert!(resolution.paths.is_empty());
        assert!(resolution.diagnostics.is_empty());
    }
}
