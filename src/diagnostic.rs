/// Status messages produced while indexing and resolving. They are shown to
/// the user only in verbose mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The registry handed out an empty entry.
    NullPlugin,
    /// A plugin without a name or without a file on disk.
    MissingPluginInfo { name: Option<String> },
    ListingPlugin { plugin: String },
    ListedElement { element: String },
    ElementNotFound { element: String },
    ElementFound {
        element: String,
        plugin: String,
        path: String,
    },
    PluginNotFound { plugin: String },
    PluginFound { plugin: String, path: String },
}
