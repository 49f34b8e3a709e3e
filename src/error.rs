use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read registry snapshot {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed registry snapshot {path:?}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to initialize the plugin framework: {0}")]
    Init(String),

    #[error(
        "no plugin registry available: set GST_WHICH_SNAPSHOT or build with the `gstreamer` feature"
    )]
    NoSource,
}
