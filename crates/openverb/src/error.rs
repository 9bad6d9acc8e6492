use std::path::PathBuf;

/// Unified error type for the openverb crate.
///
/// Handler faults are not represented here: they travel as `anyhow::Error`
/// and are folded into a [`crate::VerbResult`] by the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum OpenVerbError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("duplicate manifest family: {0}")]
    DuplicateFamily(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name}: {message}")]
    Parse { name: String, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("schema violation: {0}")]
    Schema(String),
}

/// Result type alias using [`OpenVerbError`].
pub type Result<T> = std::result::Result<T, OpenVerbError>;
