//! Error types for token loading.

use std::path::PathBuf;

/// Error raised while building a token tree from external input.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// The token document could not be read.
    #[error("Failed to read token file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token document is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The document root (or a group) is not a JSON object.
    #[error("Token document root must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// A leaf holds a value that has no textual form.
    #[error("Token '{path}' has unsupported value: {reason}")]
    InvalidToken { path: String, reason: &'static str },
}

/// Result type for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;
