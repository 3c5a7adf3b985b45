//! Error types for token consistency checks.

use std::path::PathBuf;
use swatch_carton::CompactString;
use swatch_palette::PaletteError;

/// A token consistency violation or an operational failure.
///
/// Every check stops at the first violation and returns it.
#[derive(Debug, thiserror::Error)]
pub enum TokenCheckError {
    /// The single-file check target does not exist.
    #[error("SCSS file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// The root check resolved no stylesheet.
    #[error("No stylesheet found (looked for: {searched})")]
    NoStylesheetFound { searched: String },

    /// A stylesheet references a custom property the tokens do not define.
    #[error("File {} uses unknown CSS variable --{name} (not in design tokens)", .file.display())]
    UnknownVariable { file: PathBuf, name: CompactString },

    /// A declared value is neither a token reference, a token value nor a
    /// safe literal.
    #[error("File {} uses hardcoded value \"{value}\" for \"{property}\" not found in design tokens", .file.display())]
    UnlistedLiteral {
        file: PathBuf,
        property: CompactString,
        value: String,
    },

    /// A token has no matching declaration in the `:root` block(s).
    #[error("Missing CSS variable --{name} in :root of {files}")]
    MissingRootVariable { name: CompactString, files: String },

    /// A `:root` declaration differs from the token value.
    #[error("CSS variable --{name} mismatch in {files}: expected \"{expected}\", got \"{actual}\"")]
    ValueMismatch {
        name: CompactString,
        expected: String,
        actual: String,
        files: String,
    },

    /// Strict mode: the `:root` block(s) declare a variable that is not a token.
    #[error("Unexpected CSS variable --{name} in :root of {files} (not in design tokens)")]
    UnexpectedRootVariable { name: CompactString, files: String },

    /// A stylesheet or directory could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk error.
    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// The token definition could not be loaded.
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

impl TokenCheckError {
    /// Stable identifier for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFile { .. } => "missing-file",
            Self::NoStylesheetFound { .. } => "no-stylesheet-found",
            Self::UnknownVariable { .. } => "unknown-variable",
            Self::UnlistedLiteral { .. } => "unlisted-literal",
            Self::MissingRootVariable { .. } => "missing-root-variable",
            Self::ValueMismatch { .. } => "value-mismatch",
            Self::UnexpectedRootVariable { .. } => "unexpected-root-variable",
            Self::Io { .. } => "io",
            Self::Walk(_) => "walk",
            Self::Palette(_) => "palette",
        }
    }

    /// Whether this error is a token violation (as opposed to an
    /// operational failure such as an unreadable file).
    pub fn is_violation(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Walk(_) | Self::Palette(_))
    }

    /// The single file the error is about, when there is one.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            Self::MissingFile { path } | Self::Io { path, .. } => Some(path),
            Self::UnknownVariable { file, .. } | Self::UnlistedLiteral { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// Result type for token checks.
pub type CheckResult<T> = Result<T, TokenCheckError>;
