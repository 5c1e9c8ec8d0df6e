//! Error types for scale construction and theme loading.

use std::path::PathBuf;

use keyramp_color::ParseError;
use thiserror::Error;

/// Errors raised while building a color scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// A scale needs at least one key color.
    #[error("a color scale needs at least one key color")]
    NoKeys,
}

/// Errors raised while loading or validating a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or shape error.
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error.
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A color or color-space field could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A theme color listed no key colors.
    #[error("theme color \"{0}\" has no key colors")]
    EmptyColor(String),

    /// The theme defines no colors at all.
    #[error("theme defines no colors")]
    Empty,

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported theme file extension: {0}")]
    UnsupportedFormat(String),

    /// `refresh` was called on a theme that was not loaded from a file.
    #[error("theme has no source file to reload")]
    NoSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_convert() {
        let err: ThemeError = ParseError::UnknownName("nope".into()).into();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn io_error_names_the_path() {
        let err = ThemeError::Io {
            path: PathBuf::from("themes/missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("themes/missing.yaml"));
    }
}
