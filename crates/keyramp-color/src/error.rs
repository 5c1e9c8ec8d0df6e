//! Error types for color parsing and conversion.

use thiserror::Error;

/// Errors raised while parsing color text or color-space tags.
///
/// Every variant carries the offending input so callers can surface it
/// verbatim; nothing is ever guessed on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The color text was empty (or only whitespace).
    #[error("cannot convert color value of \"{0}\"")]
    Empty(String),

    /// The requested color space tag is not recognized.
    #[error("cannot convert to colorspace \"{0}\"")]
    UnknownSpace(String),

    /// A function-style color (`lab(...)`, `hsl(...)`) could not be read.
    #[error("malformed color \"{value}\": {reason}")]
    Malformed { value: String, reason: String },

    /// A hex color had the wrong length or non-hex digits.
    #[error("invalid hex color \"{0}\" (must be 3 or 6 digits)")]
    InvalidHex(String),

    /// Not a hex code, a known function, nor a CSS color name.
    #[error("unknown color name \"{0}\"")]
    UnknownName(String),
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_value() {
        let err = ParseError::UnknownSpace("XYZ".to_string());
        assert!(err.to_string().contains("XYZ"));

        let err = ParseError::Malformed {
            value: "lab(1, 2)".to_string(),
            reason: "expected 3 components, got 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lab(1, 2)"));
        assert!(msg.contains("expected 3 components"));
    }
}
