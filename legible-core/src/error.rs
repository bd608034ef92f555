//! Error types for readability analysis

use thiserror::Error;

/// Error type for analysis operations
#[derive(Debug, Error)]
pub enum Error {
    /// Text too short for the requested sampling procedure
    #[error(
        "insufficient input: Fry sampling needs at least {required} words, found {found}"
    )]
    InsufficientInput {
        /// Minimum number of words required
        required: usize,
        /// Number of words actually found
        found: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Band table does not partition the real line
    #[error("Invalid band table: {0}")]
    InvalidBandTable(String),

    /// Unknown score scale name
    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    /// Malformed segmenter rule file
    #[error("Rule file parse error: {0}")]
    RuleParse(#[from] toml::de::Error),

    /// I/O error while loading word lists or rule files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_input_names_minimum() {
        let error = Error::InsufficientInput {
            required: 300,
            found: 120,
        };
        let message = error.to_string();
        assert!(message.contains("at least 300 words"));
        assert!(message.contains("found 120"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("window_size must be greater than 0".into());
        assert_eq!(
            error.to_string(),
            "Configuration error: window_size must be greater than 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().starts_with("I/O error:"));
    }
}
