use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::discovery::DiscoveryError;

/// Error types for the ofono accounts provider.
///
/// Covers everything that can stop the provider from starting: reading
/// and parsing the optional configuration file, and a broken
/// discovery configuration. Collaborator failures during discovery never
/// show up here, they degrade to empty results instead.
#[derive(Error, Debug)]
pub enum OfonoError {
    /// Configuration field missing or invalid
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Account synthesis rejected the configured prefixes
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// A specialized `Result` type for provider operations.
pub type Result<T> = std::result::Result<T, OfonoError>;

impl OfonoError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        OfonoError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        OfonoError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
