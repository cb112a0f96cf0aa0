use std::{io, path::PathBuf};

/// Errors that can occur while querying system properties
#[derive(thiserror::Error, Debug)]
pub enum PropertyError {
    /// The property tool could not be started
    #[error("Failed to run {path}: {source}")]
    SpawnFailed {
        /// Tool that failed to start
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The property tool ran but reported failure
    #[error("Query for property {name} exited with {status}")]
    QueryFailed {
        /// Property that was requested
        name: String,
        /// Exit status reported by the tool
        status: String,
    },

    /// The property tool produced output that is not UTF-8
    #[error("Property {name} returned invalid output: {reason}")]
    InvalidOutput {
        /// Property that was requested
        name: String,
        /// Reason the output was rejected
        reason: String,
    },
}
