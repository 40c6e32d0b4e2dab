//! Error types for configuration and file handling.
//!
//! The rewrite itself never fails; only building an inclusion policy from caller
//! options and reading files can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by three-precompress
#[derive(Debug, Error)]
pub enum Error {
    /// Overrides named keys that the fixed catalog does not know
    #[error("Unknown {catalog} name(s): {}", names.join(", "))]
    UnknownNames {
        /// Which catalog rejected the overrides
        catalog: &'static str,
        /// The rejected keys, in the order they were supplied
        names: Vec<String>,
    },

    /// A source or configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A JSON configuration did not have the expected shape
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML configuration did not have the expected shape
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The configuration file extension is neither JSON nor YAML
    #[error("Unsupported configuration format: {}", path.display())]
    UnsupportedConfigFormat {
        /// Path of the configuration file
        path: PathBuf,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
