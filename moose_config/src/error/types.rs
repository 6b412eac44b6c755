//! Primary error enum for directory resolution and configuration loading.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while loading configuration.
///
/// Missing files and missing environment variables are never errors; they
/// fall back to an absent layer or a documented default path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MooseError {
    /// A configuration file exists but could not be read.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration file contains malformed YAML.
    #[error("Failed to parse YAML in '{path}': {source}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The top-level YAML document is not a key-value mapping.
    #[error("Configuration file '{path}' must contain a mapping, found {found}")]
    NotAMapping {
        /// Path of the offending file.
        path: Utf8PathBuf,
        /// Kind of value found instead, such as `a sequence`.
        found: &'static str,
    },

    /// Saving a layer back to disk failed.
    #[error("Failed to write configuration file '{path}': {source}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying serialisation or I/O error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while extracting typed values or reading prefixed environment
    /// variables through Figment.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Invalid input supplied to a builder.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Name of the rejected input.
        key: String,
        /// Human-readable explanation.
        message: String,
    },
}
