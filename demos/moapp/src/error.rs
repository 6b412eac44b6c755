//! Error types for the `moapp` demo.

use std::sync::Arc;

use thiserror::Error;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum MoappError {
    /// Loading or parsing configuration failed.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<moose_config::MooseError>),
    /// A mapping could not be rendered as YAML.
    #[error("failed to render configuration: {0}")]
    Render(String),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the demo.
pub type Result<T> = std::result::Result<T, MoappError>;
