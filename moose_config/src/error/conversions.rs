//! Trait-based conversions between external error types and `MooseError`.

use figment::Error as FigmentError;

use super::MooseError;

impl From<FigmentError> for MooseError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(e.into())
    }
}

impl From<MooseError> for FigmentError {
    /// Allow using `?` in code that returns `figment::Error`, such as
    /// closures passed to `figment::Jail`.
    fn from(e: MooseError) -> Self {
        match e {
            // Preserve the original Figment error (keeps kind, metadata, and sources).
            MooseError::Gathering(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
