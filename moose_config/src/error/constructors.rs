//! Convenience constructors for `MooseError`.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::MooseError;

impl MooseError {
    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use moose_config::MooseError;
    /// let e = MooseError::gathering(figment::Error::from("boom"));
    /// assert!(matches!(e, MooseError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct a validation error for the builder input `key`.
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Like [`MooseError::validation`] but already wrapped in an [`Arc`].
    #[must_use]
    pub fn validation_arc(key: impl Into<String>, message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::validation(key, message))
    }
}
