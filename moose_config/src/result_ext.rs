//! Extension for mapping errors to `MooseResult` concisely.
//!
//! Reduces repetitive `.map_err(|e| Arc::new(MooseError::from(e)))` when
//! converting Figment failures into the crate's `MooseResult<T>` alias
//! (`Result<T, Arc<MooseError>>`).
//!
//! # Examples
//!
//! ```
//! use moose_config::{MooseResult, MooseResultExt};
//! use figment::{Figment, providers::Serialized};
//!
//! fn port() -> MooseResult<u16> {
//!     Figment::from(Serialized::default("port", 8080))
//!         .extract_inner("port")
//!         .into_moose()
//! }
//! assert_eq!(port().ok(), Some(8080));
//! ```

use std::sync::Arc;

use crate::{MooseError, MooseResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<MooseError>` into a `MooseResult<T>`.
pub trait MooseResultExt<T> {
    /// Convert `Result<T, E>` into `MooseResult<T>` using `Into<MooseError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MooseError>`.
    fn into_moose(self) -> MooseResult<T>;
}

impl<T, E> MooseResultExt<T> for Result<T, E>
where
    E: Into<MooseError>,
{
    fn into_moose(self) -> MooseResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
