//! Layered YAML configuration for applications that read system, user and
//! local settings.
//!
//! The crate has two independent halves that callers compose:
//!
//! - [`DirectoryResolver`] turns an application name, a set of
//!   [`BaseOverrides`] and an [`EnvSnapshot`] into a [`DirectorySet`] of
//!   config, data and cache paths following the XDG Base Directory
//!   convention (with Windows fallbacks).
//! - [`Configurator`] reads `<app>.yml` from the system, user and local
//!   levels, overlays them on caller-supplied defaults and exposes the
//!   merged mapping.
//!
//! ```rust,no_run
//! use moose_config::{Configurator, LoadOptions, Mapping};
//! use serde_json::json;
//!
//! # fn run() -> moose_config::MooseResult<()> {
//! let mut defaults = Mapping::new();
//! defaults.insert("server".into(), json!("test.example.com"));
//!
//! let cfg = Configurator::new("moapp", defaults, LoadOptions::default())?;
//! println!("server = {}", cfg.obj()["server"]);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

mod base_dirs;
mod configurator;
mod error;
pub mod file;
mod level;
pub mod merge;
mod result_ext;

pub use base_dirs::{
    BaseOverrides, CAPTURED_VARS, DirectoryResolver, DirectorySet, EnvSnapshot, Platform,
};
pub use configurator::{Configurator, ConfiguratorBuilder, LayerLocations, LoadOptions, load};
pub use error::MooseError;
pub use level::Level;
pub use merge::{Layer, LayerState, MergePolicy, MergeStrategy, MergedConfig, Origin};
pub use result_ext::MooseResultExt;

pub use camino;
pub use figment;
pub use serde_json;

/// Key-value mapping produced by a configuration layer.
///
/// Keys are strings; values are any YAML-representable data carried as
/// [`serde_json::Value`].
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// Result type used throughout the crate.
///
/// Errors are shared so a single failure can be reported by several callers
/// without cloning the underlying source.
pub type MooseResult<T> = Result<T, Arc<MooseError>>;

/// Normalise an environment prefix by trimming trailing underscores and
/// converting to upper-case ASCII, then appending a single `_`.
///
/// ```rust
/// assert_eq!(moose_config::env_prefix("moose__"), "MOOSE_");
/// ```
#[must_use]
pub fn env_prefix(prefix: &str) -> String {
    let mut normalised = prefix.trim_end_matches('_').to_ascii_uppercase();
    normalised.push('_');
    normalised
}
