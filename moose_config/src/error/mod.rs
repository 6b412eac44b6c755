//! Error types produced by the configuration loader.

mod constructors;
mod conversions;
mod types;

pub use types::MooseError;
