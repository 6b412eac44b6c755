//! Test helpers shared across crates in the workspace.
//!
//! [`with_jail`] runs a closure inside a [`figment::Jail`] sandbox, and
//! [`ConfigTree`] lays out system, home and working directories under a
//! temporary root so layer files can be placed without touching the real
//! filesystem.

mod jail;
mod tree;

pub use jail::{figment_error, with_jail};
pub use tree::ConfigTree;
