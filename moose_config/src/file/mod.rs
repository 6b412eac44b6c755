//! Reading and writing YAML configuration layers.
//!
//! Every configuration layer is a single YAML document whose top level is a
//! mapping. Reads go through `cap-std` so a layer path is resolved relative to
//! an explicitly opened parent directory.

mod error;
mod helpers;
mod loader;
mod writer;
mod yaml;

pub use loader::read_mapping;
pub use writer::write_mapping;
pub use yaml::{parse_mapping, to_yaml};

#[cfg(test)]
mod tests;
