//! Demo application showing how `moose_config` resolves and merges layers.

pub mod cli;
pub mod error;
pub mod report;
