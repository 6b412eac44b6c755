//! Persisting a layer mapping as YAML.

use camino::Utf8Path;
use tracing::info;

use super::error::write_error;
use super::helpers::{open_parent_dir_and_name, parent_or_dot};
use super::yaml::to_yaml;
use crate::{Mapping, MooseResult};

/// Write `mapping` to `path` as YAML, creating missing parent directories.
///
/// An existing file is replaced.
///
/// # Errors
///
/// Returns [`MooseError::Write`] when the directory cannot be created, the
/// mapping cannot be serialised or the file cannot be written.
///
/// [`MooseError::Write`]: crate::MooseError::Write
pub fn write_mapping(path: &Utf8Path, mapping: &Mapping) -> MooseResult<()> {
    let parent = parent_or_dot(path);
    std::fs::create_dir_all(parent).map_err(|err| write_error(path, err))?;
    let yaml = to_yaml(mapping).map_err(|err| write_error(path, err))?;
    let (dir, name) = open_parent_dir_and_name(path).map_err(|err| write_error(path, err))?;
    dir.write(&name, yaml).map_err(|err| write_error(path, err))?;
    info!(path = %path, keys = mapping.len(), "layer file written");
    Ok(())
}
