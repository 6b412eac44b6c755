//! Reading a single layer file from disk.

use camino::Utf8Path;
use tracing::{debug, warn};

use super::error::file_error;
use super::helpers::{is_absent, open_parent_dir_and_name};
use super::yaml::parse_mapping;
use crate::{Mapping, MooseResult};

/// Read and parse the layer file at `path`.
///
/// Returns `Ok(None)` when the file (or its parent directory) does not
/// exist. A directory sitting at `path` is also reported as absent, with a
/// warning.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use moose_config::file::read_mapping;
///
/// # fn run() -> moose_config::MooseResult<()> {
/// match read_mapping(Utf8Path::new("/etc/moapp/moapp.yml"))? {
///     Some(mapping) => println!("{} keys", mapping.len()),
///     None => println!("no system layer"),
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`MooseError::File`] when the file exists but cannot be read (for
/// example permission denied), [`MooseError::Parse`] for malformed YAML and
/// [`MooseError::NotAMapping`] when the document is not a mapping.
///
/// [`MooseError::File`]: crate::MooseError::File
/// [`MooseError::Parse`]: crate::MooseError::Parse
/// [`MooseError::NotAMapping`]: crate::MooseError::NotAMapping
pub fn read_mapping(path: &Utf8Path) -> MooseResult<Option<Mapping>> {
    let (dir, name) = match open_parent_dir_and_name(path) {
        Ok(opened) => opened,
        Err(err) if is_absent(&err) => {
            debug!(path = %path, "layer parent directory missing");
            return Ok(None);
        }
        Err(err) => return Err(file_error(path, err)),
    };
    let metadata = match dir.metadata(&name) {
        Ok(metadata) => metadata,
        Err(err) if is_absent(&err) => {
            debug!(path = %path, "layer file missing");
            return Ok(None);
        }
        Err(err) => return Err(file_error(path, err)),
    };
    if metadata.is_dir() {
        warn!(path = %path, "ignoring directory found at layer file path");
        return Ok(None);
    }
    let contents = dir
        .read_to_string(&name)
        .map_err(|err| file_error(path, err))?;
    let mapping = parse_mapping(path, &contents)?;
    debug!(path = %path, keys = mapping.len(), "layer file read");
    Ok(Some(mapping))
}
