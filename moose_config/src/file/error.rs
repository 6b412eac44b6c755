//! Error constructors shared by layer readers and writers.

use camino::Utf8Path;

use crate::MooseError;

use std::error::Error;
use std::sync::Arc;

type BoxedSource = Box<dyn Error + Send + Sync>;

/// Construct a [`MooseError::File`] for a configuration path.
pub(super) fn file_error(path: &Utf8Path, err: impl Into<BoxedSource>) -> Arc<MooseError> {
    Arc::new(MooseError::File {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

pub(super) fn parse_error(path: &Utf8Path, err: impl Into<BoxedSource>) -> Arc<MooseError> {
    Arc::new(MooseError::Parse {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

pub(super) fn write_error(path: &Utf8Path, err: impl Into<BoxedSource>) -> Arc<MooseError> {
    Arc::new(MooseError::Write {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

pub(super) fn not_a_mapping(path: &Utf8Path, found: &'static str) -> Arc<MooseError> {
    Arc::new(MooseError::NotAMapping {
        path: path.to_path_buf(),
        found,
    })
}
