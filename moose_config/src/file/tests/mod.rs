//! Shared helpers for file module tests along with focused submodules.

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

mod read_tests;

pub(super) fn to_anyhow<T>(result: crate::MooseResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

pub(super) fn utf8_temp_dir() -> Result<(tempfile::TempDir, Utf8PathBuf)> {
    let temp = tempfile::tempdir()?;
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .map_err(|path| anyhow!("temp dir {} is not UTF-8", path.display()))?;
    Ok((temp, root))
}
