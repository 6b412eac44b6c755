//! Reading layer files from disk.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::json;

use super::{to_anyhow, utf8_temp_dir};
use crate::MooseError;
use crate::file::read_mapping;

#[rstest]
fn missing_file_is_absent() -> Result<()> {
    let (_temp, root) = utf8_temp_dir()?;
    let read = to_anyhow(read_mapping(&root.join("moapp.yml")))?;
    ensure!(read.is_none(), "expected no mapping, got {read:?}");
    Ok(())
}

#[rstest]
fn missing_parent_directory_is_absent() -> Result<()> {
    let (_temp, root) = utf8_temp_dir()?;
    let read = to_anyhow(read_mapping(&root.join("nope").join("moapp.yml")))?;
    ensure!(read.is_none(), "expected no mapping, got {read:?}");
    Ok(())
}

#[rstest]
fn directory_at_layer_path_is_absent() -> Result<()> {
    let (_temp, root) = utf8_temp_dir()?;
    let path = root.join("moapp.yml");
    std::fs::create_dir(&path)?;
    let read = to_anyhow(read_mapping(&path))?;
    ensure!(read.is_none(), "expected directory to be skipped");
    Ok(())
}

#[rstest]
fn existing_file_is_parsed() -> Result<()> {
    let (_temp, root) = utf8_temp_dir()?;
    let path = root.join("moapp.yml");
    std::fs::write(&path, "server: example.com\nport: 8080\n")?;
    let mapping = to_anyhow(read_mapping(&path))?.ok_or_else(|| anyhow!("expected mapping"))?;
    ensure!(mapping["server"] == json!("example.com"), "unexpected server");
    ensure!(mapping["port"] == json!(8080), "unexpected port");
    Ok(())
}

#[rstest]
fn empty_file_is_present_but_empty() -> Result<()> {
    let (_temp, root) = utf8_temp_dir()?;
    let path = root.join("moapp.yml");
    std::fs::write(&path, "")?;
    let mapping = to_anyhow(read_mapping(&path))?.ok_or_else(|| anyhow!("expected mapping"))?;
    ensure!(mapping.is_empty(), "expected empty mapping");
    Ok(())
}

#[rstest]
fn malformed_file_reports_path() -> Result<()> {
    let (_temp, root) = utf8_temp_dir()?;
    let path = root.join("moapp.yml");
    std::fs::write(&path, "key: [unclosed\n")?;
    let Err(err) = read_mapping(&path) else {
        return Err(anyhow!("expected parse failure"));
    };
    match err.as_ref() {
        MooseError::Parse { path: p, .. } => ensure!(*p == path, "unexpected path {p}"),
        other => return Err(anyhow!("expected Parse, got {other:?}")),
    }
    Ok(())
}

#[cfg(unix)]
#[rstest]
fn unreadable_file_is_a_file_error() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let (_temp, root) = utf8_temp_dir()?;
    let path = root.join("moapp.yml");
    std::fs::write(&path, "a: 1\n")?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000))?;
    // Privileged users can read regardless of mode bits.
    if std::fs::read_to_string(&path).is_ok() {
        return Ok(());
    }
    let result = read_mapping(&path);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))?;
    let Err(err) = result else {
        return Err(anyhow!("expected permission failure"));
    };
    ensure!(
        matches!(err.as_ref(), MooseError::File { .. }),
        "expected File error, got {err:?}"
    );
    Ok(())
}
