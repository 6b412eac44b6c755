//! Fatal load errors and input validation.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::{APP, Sandbox, sandbox};
use crate::{Configurator, Mapping, MooseError};

fn expect_error(result: crate::MooseResult<Configurator>) -> Result<std::sync::Arc<MooseError>> {
    match result {
        Ok(cfg) => Err(anyhow!("expected failure, loaded {:?}", cfg.obj())),
        Err(err) => Ok(err),
    }
}

#[rstest]
fn malformed_user_file_is_fatal(sandbox: Sandbox) -> Result<()> {
    sandbox.system("a: 1\n")?;
    sandbox.user("key: [unclosed\n")?;
    let err = expect_error(sandbox.builder().load())?;
    match err.as_ref() {
        MooseError::Parse { path, .. } => ensure!(
            path.ends_with(".config/moapp/moapp.yml"),
            "unexpected path {path}"
        ),
        other => return Err(anyhow!("expected Parse, got {other:?}")),
    }
    Ok(())
}

#[rstest]
fn sequence_document_is_not_a_mapping(sandbox: Sandbox) -> Result<()> {
    sandbox.local("moapp.yml", "- a\n- b\n")?;
    let err = expect_error(sandbox.builder().load())?;
    ensure!(
        matches!(err.as_ref(), MooseError::NotAMapping { found: "a sequence", .. }),
        "expected NotAMapping, got {err:?}"
    );
    Ok(())
}

#[cfg(unix)]
#[rstest]
fn unreadable_system_file_is_fatal(sandbox: Sandbox) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = sandbox.tree.write_system(APP, "moapp.yml", "a: 1\n")?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000))?;
    // Privileged users can read regardless of mode bits.
    if std::fs::read_to_string(&path).is_ok() {
        return Ok(());
    }
    let result = sandbox.builder().load();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))?;
    let err = expect_error(result)?;
    ensure!(
        matches!(err.as_ref(), MooseError::File { .. }),
        "expected File error, got {err:?}"
    );
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("moapp/evil")]
#[case("moapp\\evil")]
#[case("..")]
fn invalid_app_names_are_rejected(sandbox: Sandbox, #[case] name: &str) -> Result<()> {
    let err = expect_error(
        Configurator::builder(name)
            .defaults(Mapping::new())
            .env(crate::EnvSnapshot::empty().with_cwd(sandbox.tree.work()))
            .load(),
    )?;
    ensure!(
        matches!(err.as_ref(), MooseError::Validation { key, .. } if key == "app_name"),
        "expected app_name validation error, got {err:?}"
    );
    Ok(())
}

#[rstest]
#[case("")]
#[case(".")]
#[case("y/ml")]
fn invalid_extensions_are_rejected(sandbox: Sandbox, #[case] extension: &str) -> Result<()> {
    let err = expect_error(sandbox.builder().extension(extension).load())?;
    ensure!(
        matches!(err.as_ref(), MooseError::Validation { key, .. } if key == "extension"),
        "expected extension validation error, got {err:?}"
    );
    Ok(())
}
