//! Config, data and cache file helpers.

use anyhow::{Result, ensure};
use rstest::rstest;

use super::{EnvSnapshot, resolve_unix, unix_env};
use crate::Level;

#[rstest]
#[case(Level::System, "yml", false, "/etc/moapp/moapp.yml")]
#[case(Level::User, "cfg", false, "/home/moose/.config/moapp/moapp.cfg")]
#[case(Level::Local, "yml", false, "/work/moapp.yml")]
#[case(Level::Local, "yml", true, "/work/.moapp.yml")]
#[case(Level::User, "yml", true, "/home/moose/.config/moapp/moapp.yml")]
fn config_file_paths(
    unix_env: EnvSnapshot,
    #[case] level: Level,
    #[case] extension: &str,
    #[case] hidden: bool,
    #[case] expected: &str,
) -> Result<()> {
    let dirs = resolve_unix("moapp", &unix_env);
    let path = dirs.config_file(level, extension, hidden);
    ensure!(path == expected, "expected {expected}, got {path}");
    Ok(())
}

#[rstest]
#[case(Level::System, "/var/run/moapp/moapp.db", "/tmp/moapp/moapp.cache")]
#[case(
    Level::User,
    "/home/moose/.local/share/moapp/moapp.db",
    "/home/moose/.cache/moapp/moapp.cache"
)]
#[case(Level::Local, "/work/data/moapp.db", "/work/.cache/moapp.cache")]
fn data_and_cache_files(
    unix_env: EnvSnapshot,
    #[case] level: Level,
    #[case] data: &str,
    #[case] cache: &str,
) -> Result<()> {
    let dirs = resolve_unix("moapp", &unix_env);
    ensure!(dirs.data_file(level) == data, "data_file {}", dirs.data_file(level));
    ensure!(dirs.cache_file(level) == cache, "cache_file {}", dirs.cache_file(level));
    Ok(())
}

#[rstest]
fn find_config_file_returns_first_existing() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let root = camino::Utf8Path::from_path(temp.path())
        .ok_or_else(|| anyhow::anyhow!("temp dir is not UTF-8"))?;
    let user = root.join("user");
    let system = root.join("system");
    std::fs::create_dir_all(system.join("moapp"))?;
    std::fs::write(system.join("moapp").join("extra.yml"), "a: 1\n")?;

    let env = EnvSnapshot::empty()
        .with_var("XDG_CONFIG_HOME", user.as_str())
        .with_var("XDG_CONFIG_DIRS", system.as_str())
        .with_cwd(root.as_str());
    let dirs = resolve_unix("moapp", &env);
    let found = dirs.find_config_file("extra.yml");
    ensure!(
        found.as_deref() == Some(system.join("moapp").join("extra.yml").as_path()),
        "unexpected lookup result {found:?}"
    );

    std::fs::create_dir_all(user.join("moapp"))?;
    std::fs::write(user.join("moapp").join("extra.yml"), "a: 2\n")?;
    let found_user = dirs.find_config_file("extra.yml");
    ensure!(
        found_user.as_deref() == Some(user.join("moapp").join("extra.yml").as_path()),
        "user directory should win, got {found_user:?}"
    );
    ensure!(dirs.find_config_file("absent.yml").is_none(), "absent file found");
    Ok(())
}
