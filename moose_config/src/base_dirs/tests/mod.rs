//! Directory resolution tests grouped by concern.

use camino::Utf8PathBuf;
use rstest::fixture;

use super::{BaseOverrides, DirectoryResolver, DirectorySet, EnvSnapshot, Platform};

mod file_tests;

/// Snapshot of a typical Unix login with no XDG variables set.
#[fixture]
pub(super) fn unix_env() -> EnvSnapshot {
    EnvSnapshot::empty()
        .with_var("HOME", "/home/moose")
        .with_cwd("/work")
}

pub(super) fn resolve_unix(app: &str, env: &EnvSnapshot) -> DirectorySet {
    DirectoryResolver::new(app, BaseOverrides::default())
        .platform(Platform::Unix)
        .resolve(env)
}

pub(super) fn paths(values: &[&str]) -> Vec<Utf8PathBuf> {
    values.iter().copied().map(Utf8PathBuf::from).collect()
}
