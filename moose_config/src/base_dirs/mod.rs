//! XDG-style directory resolution for system, user and local locations.
//!
//! [`DirectoryResolver`] combines an application name, optional
//! [`BaseOverrides`] and an [`EnvSnapshot`] into an immutable
//! [`DirectorySet`]. Resolution never fails: unset variables fall back to
//! the conventional defaults of the selected [`Platform`].

mod env;
mod overrides;
mod platform;
mod resolver;

pub use env::{CAPTURED_VARS, EnvSnapshot};
pub use overrides::BaseOverrides;
pub use platform::Platform;
pub use resolver::DirectoryResolver;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::Level;

const DATA_EXTENSION: &str = "db";
const CACHE_EXTENSION: &str = "cache";

/// Resolved locations for one application.
///
/// All values are computed once by [`DirectoryResolver::resolve`] and never
/// change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectorySet {
    app_name: String,
    segment: Utf8PathBuf,
    system_config: Utf8PathBuf,
    system_layer: Utf8PathBuf,
    system_data: Utf8PathBuf,
    system_cache: Utf8PathBuf,
    user_home: Utf8PathBuf,
    user_config: Utf8PathBuf,
    user_data: Utf8PathBuf,
    user_cache: Utf8PathBuf,
    local_config: Utf8PathBuf,
    local_data: Utf8PathBuf,
    local_cache: Utf8PathBuf,
    config_dirs: Vec<Utf8PathBuf>,
    data_dirs: Vec<Utf8PathBuf>,
    runtime_dir: Option<Utf8PathBuf>,
}

impl DirectorySet {
    /// Resolve directories for `app_name` from the current process
    /// environment without overrides.
    #[must_use]
    pub fn for_app(app_name: impl Into<String>) -> Self {
        DirectoryResolver::new(app_name, BaseOverrides::default()).resolve_current()
    }

    /// Application name the set was resolved for.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Relative path appended to system and user bases: the application
    /// name followed by any extra segments.
    #[must_use]
    pub fn segment(&self) -> &Utf8Path {
        &self.segment
    }

    /// `{XDG_CONFIG_DIRS[0] or /etc}/{name}`.
    #[must_use]
    pub fn system_config(&self) -> &Utf8Path {
        &self.system_config
    }

    /// `{system_config override or /etc}/{name}`: where the system
    /// configuration file lives.
    ///
    /// Unlike [`Self::system_config`] this ignores `XDG_CONFIG_DIRS`, so
    /// distributions that set it to `/etc/xdg` still read `/etc/{name}`.
    #[must_use]
    pub fn system_layer(&self) -> &Utf8Path {
        &self.system_layer
    }

    /// `{XDG_DATA_DIRS[0] or /var/run}/{name}`.
    #[must_use]
    pub fn system_data(&self) -> &Utf8Path {
        &self.system_data
    }

    /// `/tmp/{name}`.
    #[must_use]
    pub fn system_cache(&self) -> &Utf8Path {
        &self.system_cache
    }

    /// `$HOME`, else the OS-reported home, else an empty path.
    #[must_use]
    pub fn user_home(&self) -> &Utf8Path {
        &self.user_home
    }

    /// `{XDG_CONFIG_HOME or $HOME/.config}/{name}`.
    #[must_use]
    pub fn user_config(&self) -> &Utf8Path {
        &self.user_config
    }

    /// `{XDG_DATA_HOME or $HOME/.local/share}/{name}`.
    #[must_use]
    pub fn user_data(&self) -> &Utf8Path {
        &self.user_data
    }

    /// `{XDG_CACHE_HOME or $HOME/.cache}/{name}`.
    #[must_use]
    pub fn user_cache(&self) -> &Utf8Path {
        &self.user_cache
    }

    /// The working directory.
    #[must_use]
    pub fn local_config(&self) -> &Utf8Path {
        &self.local_config
    }

    /// `{cwd}/data`.
    #[must_use]
    pub fn local_data(&self) -> &Utf8Path {
        &self.local_data
    }

    /// `{cwd}/.cache`.
    #[must_use]
    pub fn local_cache(&self) -> &Utf8Path {
        &self.local_cache
    }

    /// Config search directories, most important first: the user config
    /// base followed by `XDG_CONFIG_DIRS`.
    #[must_use]
    pub fn config_dirs(&self) -> &[Utf8PathBuf] {
        &self.config_dirs
    }

    /// Data search directories, most important first: the user data base
    /// followed by `XDG_DATA_DIRS`.
    #[must_use]
    pub fn data_dirs(&self) -> &[Utf8PathBuf] {
        &self.data_dirs
    }

    /// `XDG_RUNTIME_DIR`, captured for callers but never used for defaults.
    #[must_use]
    pub fn runtime_dir(&self) -> Option<&Utf8Path> {
        self.runtime_dir.as_deref()
    }

    /// Config directory for `level`.
    #[must_use]
    pub fn config_dir(&self, level: Level) -> &Utf8Path {
        match level {
            Level::System => &self.system_config,
            Level::User => &self.user_config,
            Level::Local => &self.local_config,
        }
    }

    /// Data directory for `level`.
    #[must_use]
    pub fn data_dir(&self, level: Level) -> &Utf8Path {
        match level {
            Level::System => &self.system_data,
            Level::User => &self.user_data,
            Level::Local => &self.local_data,
        }
    }

    /// Cache directory for `level`.
    #[must_use]
    pub fn cache_dir(&self, level: Level) -> &Utf8Path {
        match level {
            Level::System => &self.system_cache,
            Level::User => &self.user_cache,
            Level::Local => &self.local_cache,
        }
    }

    /// Config file for `level`: `{dir}/{app}.{extension}`.
    ///
    /// The system file sits in [`Self::system_layer`]; user and local files
    /// sit in [`Self::config_dir`]. `hidden` prefixes the file name with `.`
    /// and only applies to the local level.
    #[must_use]
    pub fn config_file(&self, level: Level, extension: &str, hidden: bool) -> Utf8PathBuf {
        let mut file_name = self.file_name(extension);
        if hidden && level == Level::Local {
            file_name.insert(0, '.');
        }
        let dir = match level {
            Level::System => self.system_layer(),
            Level::User | Level::Local => self.config_dir(level),
        };
        dir.join(file_name)
    }

    /// Data file for `level`: `{dir}/{app}.db`.
    #[must_use]
    pub fn data_file(&self, level: Level) -> Utf8PathBuf {
        self.data_dir(level).join(self.file_name(DATA_EXTENSION))
    }

    /// Cache file for `level`: `{dir}/{app}.cache`.
    #[must_use]
    pub fn cache_file(&self, level: Level) -> Utf8PathBuf {
        self.cache_dir(level).join(self.file_name(CACHE_EXTENSION))
    }

    /// First existing `{dir}/{name}/{file_name}` across [`Self::config_dirs`].
    #[must_use]
    pub fn find_config_file(&self, file_name: &str) -> Option<Utf8PathBuf> {
        self.config_dirs
            .iter()
            .map(|dir| dir.join(&self.segment).join(file_name))
            .find(|candidate| candidate.is_file())
    }

    fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.app_name)
    }
}

#[cfg(test)]
mod tests;
