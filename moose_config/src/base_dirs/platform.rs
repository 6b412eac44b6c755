//! Platform-specific fallback rules used when XDG variables are unset.

use camino::{Utf8Path, Utf8PathBuf};

use super::EnvSnapshot;

const UNIX_SYSTEM_CONFIG: &str = "/etc";
const UNIX_SYSTEM_DATA: &str = "/var/run";
const UNIX_SYSTEM_CACHE: &str = "/tmp";
const UNIX_CONFIG_DIRS: &[&str] = &["/etc/xdg"];
const UNIX_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];

const WINDOWS_PROGRAM_DATA: &str = "C:\\ProgramData";
const WINDOWS_TEMP: &str = "C:\\Windows\\Temp";

/// Fallback convention applied by [`DirectoryResolver`].
///
/// XDG variables always win when set; the platform only decides what happens
/// when they are absent.
///
/// [`DirectoryResolver`]: crate::DirectoryResolver
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Platform {
    /// Linux, the BSDs, macOS and other Unix-like systems.
    Unix,
    /// Windows, using `APPDATA`, `LOCALAPPDATA` and `PROGRAMDATA`.
    Windows,
}

impl Platform {
    /// Platform the crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Separator used by list variables such as `XDG_CONFIG_DIRS`.
    #[must_use]
    pub const fn list_separator(self) -> char {
        match self {
            Self::Unix => ':',
            Self::Windows => ';',
        }
    }

    pub(super) fn home(self, env: &EnvSnapshot) -> Utf8PathBuf {
        let from_var = match self {
            Self::Unix => env.path("HOME"),
            Self::Windows => env.path("HOME").or_else(|| env.path("USERPROFILE")),
        };
        from_var
            .or_else(|| env.os_home().map(Utf8Path::to_path_buf))
            .unwrap_or_default()
    }

    pub(super) fn config_home(self, env: &EnvSnapshot, home: &Utf8Path) -> Utf8PathBuf {
        env.path("XDG_CONFIG_HOME").unwrap_or_else(|| match self {
            Self::Unix => home.join(".config"),
            Self::Windows => roaming_app_data(env, home),
        })
    }

    pub(super) fn data_home(self, env: &EnvSnapshot, home: &Utf8Path) -> Utf8PathBuf {
        env.path("XDG_DATA_HOME").unwrap_or_else(|| match self {
            Self::Unix => home.join(".local").join("share"),
            Self::Windows => roaming_app_data(env, home),
        })
    }

    pub(super) fn cache_home(self, env: &EnvSnapshot, home: &Utf8Path) -> Utf8PathBuf {
        env.path("XDG_CACHE_HOME").unwrap_or_else(|| match self {
            Self::Unix => home.join(".cache"),
            Self::Windows => env
                .path("LOCALAPPDATA")
                .unwrap_or_else(|| home.join("AppData").join("Local")),
        })
    }

    /// Base for `system_config`: the first `XDG_CONFIG_DIRS` entry, else the
    /// platform default. The `/etc/xdg` list default does not apply here.
    pub(super) fn system_config(self, env: &EnvSnapshot) -> Utf8PathBuf {
        self.first_entry(env, "XDG_CONFIG_DIRS")
            .unwrap_or_else(|| self.system_layer(env))
    }

    /// Base for the system configuration layer: `/etc` on Unix,
    /// `PROGRAMDATA` on Windows. XDG variables are never consulted.
    pub(super) fn system_layer(self, env: &EnvSnapshot) -> Utf8PathBuf {
        match self {
            Self::Unix => Utf8PathBuf::from(UNIX_SYSTEM_CONFIG),
            Self::Windows => program_data(env),
        }
    }

    pub(super) fn system_data(self, env: &EnvSnapshot) -> Utf8PathBuf {
        self.first_entry(env, "XDG_DATA_DIRS")
            .unwrap_or_else(|| match self {
                Self::Unix => Utf8PathBuf::from(UNIX_SYSTEM_DATA),
                Self::Windows => program_data(env),
            })
    }

    pub(super) fn system_cache(self, env: &EnvSnapshot) -> Utf8PathBuf {
        match self {
            Self::Unix => Utf8PathBuf::from(UNIX_SYSTEM_CACHE),
            Self::Windows => env
                .path("TEMP")
                .or_else(|| env.temp_dir().map(Utf8Path::to_path_buf))
                .unwrap_or_else(|| Utf8PathBuf::from(WINDOWS_TEMP)),
        }
    }

    pub(super) fn config_dirs(self, env: &EnvSnapshot) -> Vec<Utf8PathBuf> {
        env.path_list("XDG_CONFIG_DIRS", self.list_separator())
            .unwrap_or_else(|| match self {
                Self::Unix => owned(UNIX_CONFIG_DIRS),
                Self::Windows => vec![program_data(env)],
            })
    }

    pub(super) fn data_dirs(self, env: &EnvSnapshot) -> Vec<Utf8PathBuf> {
        env.path_list("XDG_DATA_DIRS", self.list_separator())
            .unwrap_or_else(|| match self {
                Self::Unix => owned(UNIX_DATA_DIRS),
                Self::Windows => vec![program_data(env)],
            })
    }

    fn first_entry(self, env: &EnvSnapshot, key: &str) -> Option<Utf8PathBuf> {
        env.path_list(key, self.list_separator())
            .and_then(|entries| entries.into_iter().next())
    }
}

fn roaming_app_data(env: &EnvSnapshot, home: &Utf8Path) -> Utf8PathBuf {
    env.path("APPDATA")
        .unwrap_or_else(|| home.join("AppData").join("Roaming"))
}

fn program_data(env: &EnvSnapshot) -> Utf8PathBuf {
    env.path("PROGRAMDATA")
        .unwrap_or_else(|| Utf8PathBuf::from(WINDOWS_PROGRAM_DATA))
}

fn owned(paths: &[&str]) -> Vec<Utf8PathBuf> {
    paths.iter().copied().map(Utf8PathBuf::from).collect()
}
