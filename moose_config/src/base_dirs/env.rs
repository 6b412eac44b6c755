//! Captured environment consulted by the directory resolver.
//!
//! The resolver never reads the process environment directly. Instead it
//! consumes an [`EnvSnapshot`], which keeps resolution deterministic and
//! lets tests describe an environment without mutating global state.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::warn;

/// Environment variables captured by [`EnvSnapshot::capture`].
pub const CAPTURED_VARS: &[&str] = &[
    "HOME",
    "USERPROFILE",
    "XDG_CONFIG_HOME",
    "XDG_CONFIG_DIRS",
    "XDG_DATA_HOME",
    "XDG_DATA_DIRS",
    "XDG_CACHE_HOME",
    "XDG_RUNTIME_DIR",
    "APPDATA",
    "LOCALAPPDATA",
    "PROGRAMDATA",
    "TEMP",
];

/// Point-in-time view of the environment values that influence path
/// resolution.
///
/// Empty values are treated as unset, matching the XDG specification.
///
/// # Examples
///
/// ```rust
/// use moose_config::EnvSnapshot;
///
/// let env = EnvSnapshot::empty()
///     .with_var("HOME", "/home/moose")
///     .with_var("XDG_CONFIG_HOME", "");
/// assert_eq!(env.var("HOME"), Some("/home/moose"));
/// assert_eq!(env.var("XDG_CONFIG_HOME"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
    os_home: Option<Utf8PathBuf>,
    cwd: Option<Utf8PathBuf>,
    temp_dir: Option<Utf8PathBuf>,
}

impl EnvSnapshot {
    /// Snapshot with no variables, no OS home and no working directory.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            vars: BTreeMap::new(),
            os_home: None,
            cwd: None,
            temp_dir: None,
        }
    }

    /// Capture the current process environment.
    ///
    /// Values that are not valid UTF-8 are skipped with a warning and behave
    /// as if unset.
    #[must_use]
    pub fn capture() -> Self {
        let mut vars = BTreeMap::new();
        for key in CAPTURED_VARS {
            let Some(raw) = std::env::var_os(key) else {
                continue;
            };
            match raw.into_string() {
                Ok(value) => {
                    vars.insert((*key).to_owned(), value);
                }
                Err(raw_value) => {
                    warn!(variable = key, value = ?raw_value, "ignoring non-UTF-8 environment value");
                }
            }
        }
        Self {
            vars,
            os_home: dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()),
            cwd: std::env::current_dir()
                .ok()
                .and_then(|p| Utf8PathBuf::from_path_buf(p).ok()),
            temp_dir: Utf8PathBuf::from_path_buf(std::env::temp_dir()).ok(),
        }
    }

    /// Set a variable on the snapshot.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Remove a variable from the snapshot.
    #[must_use]
    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }

    /// Set the home directory reported by the operating system.
    #[must_use]
    pub fn with_os_home(mut self, home: Option<Utf8PathBuf>) -> Self {
        self.os_home = home;
        self
    }

    /// Set the working directory used for local paths.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<Utf8PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the operating system's temporary directory.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Returns a variable's value, treating empty strings as unset.
    #[must_use]
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns a variable as a path, treating empty strings as unset.
    #[must_use]
    pub fn path(&self, key: &str) -> Option<Utf8PathBuf> {
        self.var(key).map(Utf8PathBuf::from)
    }

    /// Split a list variable on `separator`, dropping empty entries.
    ///
    /// Returns `None` when the variable is unset or holds no usable entries
    /// so callers can fall back to a default list.
    #[must_use]
    pub fn path_list(&self, key: &str, separator: char) -> Option<Vec<Utf8PathBuf>> {
        let entries: Vec<Utf8PathBuf> = self
            .var(key)?
            .split(separator)
            .filter(|entry| !entry.is_empty())
            .map(Utf8PathBuf::from)
            .collect();
        if entries.is_empty() { None } else { Some(entries) }
    }

    /// Home directory reported by the operating system, if any.
    #[must_use]
    pub fn os_home(&self) -> Option<&Utf8Path> {
        self.os_home.as_deref()
    }

    /// Working directory, falling back to `.` when it could not be captured.
    #[must_use]
    pub fn cwd(&self) -> Utf8PathBuf {
        self.cwd.clone().unwrap_or_else(|| Utf8PathBuf::from("."))
    }

    /// Temporary directory reported by the operating system, if any.
    #[must_use]
    pub fn temp_dir(&self) -> Option<&Utf8Path> {
        self.temp_dir.as_deref()
    }
}
