//! Precedence levels for configuration sources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One precedence tier of configuration source.
///
/// Declaration order is the default merge order: system first, local last.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Machine-wide configuration, for example `/etc/<app>/<app>.yml`.
    System,
    /// Per-user configuration under the XDG config home.
    User,
    /// Configuration in the current working directory.
    Local,
}

impl Level {
    /// Every level in default precedence order.
    pub const ALL: [Self; 3] = [Self::System, Self::User, Self::Local];

    /// Lower-case name used in logs and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
