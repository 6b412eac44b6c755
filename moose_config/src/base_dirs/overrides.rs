//! Caller-supplied base paths that replace the resolver's defaults.

use camino::Utf8PathBuf;
use figment::{Figment, providers::Env};
use serde::{Deserialize, Serialize};

use crate::{MooseResult, MooseResultExt, env_prefix};

/// Base-path overrides handed to [`DirectoryResolver::new`].
///
/// System and user entries replace the *base* directory: the application
/// name is still appended, so `system_config = "/opt/etc"` resolves to
/// `/opt/etc/<app>`. `user_home` and the local entries replace the final
/// value.
///
/// [`DirectoryResolver::new`]: crate::DirectoryResolver::new
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseOverrides {
    /// Base for `system_config`.
    pub system_config: Option<Utf8PathBuf>,
    /// Base for `system_data`.
    pub system_data: Option<Utf8PathBuf>,
    /// Base for `system_cache`.
    pub system_cache: Option<Utf8PathBuf>,
    /// Replacement for the user's home directory.
    pub user_home: Option<Utf8PathBuf>,
    /// Base for `user_config`.
    pub user_config: Option<Utf8PathBuf>,
    /// Base for `user_data`.
    pub user_data: Option<Utf8PathBuf>,
    /// Base for `user_cache`.
    pub user_cache: Option<Utf8PathBuf>,
    /// Replacement for `local_config`.
    pub local_config: Option<Utf8PathBuf>,
    /// Replacement for `local_data`.
    pub local_data: Option<Utf8PathBuf>,
    /// Replacement for `local_cache`.
    pub local_cache: Option<Utf8PathBuf>,
}

impl BaseOverrides {
    /// Read overrides from `{PREFIX}_SYSTEM_CONFIG`, `{PREFIX}_USER_DATA`,
    /// `{PREFIX}_LOCAL_CACHE` and so on.
    ///
    /// Unrelated variables sharing the prefix are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Gathering`] when a variable cannot be
    /// interpreted as a path.
    ///
    /// [`MooseError::Gathering`]: crate::MooseError::Gathering
    pub fn from_env(prefix: &str) -> MooseResult<Self> {
        Figment::from(Env::prefixed(&env_prefix(prefix)))
            .extract()
            .into_moose()
    }

    /// Returns `true` when no override is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
