//! Options controlling which layers are read and how they merge.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::{MergePolicy, MergeStrategy, MooseError, MooseResult, MooseResultExt, env_prefix};

const DEFAULT_EXTENSION: &str = "yml";

/// Loader options.
///
/// ```rust
/// use moose_config::{LoadOptions, MergeStrategy};
///
/// let options = LoadOptions::default();
/// assert_eq!(options.extension, "yml");
/// assert_eq!(options.merge_strategy, MergeStrategy::Shallow);
/// assert!(!options.system_override && !options.ignore_local && !options.hidden_local);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Apply the system layer again after the local layer.
    pub system_override: bool,
    /// Never read the local layer.
    pub ignore_local: bool,
    /// Read the local layer from `.{app}.{ext}` instead of `{app}.{ext}`.
    pub hidden_local: bool,
    /// File extension of every layer, without the leading dot.
    pub extension: String,
    /// How overlapping values combine.
    pub merge_strategy: MergeStrategy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            system_override: false,
            ignore_local: false,
            hidden_local: false,
            extension: String::from(DEFAULT_EXTENSION),
            merge_strategy: MergeStrategy::default(),
        }
    }
}

impl LoadOptions {
    /// Read options from `{PREFIX}_SYSTEM_OVERRIDE`, `{PREFIX}_IGNORE_LOCAL`,
    /// `{PREFIX}_HIDDEN_LOCAL`, `{PREFIX}_EXTENSION` and
    /// `{PREFIX}_MERGE_STRATEGY`, starting from [`LoadOptions::default`].
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Gathering`] when a variable holds a value of the
    /// wrong type, such as `MOAPP_IGNORE_LOCAL=perhaps`.
    pub fn from_env(prefix: &str) -> MooseResult<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(&env_prefix(prefix)))
            .extract()
            .into_moose()
    }

    /// Merge behaviour implied by these options.
    #[must_use]
    pub const fn merge_policy(&self) -> MergePolicy {
        MergePolicy {
            system_override: self.system_override,
            strategy: self.merge_strategy,
        }
    }

    /// Strip a leading `.` from the extension so `.yml` and `yml` agree.
    #[must_use]
    pub fn normalised(mut self) -> Self {
        if let Some(stripped) = self.extension.strip_prefix('.') {
            self.extension = stripped.to_owned();
        }
        self
    }

    /// Check the options before any file is read.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Validation`] when the extension is empty or
    /// contains a path separator.
    pub fn validate(&self) -> MooseResult<()> {
        if self.extension.is_empty() {
            return Err(MooseError::validation_arc(
                "extension",
                "must not be empty",
            ));
        }
        if self.extension.contains(['/', '\\']) {
            return Err(MooseError::validation_arc(
                "extension",
                "must not contain a path separator",
            ));
        }
        Ok(())
    }
}
