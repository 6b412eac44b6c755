//! Precedence rules applied when merging layers.

use serde::{Deserialize, Serialize};

use crate::Level;

/// How a layer's value combines with the value already present for a key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MergeStrategy {
    /// The layer's value replaces the existing value wholesale.
    #[default]
    Shallow,
    /// Nested mappings merge recursively; other values replace.
    Deep,
}

/// Merge behaviour derived from [`LoadOptions`].
///
/// [`LoadOptions`]: crate::LoadOptions
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergePolicy {
    /// Re-apply the system layer after local so administrators keep the
    /// final say.
    pub system_override: bool,
    /// How overlapping values combine.
    pub strategy: MergeStrategy,
}

impl MergePolicy {
    /// Order in which levels are applied, lowest precedence first.
    ///
    /// ```rust
    /// use moose_config::{Level, MergePolicy};
    ///
    /// let policy = MergePolicy { system_override: true, ..MergePolicy::default() };
    /// assert_eq!(
    ///     policy.precedence(),
    ///     vec![Level::System, Level::User, Level::Local, Level::System]
    /// );
    /// ```
    #[must_use]
    pub fn precedence(&self) -> Vec<Level> {
        let mut order = Level::ALL.to_vec();
        if self.system_override {
            order.push(Level::System);
        }
        order
    }
}
