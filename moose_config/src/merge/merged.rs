//! The read-only result of a merge.

use std::collections::BTreeMap;
use std::fmt;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::Serialized,
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::{MergeStrategy, merge_value};
use crate::{Level, Mapping, MooseResult, MooseResultExt};

/// Source that supplied a merged key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Caller-supplied defaults.
    Defaults,
    /// The system layer.
    System,
    /// The user layer.
    User,
    /// The local layer.
    Local,
}

impl From<Level> for Origin {
    fn from(level: Level) -> Self {
        match level {
            Level::System => Self::System,
            Level::User => Self::User,
            Level::Local => Self::Local,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Defaults => "defaults",
            Self::System => "system",
            Self::User => "user",
            Self::Local => "local",
        })
    }
}

/// Merged configuration values with the origin of every key.
///
/// Only shared accessors are offered. [`MergedConfig::into_mapping`] or
/// `clone` give callers their own copy; nothing written to a copy reaches
/// disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MergedConfig {
    values: Mapping,
    origins: BTreeMap<String, Origin>,
}

impl MergedConfig {
    pub(super) fn from_defaults(values: Mapping) -> Self {
        let origins = values
            .keys()
            .map(|key| (key.clone(), Origin::Defaults))
            .collect();
        Self { values, origins }
    }

    pub(super) fn overlay(&mut self, level: Level, mapping: &Mapping, strategy: MergeStrategy) {
        for (key, value) in mapping {
            match (strategy, self.values.get_mut(key)) {
                (MergeStrategy::Deep, Some(existing)) => merge_value(existing, value.clone()),
                _ => {
                    self.values.insert(key.clone(), value.clone());
                }
            }
            self.origins.insert(key.clone(), Origin::from(level));
        }
    }

    /// Value for `key`, if any layer or the defaults supplied it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Which source supplied `key`.
    #[must_use]
    pub fn origin(&self, key: &str) -> Option<Origin> {
        self.origins.get(key).copied()
    }

    /// Per-key origins, ordered by key.
    #[must_use]
    pub const fn origins(&self) -> &BTreeMap<String, Origin> {
        &self.origins
    }

    /// The merged mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> &Mapping {
        &self.values
    }

    /// Take ownership of the merged mapping.
    #[must_use]
    pub fn into_mapping(self) -> Mapping {
        self.values
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no key was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Deserialise the merged mapping into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Gathering`] when the values do not fit `T`.
    ///
    /// [`MooseError::Gathering`]: crate::MooseError::Gathering
    pub fn extract<T: DeserializeOwned>(&self) -> MooseResult<T> {
        self.figment().extract().into_moose()
    }

    /// Deserialise the value at `key` into `T`. Dotted keys address nested
    /// mappings.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Gathering`] when the key is absent or the value
    /// does not fit `T`.
    ///
    /// [`MooseError::Gathering`]: crate::MooseError::Gathering
    pub fn extract_inner<T: DeserializeOwned>(&self, key: &str) -> MooseResult<T> {
        self.figment().extract_inner(key).into_moose()
    }

    /// A [`Figment`] seeded with the merged values, ready for further
    /// providers to be stacked on top.
    #[must_use]
    pub fn figment(&self) -> Figment {
        Figment::from(self.clone())
    }
}

impl<'a> IntoIterator for &'a MergedConfig {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Provider for MergedConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("moose configuration")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(&self.values).data()
    }
}
