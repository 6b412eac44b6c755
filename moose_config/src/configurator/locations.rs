//! Where each layer file is looked up.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use super::LoadOptions;
use crate::{DirectorySet, Level};

/// Candidate file path for every level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayerLocations {
    system: Utf8PathBuf,
    user: Utf8PathBuf,
    local: Utf8PathBuf,
}

impl LayerLocations {
    /// Locations derived from `directories` using the extension and
    /// `hidden_local` flag from `options`.
    #[must_use]
    pub fn resolve(directories: &DirectorySet, options: &LoadOptions) -> Self {
        let file = |level| directories.config_file(level, &options.extension, options.hidden_local);
        Self {
            system: file(Level::System),
            user: file(Level::User),
            local: file(Level::Local),
        }
    }

    /// Path for `level`.
    #[must_use]
    pub fn get(&self, level: Level) -> &Utf8Path {
        match level {
            Level::System => &self.system,
            Level::User => &self.user,
            Level::Local => &self.local,
        }
    }

    /// Replace the path used for `level`.
    pub fn set(&mut self, level: Level, path: Utf8PathBuf) {
        match level {
            Level::System => self.system = path,
            Level::User => self.user = path,
            Level::Local => self.local = path,
        }
    }

    /// Levels paired with their paths, system first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &Utf8Path)> {
        Level::ALL.into_iter().map(|level| (level, self.get(level)))
    }
}
