//! A single configuration layer and whether it was found.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::{Level, Mapping, MooseResult, file};

/// Outcome of looking up a layer file.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", content = "values", rename_all = "lowercase")]
pub enum LayerState {
    /// The file existed and parsed to this mapping, possibly empty.
    Loaded(Mapping),
    /// No file exists at the layer's path.
    Missing,
    /// The layer was deliberately not read.
    Skipped,
}

/// Configuration read from one level.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    level: Level,
    path: Utf8PathBuf,
    #[serde(flatten)]
    state: LayerState,
}

impl Layer {
    /// Layer whose file was read successfully.
    #[must_use]
    pub const fn loaded(level: Level, path: Utf8PathBuf, mapping: Mapping) -> Self {
        Self {
            level,
            path,
            state: LayerState::Loaded(mapping),
        }
    }

    /// Layer whose file does not exist.
    #[must_use]
    pub const fn missing(level: Level, path: Utf8PathBuf) -> Self {
        Self {
            level,
            path,
            state: LayerState::Missing,
        }
    }

    /// Layer that was not read because the options exclude it.
    #[must_use]
    pub const fn skipped(level: Level, path: Utf8PathBuf) -> Self {
        Self {
            level,
            path,
            state: LayerState::Skipped,
        }
    }

    /// Read the layer for `level` from `path`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`file::read_mapping`].
    pub fn read(level: Level, path: Utf8PathBuf) -> MooseResult<Self> {
        let state = file::read_mapping(&path)?.map_or(LayerState::Missing, LayerState::Loaded);
        Ok(Self { level, path, state })
    }

    /// Level the layer belongs to.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Path the layer was looked up at.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the layer was loaded, missing or skipped.
    #[must_use]
    pub const fn state(&self) -> &LayerState {
        &self.state
    }

    /// The layer's mapping when it was loaded.
    #[must_use]
    pub const fn mapping(&self) -> Option<&Mapping> {
        match &self.state {
            LayerState::Loaded(mapping) => Some(mapping),
            LayerState::Missing | LayerState::Skipped => None,
        }
    }

    /// Returns `true` when a file was read for this layer.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.state, LayerState::Loaded(_))
    }
}
