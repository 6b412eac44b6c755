//! Loading the system, user and local layers into one configuration.

mod builder;
mod locations;
mod options;

pub use builder::ConfiguratorBuilder;
pub use locations::LayerLocations;
pub use options::LoadOptions;

use figment::Figment;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::merge::merge_layers;
use crate::{
    DirectorySet, Layer, Level, Mapping, MergedConfig, MooseError, MooseResult, Origin, file,
};

/// Layered configuration for one application.
///
/// Construction reads every layer and merges them once. The result is
/// read-only; [`Configurator::reload`] produces a fresh instance and
/// [`Configurator::write_layer`] is the only way to change files on disk.
#[derive(Clone, Debug)]
pub struct Configurator {
    app_name: String,
    defaults: Mapping,
    options: LoadOptions,
    directories: DirectorySet,
    locations: LayerLocations,
    layers: Vec<Layer>,
    merged: MergedConfig,
}

impl Configurator {
    /// Load configuration for `app_name` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Validation`] for an empty or path-like
    /// application name or an empty extension, [`MooseError::File`] when an
    /// existing layer cannot be read, [`MooseError::Parse`] for malformed YAML
    /// and [`MooseError::NotAMapping`] when a layer is not a mapping.
    pub fn new(
        app_name: impl Into<String>,
        defaults: Mapping,
        options: LoadOptions,
    ) -> MooseResult<Self> {
        Self::builder(app_name)
            .defaults(defaults)
            .options(options)
            .load()
    }

    /// Start building a configurator for `app_name`.
    #[must_use]
    pub fn builder(app_name: impl Into<String>) -> ConfiguratorBuilder {
        ConfiguratorBuilder::new(app_name)
    }

    pub(crate) fn assemble(
        app_name: String,
        defaults: Mapping,
        options: LoadOptions,
        directories: DirectorySet,
        locations: LayerLocations,
    ) -> MooseResult<Self> {
        let layers = read_layers(&locations, &options)?;
        let merged = merge_layers(&defaults, &layers, &options.merge_policy());
        info!(
            app = %app_name,
            loaded = layers.iter().filter(|layer| layer.is_loaded()).count(),
            keys = merged.len(),
            "configuration loaded"
        );
        Ok(Self {
            app_name,
            defaults,
            options,
            directories,
            locations,
            layers,
            merged,
        })
    }

    /// Application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The merged mapping.
    #[must_use]
    pub const fn obj(&self) -> &Mapping {
        self.merged.as_mapping()
    }

    /// The merged mapping with per-key origins.
    #[must_use]
    pub const fn merged(&self) -> &MergedConfig {
        &self.merged
    }

    /// Consume the configurator, keeping only the merge result.
    #[must_use]
    pub fn into_merged(self) -> MergedConfig {
        self.merged
    }

    /// Merged value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.merged.get(key)
    }

    /// Which source supplied `key`.
    #[must_use]
    pub fn origin(&self, key: &str) -> Option<Origin> {
        self.merged.origin(key)
    }

    /// The layer read for `level`.
    #[must_use]
    pub fn layer(&self, level: Level) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.level() == level)
    }

    /// Every layer, system first.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Paths each layer was looked up at.
    #[must_use]
    pub const fn locations(&self) -> &LayerLocations {
        &self.locations
    }

    /// Directories resolved for the application.
    #[must_use]
    pub const fn directories(&self) -> &DirectorySet {
        &self.directories
    }

    /// Defaults supplied at construction.
    #[must_use]
    pub const fn defaults(&self) -> &Mapping {
        &self.defaults
    }

    /// Options the configuration was loaded with.
    #[must_use]
    pub const fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Deserialise the merged mapping into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Gathering`] when the values do not fit `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> MooseResult<T> {
        self.merged.extract()
    }

    /// The merged configuration as a [`Figment`] so further providers can be
    /// stacked on top.
    #[must_use]
    pub fn figment(&self) -> Figment {
        self.merged.figment()
    }

    /// Read every layer again from the same locations with the same
    /// defaults and options.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Configurator::new`].
    pub fn reload(&self) -> MooseResult<Self> {
        debug!(app = %self.app_name, "reloading configuration");
        Self::assemble(
            self.app_name.clone(),
            self.defaults.clone(),
            self.options.clone(),
            self.directories.clone(),
            self.locations.clone(),
        )
    }

    /// Save `mapping` as the layer file for `level`, creating the parent
    /// directory when needed. The in-memory configuration is unchanged; call
    /// [`Configurator::reload`] to observe the new values.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Validation`] when writing the local layer while
    /// `ignore_local` is set, and [`MooseError::Write`] when the file cannot
    /// be written.
    pub fn write_layer(&self, level: Level, mapping: &Mapping) -> MooseResult<()> {
        if level == Level::Local && self.options.ignore_local {
            return Err(MooseError::validation_arc(
                "level",
                "the local layer is ignored by the current options",
            ));
        }
        file::write_mapping(self.locations.get(level), mapping)
    }
}

fn read_layers(locations: &LayerLocations, options: &LoadOptions) -> MooseResult<Vec<Layer>> {
    locations
        .iter()
        .map(|(level, path)| {
            if level == Level::Local && options.ignore_local {
                debug!(path = %path, "local layer skipped");
                return Ok(Layer::skipped(level, path.to_path_buf()));
            }
            Layer::read(level, path.to_path_buf())
        })
        .collect()
}

/// Load and merge configuration for `app_name` in one call.
///
/// # Errors
///
/// Returns the same errors as [`Configurator::new`].
pub fn load(app_name: &str, defaults: &Mapping, options: &LoadOptions) -> MooseResult<MergedConfig> {
    Configurator::new(app_name, defaults.clone(), options.clone()).map(Configurator::into_merged)
}

#[cfg(test)]
mod tests;
