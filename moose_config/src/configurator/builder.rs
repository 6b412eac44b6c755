//! Builder for [`Configurator`].

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use serde_json::Value;

use super::{Configurator, LayerLocations, LoadOptions};
use crate::{
    BaseOverrides, DirectoryResolver, EnvSnapshot, Level, Mapping, MergeStrategy, MooseError,
    MooseResult, Platform,
};

/// Builder for [`Configurator`].
///
/// # Examples
///
/// ```rust,no_run
/// use moose_config::{Configurator, Level, MergeStrategy};
///
/// # fn run() -> moose_config::MooseResult<()> {
/// let cfg = Configurator::builder("moapp")
///     .default("server", "test.example.com")
///     .default("retries", 3)
///     .system_override(true)
///     .merge_strategy(MergeStrategy::Deep)
///     .layer_path(Level::System, "/opt/moapp/moapp.yml")
///     .load()?;
/// println!("server from {:?}", cfg.origin("server"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ConfiguratorBuilder {
    app_name: String,
    defaults: Mapping,
    options: LoadOptions,
    overrides: BaseOverrides,
    append: Vec<String>,
    env: Option<EnvSnapshot>,
    platform: Option<Platform>,
    layer_paths: BTreeMap<Level, Utf8PathBuf>,
}

impl ConfiguratorBuilder {
    /// Creates a builder for `app_name` with empty defaults and default
    /// options.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            defaults: Mapping::new(),
            options: LoadOptions::default(),
            overrides: BaseOverrides::default(),
            append: Vec::new(),
            env: None,
            platform: None,
            layer_paths: BTreeMap::new(),
        }
    }

    /// Replaces the defaults mapping.
    #[must_use]
    pub fn defaults(mut self, defaults: Mapping) -> Self {
        self.defaults = defaults;
        self
    }

    /// Adds or replaces a single default value.
    #[must_use]
    pub fn default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Replaces every option at once.
    #[must_use]
    pub fn options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Re-apply the system layer last.
    #[must_use]
    pub const fn system_override(mut self, enabled: bool) -> Self {
        self.options.system_override = enabled;
        self
    }

    /// Skip the local layer entirely.
    #[must_use]
    pub const fn ignore_local(mut self, enabled: bool) -> Self {
        self.options.ignore_local = enabled;
        self
    }

    /// Read the local layer from a dotfile.
    #[must_use]
    pub const fn hidden_local(mut self, enabled: bool) -> Self {
        self.options.hidden_local = enabled;
        self
    }

    /// Sets the layer file extension. A leading `.` is ignored.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.options.extension = extension.into();
        self
    }

    /// Selects how overlapping values combine.
    #[must_use]
    pub const fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.options.merge_strategy = strategy;
        self
    }

    /// Base-path overrides handed to the directory resolver.
    #[must_use]
    pub fn overrides(mut self, overrides: BaseOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Appends a path segment after the application name.
    #[must_use]
    pub fn append(mut self, segment: impl Into<String>) -> Self {
        self.append.push(segment.into());
        self
    }

    /// Resolves directories against `env` instead of the process
    /// environment.
    #[must_use]
    pub fn env(mut self, env: EnvSnapshot) -> Self {
        self.env = Some(env);
        self
    }

    /// Selects the platform fallback convention.
    #[must_use]
    pub const fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Reads the layer for `level` from `path` instead of the resolved
    /// location.
    #[must_use]
    pub fn layer_path(mut self, level: Level, path: impl Into<Utf8PathBuf>) -> Self {
        self.layer_paths.insert(level, path.into());
        self
    }

    /// Validates the inputs, resolves directories and reads every layer.
    ///
    /// # Errors
    ///
    /// Returns [`MooseError::Validation`] for an invalid application name or
    /// extension, and the read errors described on [`Configurator::new`].
    pub fn load(self) -> MooseResult<Configurator> {
        validate_app_name(&self.app_name)?;
        let options = self.options.normalised();
        options.validate()?;

        let mut resolver = DirectoryResolver::new(self.app_name.clone(), self.overrides);
        if let Some(platform) = self.platform {
            resolver = resolver.platform(platform);
        }
        for segment in self.append {
            resolver = resolver.append(segment);
        }
        let env = self.env.unwrap_or_else(EnvSnapshot::capture);
        let directories = resolver.resolve(&env);

        let mut locations = LayerLocations::resolve(&directories, &options);
        for (level, path) in self.layer_paths {
            locations.set(level, path);
        }

        Configurator::assemble(self.app_name, self.defaults, options, directories, locations)
    }
}

fn validate_app_name(name: &str) -> MooseResult<()> {
    let reason = if name.trim().is_empty() {
        Some("must not be empty")
    } else if name.contains(['/', '\\']) {
        Some("must not contain a path separator")
    } else if name == "." || name == ".." {
        Some("must not be a relative directory name")
    } else {
        None
    };
    reason.map_or(Ok(()), |message| {
        Err(MooseError::validation_arc("app_name", message))
    })
}
