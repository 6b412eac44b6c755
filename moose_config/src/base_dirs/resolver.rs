//! Resolver turning an application name into a `DirectorySet`.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use super::{BaseOverrides, DirectorySet, EnvSnapshot, Platform};

/// Computes [`DirectorySet`] values for an application.
///
/// Overrides are explicit constructor input, so two resolvers in the same
/// process never influence each other.
///
/// # Examples
///
/// ```rust
/// use moose_config::{BaseOverrides, DirectoryResolver, EnvSnapshot, Platform};
///
/// let env = EnvSnapshot::empty()
///     .with_var("HOME", "/home/moose")
///     .with_cwd("/work");
/// let dirs = DirectoryResolver::new("moapp", BaseOverrides::default())
///     .platform(Platform::Unix)
///     .resolve(&env);
/// assert_eq!(dirs.system_config().as_str(), "/etc/moapp");
/// assert_eq!(dirs.user_config().as_str(), "/home/moose/.config/moapp");
/// assert_eq!(dirs.local_cache().as_str(), "/work/.cache");
/// ```
#[derive(Clone, Debug)]
pub struct DirectoryResolver {
    app_name: String,
    append: Vec<String>,
    overrides: BaseOverrides,
    platform: Platform,
}

impl DirectoryResolver {
    /// Create a resolver for `app_name` using `overrides` as base paths.
    #[must_use]
    pub fn new(app_name: impl Into<String>, overrides: BaseOverrides) -> Self {
        Self {
            app_name: app_name.into(),
            append: Vec::new(),
            overrides,
            platform: Platform::current(),
        }
    }

    /// Append an extra path segment after the application name, such as an
    /// environment (`production`) or version (`v2`).
    #[must_use]
    pub fn append(mut self, segment: impl Into<String>) -> Self {
        self.append.push(segment.into());
        self
    }

    /// Select the fallback convention. Defaults to [`Platform::current`].
    #[must_use]
    pub const fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Application name the resolver was created for.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Overrides supplied at construction.
    #[must_use]
    pub const fn overrides(&self) -> &BaseOverrides {
        &self.overrides
    }

    /// Resolve against the current process environment.
    #[must_use]
    pub fn resolve_current(&self) -> DirectorySet {
        self.resolve(&EnvSnapshot::capture())
    }

    /// Resolve against `env`.
    #[must_use]
    pub fn resolve(&self, env: &EnvSnapshot) -> DirectorySet {
        let platform = self.platform;
        let overrides = &self.overrides;
        let segment = self.segment();

        let home = overrides
            .user_home
            .clone()
            .unwrap_or_else(|| platform.home(env));
        let config_home = overrides
            .user_config
            .clone()
            .unwrap_or_else(|| platform.config_home(env, &home));
        let data_home = overrides
            .user_data
            .clone()
            .unwrap_or_else(|| platform.data_home(env, &home));
        let cache_home = overrides
            .user_cache
            .clone()
            .unwrap_or_else(|| platform.cache_home(env, &home));

        let system_config = overrides
            .system_config
            .clone()
            .unwrap_or_else(|| platform.system_config(env));
        let system_layer = overrides
            .system_config
            .clone()
            .unwrap_or_else(|| platform.system_layer(env));
        let system_data = overrides
            .system_data
            .clone()
            .unwrap_or_else(|| platform.system_data(env));
        let system_cache = overrides
            .system_cache
            .clone()
            .unwrap_or_else(|| platform.system_cache(env));

        let cwd = env.cwd();
        let local_config = overrides.local_config.clone().unwrap_or_else(|| cwd.clone());
        let local_data = overrides
            .local_data
            .clone()
            .unwrap_or_else(|| cwd.join("data"));
        let local_cache = overrides
            .local_cache
            .clone()
            .unwrap_or_else(|| cwd.join(".cache"));

        let config_dirs = prepend(config_home.clone(), platform.config_dirs(env));
        let data_dirs = prepend(data_home.clone(), platform.data_dirs(env));

        let set = DirectorySet {
            app_name: self.app_name.clone(),
            system_config: system_config.join(&segment),
            system_layer: system_layer.join(&segment),
            system_data: system_data.join(&segment),
            system_cache: system_cache.join(&segment),
            user_home: home,
            user_config: config_home.join(&segment),
            user_data: data_home.join(&segment),
            user_cache: cache_home.join(&segment),
            local_config,
            local_data,
            local_cache,
            config_dirs,
            data_dirs,
            runtime_dir: env.path("XDG_RUNTIME_DIR"),
            segment,
        };
        debug!(
            app = %set.app_name,
            system_config = %set.system_config,
            system_layer = %set.system_layer,
            user_config = %set.user_config,
            local_config = %set.local_config,
            "resolved directories"
        );
        set
    }

    fn segment(&self) -> Utf8PathBuf {
        self.append
            .iter()
            .fold(Utf8PathBuf::from(&self.app_name), |acc, part| {
                acc.join(Utf8Path::new(part))
            })
    }
}

fn prepend(first: Utf8PathBuf, rest: Vec<Utf8PathBuf>) -> Vec<Utf8PathBuf> {
    let mut dirs = Vec::with_capacity(rest.len() + 1);
    dirs.push(first);
    dirs.extend(rest);
    dirs
}
