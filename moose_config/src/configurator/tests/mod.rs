//! Configurator tests against a temporary system/home/work tree.

use anyhow::{Result, anyhow};
use rstest::fixture;
use serde_json::{Value, json};
use test_helpers::ConfigTree;

use crate::{
    BaseOverrides, Configurator, ConfiguratorBuilder, EnvSnapshot, Mapping, MooseResult, Platform,
};

mod errors;

pub(super) const APP: &str = "moapp";

/// Temporary tree plus an environment snapshot pointing into it. The
/// system base is redirected to `tree/etc` through [`BaseOverrides`].
pub(super) struct Sandbox {
    pub(super) tree: ConfigTree,
    env: EnvSnapshot,
}

impl Sandbox {
    pub(super) fn builder(&self) -> ConfiguratorBuilder {
        Configurator::builder(APP)
            .env(self.env.clone())
            .overrides(self.overrides())
            .platform(Platform::Unix)
    }

    pub(super) fn overrides(&self) -> BaseOverrides {
        BaseOverrides {
            system_config: Some(self.tree.etc()),
            ..BaseOverrides::default()
        }
    }

    pub(super) fn system(&self, contents: &str) -> Result<()> {
        self.tree.write_system(APP, "moapp.yml", contents).map(drop)
    }

    pub(super) fn user(&self, contents: &str) -> Result<()> {
        self.tree.write_user(APP, "moapp.yml", contents).map(drop)
    }

    pub(super) fn local(&self, file: &str, contents: &str) -> Result<()> {
        self.tree.write_local(file, contents).map(drop)
    }
}

#[fixture]
pub(super) fn sandbox() -> Sandbox {
    let tree = ConfigTree::new().unwrap_or_else(|err| panic!("config tree: {err}"));
    let env = EnvSnapshot::empty()
        .with_var("HOME", tree.home().as_str())
        .with_var("XDG_CONFIG_DIRS", "/etc/xdg")
        .with_cwd(tree.work());
    Sandbox { tree, env }
}

pub(super) fn mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        _ => Mapping::new(),
    }
}

pub(super) fn defaults() -> Mapping {
    mapping(json!({"a": 1, "b": 2}))
}

pub(super) fn to_anyhow<T>(result: MooseResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}
