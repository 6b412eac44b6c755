//! Unit tests for layer precedence, strategies and origins.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

use super::*;
use crate::{Level, Mapping};

fn mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        _ => Mapping::new(),
    }
}

fn loaded(level: Level, value: Value) -> Layer {
    Layer::loaded(level, format!("/{level}/app.yml").into(), mapping(value))
}

#[fixture]
fn defaults() -> Mapping {
    mapping(json!({"a": 1, "b": 2}))
}

#[fixture]
fn layers() -> Vec<Layer> {
    vec![
        loaded(Level::System, json!({"b": 3})),
        loaded(Level::User, json!({"b": 4, "c": 5})),
        Layer::missing(Level::Local, "/local/app.yml".into()),
    ]
}

#[rstest]
fn user_overrides_system(defaults: Mapping, layers: Vec<Layer>) -> Result<()> {
    let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
    let expected = mapping(json!({"a": 1, "b": 4, "c": 5}));
    ensure!(merged.as_mapping() == &expected, "unexpected merge {merged:?}");
    Ok(())
}

#[rstest]
fn system_override_reapplies_system(defaults: Mapping, layers: Vec<Layer>) -> Result<()> {
    let policy = MergePolicy {
        system_override: true,
        ..MergePolicy::default()
    };
    let merged = merge_layers(&defaults, &layers, &policy);
    let expected = mapping(json!({"a": 1, "b": 3, "c": 5}));
    ensure!(merged.as_mapping() == &expected, "unexpected merge {merged:?}");
    ensure!(merged.origin("b") == Some(Origin::System), "b should come from system");
    Ok(())
}

#[rstest]
fn local_wins_over_user(defaults: Mapping) -> Result<()> {
    let layers = vec![
        loaded(Level::User, json!({"b": 4})),
        loaded(Level::Local, json!({"b": 6})),
    ];
    let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
    ensure!(merged.get("b") == Some(&json!(6)), "unexpected b {:?}", merged.get("b"));
    Ok(())
}

#[rstest]
fn no_layers_returns_defaults(defaults: Mapping) -> Result<()> {
    let layers = vec![
        Layer::missing(Level::System, "/system/app.yml".into()),
        Layer::missing(Level::User, "/user/app.yml".into()),
        Layer::skipped(Level::Local, "/local/app.yml".into()),
    ];
    let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
    ensure!(merged.as_mapping() == &defaults, "defaults changed: {merged:?}");
    ensure!(
        merged.origins().values().all(|origin| *origin == Origin::Defaults),
        "unexpected origins {:?}",
        merged.origins()
    );
    Ok(())
}

#[rstest]
fn origins_track_supplying_level(defaults: Mapping, layers: Vec<Layer>) -> Result<()> {
    let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
    ensure!(merged.origin("a") == Some(Origin::Defaults), "a origin");
    ensure!(merged.origin("b") == Some(Origin::User), "b origin");
    ensure!(merged.origin("c") == Some(Origin::User), "c origin");
    ensure!(merged.origin("missing").is_none(), "absent key has origin");
    Ok(())
}

#[rstest]
fn shallow_replaces_nested_mappings() -> Result<()> {
    let defaults = mapping(json!({"db": {"host": "localhost", "port": 5432}}));
    let layers = vec![loaded(Level::User, json!({"db": {"host": "db.example.com"}}))];
    let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
    ensure!(
        merged.get("db") == Some(&json!({"host": "db.example.com"})),
        "shallow merge should replace db, got {:?}",
        merged.get("db")
    );
    Ok(())
}

#[rstest]
fn deep_merges_nested_mappings() -> Result<()> {
    let defaults = mapping(json!({"db": {"host": "localhost", "port": 5432}}));
    let layers = vec![loaded(Level::User, json!({"db": {"host": "db.example.com"}}))];
    let policy = MergePolicy {
        strategy: MergeStrategy::Deep,
        ..MergePolicy::default()
    };
    let merged = merge_layers(&defaults, &layers, &policy);
    ensure!(
        merged.get("db") == Some(&json!({"host": "db.example.com", "port": 5432})),
        "deep merge should keep port, got {:?}",
        merged.get("db")
    );
    ensure!(merged.origin("db") == Some(Origin::User), "db origin");
    Ok(())
}

#[rstest]
fn null_in_layer_replaces_value(defaults: Mapping) -> Result<()> {
    let layers = vec![loaded(Level::Local, json!({"a": null}))];
    let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
    ensure!(merged.get("a") == Some(&Value::Null), "null should replace a");
    Ok(())
}

#[rstest]
fn merge_is_deterministic(defaults: Mapping, layers: Vec<Layer>) -> Result<()> {
    let first = merge_layers(&defaults, &layers, &MergePolicy::default());
    let second = merge_layers(&defaults, &layers, &MergePolicy::default());
    ensure!(first == second, "repeated merges differ");
    Ok(())
}

#[rstest]
#[case(false, vec![Level::System, Level::User, Level::Local])]
#[case(true, vec![Level::System, Level::User, Level::Local, Level::System])]
fn precedence_order(#[case] system_override: bool, #[case] expected: Vec<Level>) -> Result<()> {
    let policy = MergePolicy {
        system_override,
        ..MergePolicy::default()
    };
    ensure!(policy.precedence() == expected, "unexpected order {:?}", policy.precedence());
    Ok(())
}

#[derive(Debug, Deserialize, PartialEq)]
struct Settings {
    a: u8,
    b: u8,
    c: Option<u8>,
}

#[rstest]
fn extract_deserialises_merged_values(defaults: Mapping, layers: Vec<Layer>) -> Result<()> {
    let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
    let settings: Settings = merged
        .extract()
        .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(
        settings == Settings { a: 1, b: 4, c: Some(5) },
        "unexpected settings {settings:?}"
    );
    let b: u8 = merged
        .extract_inner("b")
        .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(b == 4, "unexpected b {b}");
    Ok(())
}

#[rstest]
fn extract_reports_type_mismatch() -> Result<()> {
    let defaults = mapping(json!({"a": "not a number", "b": 1}));
    let merged = merge_layers(&defaults, &[], &MergePolicy::default());
    let Err(err) = merged.extract::<Settings>() else {
        return Err(anyhow!("expected extraction failure"));
    };
    ensure!(
        matches!(err.as_ref(), crate::MooseError::Gathering(_)),
        "expected Gathering, got {err:?}"
    );
    Ok(())
}

#[rstest]
fn strategy_parses_lowercase() -> Result<()> {
    let strategy: MergeStrategy = serde_json::from_value(json!("deep"))?;
    ensure!(strategy == MergeStrategy::Deep, "unexpected strategy {strategy:?}");
    Ok(())
}
