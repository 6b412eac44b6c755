//! Layer precedence and the merge of configuration layers.
//!
//! [`merge_layers`] is a pure function: given defaults, the layers read from
//! disk and a [`MergePolicy`], it produces a [`MergedConfig`] without touching
//! the filesystem.

mod layer;
mod merged;
mod policy;
mod value;

pub use layer::{Layer, LayerState};
pub use merged::{MergedConfig, Origin};
pub use policy::{MergePolicy, MergeStrategy};
pub use value::merge_value;

use tracing::debug;

use crate::Mapping;

/// Overlay `layers` onto `defaults` following `policy`.
///
/// Layers are applied in [`MergePolicy::precedence`] order; layers that are
/// missing or skipped contribute nothing. When several layers share a level
/// they are applied in slice order.
///
/// # Examples
///
/// ```rust
/// use moose_config::{Layer, Level, Mapping, MergePolicy, merge::merge_layers};
/// use serde_json::json;
///
/// let mapping = |value: serde_json::Value| value.as_object().cloned().unwrap_or_default();
/// let defaults = mapping(json!({"a": 1, "b": 2}));
/// let layers = [
///     Layer::loaded(Level::System, "/etc/app/app.yml".into(), mapping(json!({"b": 3}))),
///     Layer::loaded(Level::User, "/home/u/.config/app/app.yml".into(), mapping(json!({"b": 4, "c": 5}))),
///     Layer::missing(Level::Local, "./app.yml".into()),
/// ];
///
/// let merged = merge_layers(&defaults, &layers, &MergePolicy::default());
/// assert_eq!(merged.as_mapping(), &mapping(json!({"a": 1, "b": 4, "c": 5})));
///
/// let policy = MergePolicy { system_override: true, ..MergePolicy::default() };
/// let merged = merge_layers(&defaults, &layers, &policy);
/// assert_eq!(merged.get("b"), Some(&json!(3)));
/// ```
#[must_use]
pub fn merge_layers(defaults: &Mapping, layers: &[Layer], policy: &MergePolicy) -> MergedConfig {
    let mut merged = MergedConfig::from_defaults(defaults.clone());
    for level in policy.precedence() {
        for layer in layers.iter().filter(|layer| layer.level() == level) {
            let Some(mapping) = layer.mapping() else {
                continue;
            };
            debug!(
                level = %level,
                path = %layer.path(),
                keys = mapping.len(),
                strategy = ?policy.strategy,
                "applying layer"
            );
            merged.overlay(level, mapping, policy.strategy);
        }
    }
    merged
}

#[cfg(test)]
mod tests;
