//! YAML parsing and rendering backed by `serde-saphyr`.

use std::fmt;

use camino::Utf8Path;
use serde::de::{Deserialize, Deserializer, Error as DeError, MapAccess, SeqAccess, Visitor};
use serde_json::{Number, Value};
use serde_saphyr::Options;

use super::error::{not_a_mapping, parse_error};
use crate::{Mapping, MooseResult};

/// Parse YAML `contents` read from `path` into a top-level mapping.
///
/// Booleans follow YAML 1.2, so `yes` and `on` stay strings. A document with
/// no content (empty, whitespace or comments only, or an explicit null)
/// yields an empty mapping. Plain `~`, `null` and empty values become
/// [`Value::Null`]; quoted forms stay strings.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use moose_config::file::parse_mapping;
///
/// let mapping = parse_mapping(Utf8Path::new("app.yml"), "answer: yes\n")?;
/// assert_eq!(mapping["answer"], "yes");
/// # Ok::<(), std::sync::Arc<moose_config::MooseError>>(())
/// ```
///
/// # Errors
///
/// Returns [`MooseError::Parse`] for malformed YAML and
/// [`MooseError::NotAMapping`] when the document is a sequence or scalar.
///
/// [`MooseError::Parse`]: crate::MooseError::Parse
/// [`MooseError::NotAMapping`]: crate::MooseError::NotAMapping
pub fn parse_mapping(path: &Utf8Path, contents: &str) -> MooseResult<Mapping> {
    if !has_content(contents) {
        return Ok(Mapping::new());
    }
    let Node(value) = serde_saphyr::from_str_with_options::<Node>(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map_err(|err| parse_error(path, err))?;
    match value {
        Value::Object(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(not_a_mapping(path, describe(&other))),
    }
}

/// Render `mapping` as a YAML document that [`parse_mapping`] reads back
/// unchanged.
///
/// Block style is preferred. When a string would be emitted plain yet read
/// back as something else (`"123"`, `"a: b"`), the document is written in
/// JSON flow style instead, which YAML 1.2 readers accept as is.
///
/// # Errors
///
/// Returns the serialiser's message when a value cannot be represented.
pub fn to_yaml(mapping: &Mapping) -> Result<String, String> {
    let block = serde_saphyr::to_string(mapping).map_err(|err| err.to_string())?;
    if parse_mapping(Utf8Path::new(RENDERED), &block).is_ok_and(|parsed| &parsed == mapping) {
        return Ok(block);
    }
    let mut flow = serde_json::to_string_pretty(mapping).map_err(|err| err.to_string())?;
    flow.push('\n');
    Ok(flow)
}

const RENDERED: &str = "<rendered>";

/// A YAML node converted to JSON.
///
/// Every node is first offered to `deserialize_option` so the backend can
/// report plain null scalars, which `deserialize_any` hands over as strings.
struct Node(Value);

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_none<E: DeError>(self) -> Result<Node, E> {
        Ok(Node(Value::Null))
    }

    fn visit_unit<E: DeError>(self) -> Result<Node, E> {
        Ok(Node(Value::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: DeError>(self, value: bool) -> Result<Node, E> {
        Ok(Node(Value::Bool(value)))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<Node, E> {
        Ok(Node(Value::Number(value.into())))
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Node, E> {
        Ok(Node(Value::Number(value.into())))
    }

    fn visit_f64<E: DeError>(self, value: f64) -> Result<Node, E> {
        Ok(Node(Number::from_f64(value).map_or(Value::Null, Value::Number)))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Node, E> {
        Ok(Node(Value::String(value.to_owned())))
    }

    fn visit_string<E: DeError>(self, value: String) -> Result<Node, E> {
        Ok(Node(Value::String(value)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(Node(item)) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node(Value::Array(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut entries = Mapping::new();
        while let Some((key, Node(value))) = map.next_entry::<String, Node>()? {
            entries.insert(key, value);
        }
        Ok(Node(Value::Object(entries)))
    }
}

fn has_content(contents: &str) -> bool {
    contents.lines().any(|line| {
        let trimmed = line.trim();
        !(trimmed.is_empty() || trimmed.starts_with('#') || trimmed == "---" || trimmed == "...")
    })
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
