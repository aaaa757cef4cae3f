//! YAML descriptor tables.
//!
//! A table is a list of records, one per descriptor:
//!
//! ```yaml
//! - name: Pill
//!   tag: { ref: Badge }          # or { primitive: span }, or a bare string
//!   props:
//!     px: 2
//!     bg: green
//!   style:
//!     borderRadius: 9999px
//!     padding: [4, 8]            # responsive: one value per tier
//!     "&:hover":                 # nested selector
//!       opacity: 0.8
//!   propTypes:
//!     active: bool
//!     size: { oneOf: [small, large] }
//! ```
//!
//! A bare `tag` string that starts with an uppercase letter names another
//! descriptor; anything else is a primitive element. A `null` style value
//! clears whatever a lower layer set for that property.
//!
//! Tables only carry static styles. Computed styles belong to descriptors
//! built in code, which a table can still reference:
//!
//! ```rust
//! use stylekit::{catalog, table, registry::Registry};
//!
//! let extra = table::parse_table(r#"
//! - name: Danger
//!   tag: Button
//!   props: { bg: red }
//! "#).unwrap();
//!
//! let mut builder = Registry::builder();
//! builder.extend(catalog::descriptors()).unwrap();
//! builder.extend(extra).unwrap();
//! let registry = builder.build().unwrap();
//!
//! assert_eq!(registry.resolve("Danger").unwrap().chain(), ["Danger", "Button"]);
//! ```

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::descriptor::{Constraint, Descriptor, RenderTarget};
use crate::error::LoadError;
use crate::responsive::Rule;
use crate::style::{CssValue, StyleMap, StyleValue};
use crate::value::Attributes;

/// Parses descriptors from YAML content.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed YAML and
/// [`LoadError::InvalidDefinition`] for a record of the wrong shape.
pub fn parse_table(yaml: &str) -> Result<Vec<Descriptor>, LoadError> {
    parse(yaml, None)
}

/// Loads descriptors from a YAML file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the same
/// errors as [`parse_table`].
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Vec<Descriptor>, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, Some(path.to_path_buf()))
}

fn parse(yaml: &str, path: Option<PathBuf>) -> Result<Vec<Descriptor>, LoadError> {
    let root: Value = serde_yaml::from_str(yaml).map_err(|e| LoadError::Parse {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let records = match root {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(records) => records,
        _ => {
            return Err(LoadError::Parse {
                path,
                message: "a descriptor table must be a list of records".to_string(),
            })
        }
    };

    let descriptors = records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_record(i, record))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = descriptors.len(), source = ?path, "parsed descriptor table");
    Ok(descriptors)
}

fn parse_record(index: usize, record: &Value) -> Result<Descriptor, LoadError> {
    let map = record.as_mapping().ok_or_else(|| LoadError::InvalidDefinition {
        name: format!("#{}", index),
        message: "expected a mapping".to_string(),
    })?;

    let name = field(map, "name")
        .and_then(Value::as_str)
        .ok_or_else(|| LoadError::InvalidDefinition {
            name: format!("#{}", index),
            message: "missing 'name'".to_string(),
        })?;
    let invalid = |message: String| LoadError::InvalidDefinition {
        name: name.to_string(),
        message,
    };

    let tag = field(map, "tag").ok_or_else(|| invalid("missing 'tag'".to_string()))?;
    let mut descriptor = Descriptor::new(name, parse_tag(tag).map_err(invalid)?);

    if let Some(props) = field(map, "props") {
        let defaults: Attributes = serde_yaml::from_value(props.clone())
            .map_err(|e| invalid(format!("invalid 'props': {}", e)))?;
        descriptor = descriptor.defaults(defaults);
    }

    if let Some(style) = field(map, "style") {
        let style = style
            .as_mapping()
            .ok_or_else(|| invalid("'style' must be a mapping".to_string()))?;
        descriptor = descriptor.style(parse_style(style).map_err(invalid)?);
    }

    if let Some(types) = field(map, "propTypes") {
        let types = types
            .as_mapping()
            .ok_or_else(|| invalid("'propTypes' must be a mapping".to_string()))?;
        for (key, value) in types {
            let key = key
                .as_str()
                .ok_or_else(|| invalid("prop type keys must be strings".to_string()))?;
            let constraint = parse_constraint(value)
                .map_err(|message| invalid(format!("prop '{}': {}", key, message)))?;
            descriptor = descriptor.constraint(key, constraint);
        }
    }

    Ok(descriptor)
}

fn field<'v>(map: &'v Mapping, key: &str) -> Option<&'v Value> {
    map.get(Value::String(key.to_string()))
}

fn parse_tag(tag: &Value) -> Result<RenderTarget, String> {
    match tag {
        Value::String(s) if s.starts_with(|c: char| c.is_ascii_uppercase()) => {
            Ok(RenderTarget::reference(s.as_str()))
        }
        Value::String(s) if !s.is_empty() => Ok(RenderTarget::primitive(s.as_str())),
        Value::Mapping(map) if map.len() == 1 => {
            match (field(map, "primitive"), field(map, "ref")) {
                (Some(Value::String(s)), None) => Ok(RenderTarget::primitive(s.as_str())),
                (None, Some(Value::String(s))) => Ok(RenderTarget::reference(s.as_str())),
                _ => Err("'tag' must be { primitive: <element> } or { ref: <Name> }".to_string()),
            }
        }
        _ => Err(format!("invalid 'tag': {:?}", tag)),
    }
}

fn parse_style(map: &Mapping) -> Result<StyleMap, String> {
    let mut style = StyleMap::new();
    for (key, value) in map {
        let property = key
            .as_str()
            .ok_or_else(|| "style keys must be strings".to_string())?;
        let value = match value {
            Value::Null => StyleValue::Unset,
            Value::Mapping(nested) => StyleValue::Nested(parse_style(nested)?),
            Value::Sequence(tiers) => StyleValue::Responsive(
                tiers
                    .iter()
                    .enumerate()
                    .map(|(i, tier)| {
                        css_value(tier)
                            .map(|v| Rule::new(i.checked_sub(1), v))
                            .ok_or_else(|| format!("'{}' tier {} must be a number or string", property, i))
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            other => StyleValue::Value(
                css_value(other).ok_or_else(|| format!("'{}' must be a number or string", property))?,
            ),
        };
        style.insert(property, value);
    }
    Ok(style)
}

fn css_value(value: &Value) -> Option<CssValue> {
    match value {
        Value::Number(n) => n.as_f64().map(CssValue::Number),
        Value::String(s) => Some(CssValue::Text(s.clone())),
        _ => None,
    }
}

fn parse_constraint(value: &Value) -> Result<Constraint, String> {
    match value {
        Value::String(s) => match s.as_str() {
            "bool" => Ok(Constraint::Bool),
            "number" => Ok(Constraint::Number),
            "string" => Ok(Constraint::String),
            other => Err(format!("unknown prop type '{}'", other)),
        },
        Value::Mapping(map) => field(map, "oneOf")
            .and_then(Value::as_sequence)
            .and_then(|options| {
                options
                    .iter()
                    .map(|o| o.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
            })
            .map(Constraint::OneOf)
            .ok_or_else(|| "expected { oneOf: [<string>, ...] }".to_string()),
        _ => Err(format!("invalid prop type {:?}", value)),
    }
}
