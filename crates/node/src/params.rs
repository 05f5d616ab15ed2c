//! Per-item parameter access.
//!
//! The host resolves parameter expressions before the node runs, so the
//! same parameter name may carry a different value for every input item.
//! [`ParameterSource`] is that per-item view; the typed accessors below
//! turn raw values into what the request builder needs and convert every
//! shortfall into an ordinary per-item [`NodeError`].

use serde_json::{Map, Value};

use crate::NodeError;

/// Per-item view of the node's resolved parameters.
pub trait ParameterSource: Send + Sync {
    /// Resolved value of `name` for the item at `index`, if set.
    fn get(&self, name: &str, index: usize) -> Option<Value>;
}

/// One parameter map shared by every item.
#[derive(Debug, Clone, Default)]
pub struct MapParameters {
    values: Map<String, Value>,
}

impl MapParameters {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Convenience for embedders holding a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(values) => Some(Self::new(values)),
            _ => None,
        }
    }
}

impl ParameterSource for MapParameters {
    fn get(&self, name: &str, _index: usize) -> Option<Value> {
        self.values.get(name).cloned()
    }
}

/// One parameter map per item, for hosts that resolve expressions per item.
#[derive(Debug, Clone, Default)]
pub struct PerItemParameters {
    items: Vec<Map<String, Value>>,
}

impl PerItemParameters {
    pub fn new(items: Vec<Map<String, Value>>) -> Self {
        Self { items }
    }
}

impl ParameterSource for PerItemParameters {
    fn get(&self, name: &str, index: usize) -> Option<Value> {
        self.items.get(index).and_then(|map| map.get(name)).cloned()
    }
}

// ---------------------------------------------------------------------------
// Typed accessors
// ---------------------------------------------------------------------------

/// A required string parameter.  An empty string counts as missing, since
/// that is what the host stores for an untouched text field.
pub(crate) fn required_str(
    params: &dyn ParameterSource,
    name: &str,
    index: usize,
) -> Result<String, NodeError> {
    match params.get(name, index) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        None | Some(Value::Null) | Some(Value::String(_)) => Err(NodeError::MissingParameter {
            name: name.to_owned(),
            index,
        }),
        Some(_) => Err(NodeError::WrongParameterType {
            name: name.to_owned(),
            index,
            expected: "a string",
        }),
    }
}

/// An optional JSON parameter.  Accepts a ready JSON value, or a string
/// holding JSON text (the host's text fields arrive that way).
pub(crate) fn optional_json(
    params: &dyn ParameterSource,
    name: &str,
    index: usize,
) -> Result<Option<Value>, NodeError> {
    match params.get(name, index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => match serde_json::from_str(&s) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(err) => Err(NodeError::MalformedJson {
                name: name.to_owned(),
                index,
                reason: err.to_string(),
            }),
        },
        Some(value) => Ok(Some(value)),
    }
}

/// A required JSON parameter (see [`optional_json`] for accepted shapes).
pub(crate) fn required_json(
    params: &dyn ParameterSource,
    name: &str,
    index: usize,
) -> Result<Value, NodeError> {
    optional_json(params, name, index)?.ok_or_else(|| NodeError::MissingParameter {
        name: name.to_owned(),
        index,
    })
}

/// An optional non-negative integer parameter with a default.
pub(crate) fn u64_or_default(
    params: &dyn ParameterSource,
    name: &str,
    index: usize,
    default: u64,
) -> Result<u64, NodeError> {
    match params.get(name, index) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| NodeError::WrongParameterType {
            name: name.to_owned(),
            index,
            expected: "a non-negative integer",
        }),
        Some(_) => Err(NodeError::WrongParameterType {
            name: name.to_owned(),
            index,
            expected: "a non-negative integer",
        }),
    }
}
