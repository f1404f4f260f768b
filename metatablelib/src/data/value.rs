//! Metadata values and their string coercion.
//!
//! A field value is either a single [`ScalarValue`] or an ordered list of them.
//! Scalars are the JSON-ish primitives a front-matter parser produces, plus
//! [`LinkReference`], a structured value pointing at another document.
//!
//! Decoding never fails: anything that is not a recognised scalar shape
//! degrades to [`ScalarValue::Other`] and is coerced to its JSON text.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// A structured reference to another document.
///
/// Distinguished from plain objects by carrying a string `path`. Any other
/// keys the upstream parser attached are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkReference {
    /// Target document identifier
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LinkReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extra: Map::new(),
        }
    }

    /// The `[[path]]` markdown source that resolves to this link.
    pub fn to_markdown(&self) -> String {
        format!("[[{}]]", self.path)
    }
}

/// One scalar metadata value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Number(Number),
    Bool(bool),
    Link(LinkReference),
    /// Anything else (null, objects without a `path`, nested arrays)
    Other(Value),
}

impl ScalarValue {
    /// Path of the referenced document, if this is a link.
    pub fn link_path(&self) -> Option<&str> {
        match self {
            ScalarValue::Link(link) => Some(&link.path),
            _ => None,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, ScalarValue::Link(_))
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Number(n) => write!(f, "{}", format_number(n)),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Link(link) => f.write_str(&link.path),
            ScalarValue::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Integers print as-is; floats use the shortest form, so `3.0` reads `3`.
fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(f) = n.as_f64() {
        format_float(f)
    } else {
        n.to_string()
    }
}

/// Host-style float text: `-0` reads `0`, and magnitudes of at least `1e21`
/// or below `1e-6` switch to exponent form with a signed exponent (`1e+21`).
fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", f);
        return match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exp,
        };
    }
    f.to_string()
}

impl From<Value> for ScalarValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ScalarValue::String(s),
            Value::Number(n) => ScalarValue::Number(n),
            Value::Bool(b) => ScalarValue::Bool(b),
            Value::Object(mut map) => match map.remove("path") {
                Some(Value::String(path)) => ScalarValue::Link(LinkReference { path, extra: map }),
                Some(other) => {
                    tracing::debug!("link-shaped value has a non-string path, keeping as text");
                    map.insert("path".to_string(), other);
                    ScalarValue::Other(Value::Object(map))
                }
                None => ScalarValue::Other(Value::Object(map)),
            },
            other => ScalarValue::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for ScalarValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ScalarValue::from)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Number(Number::from(i))
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(ScalarValue::Other(Value::Null), ScalarValue::Number)
    }
}

impl From<LinkReference> for ScalarValue {
    fn from(link: LinkReference) -> Self {
        ScalarValue::Link(link)
    }
}

/// A field's value: one scalar or an ordered list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<ScalarValue>),
    Scalar(ScalarValue),
}

impl FieldValue {
    /// Build a list value from anything convertible to scalars.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ScalarValue>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Flattened text: the scalar's string form, or list elements joined with `", "`.
    pub fn joined_text(&self) -> String {
        match self {
            FieldValue::Scalar(value) => value.to_string(),
            FieldValue::List(values) => values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// The values as a slice, treating a scalar as a one-element list.
    pub fn as_slice(&self) -> &[ScalarValue] {
        match self {
            FieldValue::Scalar(value) => std::slice::from_ref(value),
            FieldValue::List(values) => values,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                FieldValue::List(items.into_iter().map(ScalarValue::from).collect())
            }
            other => FieldValue::Scalar(ScalarValue::from(other)),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(FieldValue::from)
    }
}

impl From<ScalarValue> for FieldValue {
    fn from(value: ScalarValue) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Vec<ScalarValue>> for FieldValue {
    fn from(values: Vec<ScalarValue>) -> Self {
        FieldValue::List(values)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Scalar(s.into())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Scalar(s.into())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Scalar(b.into())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Scalar(i.into())
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Scalar(f.into())
    }
}

impl From<LinkReference> for FieldValue {
    fn from(link: LinkReference) -> Self {
        FieldValue::Scalar(link.into())
    }
}
