//! The ordered metadata mapping.
//!
//! Insertion order is display order. Nothing in this crate re-sorts a
//! [`Metadata`] mapping; loaders keep the key order of the source document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entry::FieldEntry;
use crate::error::MetatableError;
use crate::Result;

/// Ordered mapping from field key to [`FieldEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: IndexMap<String, FieldEntry>,
}

impl Metadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a field (replacing an existing key in place).
    pub fn field(mut self, key: impl Into<String>, entry: FieldEntry) -> Self {
        self.insert(key, entry);
        self
    }

    /// Insert a field. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, entry: FieldEntry) -> Option<FieldEntry> {
        self.fields.insert(key.into(), entry)
    }

    pub fn get(&self, key: &str) -> Option<&FieldEntry> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldEntry)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a JSON object of field records.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Parse a YAML mapping of field records.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(input)?;
        Self::from_value(value)
    }

    /// Decode an already-parsed document, keeping its key order.
    ///
    /// Only a root that is not a mapping is an error. Field records that do
    /// not decode are logged and left out, so the remaining fields still load.
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(MetatableError::InvalidMetadata(format!(
                    "expected a mapping of fields, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut metadata = Self::new();
        for (key, record) in map {
            match serde_json::from_value::<FieldEntry>(record) {
                Ok(entry) => {
                    metadata.insert(key, entry);
                }
                Err(e) => tracing::warn!(field = %key, "skipping malformed field record: {e}"),
            }
        }

        tracing::debug!(fields = metadata.len(), "loaded metadata");
        Ok(metadata)
    }
}

impl FromIterator<(String, FieldEntry)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, FieldEntry)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
