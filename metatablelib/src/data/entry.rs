//! A single metadata field record.

use serde::{Deserialize, Serialize};

use super::value::{FieldValue, ScalarValue};

/// One metadata field, as handed over by the front-matter extractor.
///
/// The field's key lives in the enclosing [`Metadata`](super::Metadata)
/// mapping; the record itself only carries what is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    /// Display label (falls back to the field key when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Scalar or list value; a record without one holds `null`
    #[serde(default = "missing_value")]
    pub value: FieldValue,
    /// Whether string values are markdown to be rendered by the host
    #[serde(default)]
    pub contains_markdown: bool,
    /// Whether the value takes the full row with no label cell
    #[serde(default)]
    pub should_hide_label: bool,
}

impl FieldEntry {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            label: None,
            value: value.into(),
            contains_markdown: false,
            should_hide_label: false,
        }
    }

    /// Builder: set the display label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder: mark string values as markdown
    pub fn markdown(mut self, contains_markdown: bool) -> Self {
        self.contains_markdown = contains_markdown;
        self
    }

    /// Builder: hide the label cell
    pub fn hide_label(mut self, should_hide_label: bool) -> Self {
        self.should_hide_label = should_hide_label;
        self
    }

    /// The label to display, or `key` when no label is set.
    ///
    /// An empty label counts as absent.
    pub fn display_label<'a>(&'a self, key: &'a str) -> &'a str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => key,
        }
    }
}

fn missing_value() -> FieldValue {
    FieldValue::Scalar(ScalarValue::Other(serde_json::Value::Null))
}
