//! Table-ready row descriptors for metadata output.
//!
//! This module provides `MetadataTable`, a presentation-ready structure
//! that can be handed to a markup layer or serialized to JSON.
//!
//! The data flow is:
//! 1. Metadata (ordered field records)
//! 2. MetadataTable (one row per field, value cells split into fragments)
//! 3. Markup (HTML, terminal text, ...)
//!
//! MetadataTable only decides what each cell contains and whether it matches
//! the search query. Fields keep their insertion order.

use serde::{Deserialize, Serialize};

use crate::data::entry::FieldEntry;
use crate::data::metadata::Metadata;
use crate::query::search::SearchQuery;

use super::formatter::format_value;
use super::fragment::FormattedValue;
use super::tags::{render_tags, TagLink, TAGS_KEY};

/// The label cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCell {
    /// Field label, or the key when the field has none
    pub text: String,
    pub is_match: bool,
}

/// What a value cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    /// A formatted value
    Value(FormattedValue),
    /// The reserved tags field
    Tags { tags: Vec<TagLink> },
}

/// The value cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCell {
    /// 2 when the row has no label cell, else 1
    pub col_span: u8,
    /// Flattened value text for querying and export
    pub raw_text: String,
    pub content: CellContent,
}

/// One row per metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDescriptor {
    /// Field key
    pub key: String,
    /// Label cell, absent when the field hides its label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelCell>,
    pub value: ValueCell,
}

impl RowDescriptor {
    /// Build the row for one field.
    pub fn from_entry(key: &str, entry: &FieldEntry, query: &SearchQuery) -> Self {
        let label_text = entry.display_label(key);
        let label = (!entry.should_hide_label).then(|| LabelCell {
            text: label_text.to_string(),
            is_match: query.matches(label_text),
        });

        let content = if key == TAGS_KEY {
            CellContent::Tags {
                tags: render_tags(&entry.value, query),
            }
        } else {
            CellContent::Value(format_value(entry, query))
        };

        RowDescriptor {
            key: key.to_string(),
            label,
            value: ValueCell {
                col_span: if entry.should_hide_label { 2 } else { 1 },
                raw_text: entry.value.joined_text(),
                content,
            },
        }
    }

    /// Whether any cell in the row matches the query.
    pub fn has_match(&self) -> bool {
        let label_match = self.label.as_ref().is_some_and(|l| l.is_match);
        let value_match = match &self.value.content {
            CellContent::Value(value) => value.is_match,
            CellContent::Tags { tags } => tags.iter().any(|t| t.is_match),
        };
        label_match || value_match
    }
}

/// Table-ready metadata.
///
/// Rows come out in the mapping's insertion order. An absent mapping and
/// an empty one both produce a table with no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataTable {
    pub rows: Vec<RowDescriptor>,
}

impl MetadataTable {
    /// Build a table from (possibly absent) metadata and the active query.
    pub fn build(metadata: Option<&Metadata>, query: &SearchQuery) -> Self {
        let Some(metadata) = metadata else {
            return Self::default();
        };

        let rows: Vec<RowDescriptor> = metadata
            .iter()
            .map(|(key, entry)| RowDescriptor::from_entry(key, entry, query))
            .collect();

        tracing::trace!(
            rows = rows.len(),
            query = query.as_str().unwrap_or(""),
            "built metadata table"
        );

        MetadataTable { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::value::{FieldValue, LinkReference};
    use crate::output::fragment::RenderFragment;

    fn sample_metadata() -> Metadata {
        Metadata::new()
            .field("author", FieldEntry::new("Jane Doe"))
            .field(
                "related",
                FieldEntry::new(FieldValue::list(vec![
                    LinkReference::new("NoteA"),
                    LinkReference::new("NoteB"),
                ])),
            )
            .field("tags", FieldEntry::new(FieldValue::list(vec!["#alpha", "#beta"])))
    }

    fn value_of(row: &RowDescriptor) -> &FormattedValue {
        match &row.value.content {
            CellContent::Value(value) => value,
            other => panic!("expected a value cell, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_metadata_is_empty() {
        let table = MetadataTable::build(None, &SearchQuery::new("x"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_metadata_is_empty() {
        let table = MetadataTable::build(Some(&Metadata::new()), &SearchQuery::new("x"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let metadata = Metadata::new()
            .field("zeta", FieldEntry::new("1"))
            .field("alpha", FieldEntry::new("2"));
        let table = MetadataTable::build(Some(&metadata), &SearchQuery::none());

        let keys: Vec<&str> = table.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_author_scenario() {
        let metadata = sample_metadata();
        let table = MetadataTable::build(Some(&metadata), &SearchQuery::new("jane"));
        let row = &table.rows[0];

        let label = row.label.as_ref().unwrap();
        assert_eq!(label.text, "author");
        assert!(!label.is_match);

        let value = value_of(row);
        assert!(value.is_match);
        assert_eq!(value.fragments, vec![RenderFragment::plain("Jane Doe")]);
        assert_eq!(row.value.col_span, 1);
        assert_eq!(row.value.raw_text, "Jane Doe");
        assert!(row.has_match());
    }

    #[test]
    fn test_related_links_scenario() {
        let metadata = sample_metadata();
        for q in ["", "note", "zzz"] {
            let table = MetadataTable::build(Some(&metadata), &SearchQuery::new(q));
            assert_eq!(
                value_of(&table.rows[1]).fragments,
                vec![
                    RenderFragment::markdown("[[NoteA]]", true),
                    RenderFragment::Separator,
                    RenderFragment::markdown("[[NoteB]]", true),
                ]
            );
            assert_eq!(table.rows[1].value.raw_text, "NoteA, NoteB");
        }
    }

    #[test]
    fn test_tags_scenario() {
        let metadata = sample_metadata();
        let table = MetadataTable::build(Some(&metadata), &SearchQuery::new("beta"));

        match &table.rows[2].value.content {
            CellContent::Tags { tags } => {
                assert!(!tags[0].is_match);
                assert!(tags[1].is_match);
                assert_eq!((tags[0].marker.as_str(), tags[0].rest.as_str()), ("#", "alpha"));
                assert_eq!((tags[1].marker.as_str(), tags[1].rest.as_str()), ("#", "beta"));
            }
            other => panic!("expected tags, got {:?}", other),
        }
        assert_eq!(table.rows[2].value.raw_text, "#alpha, #beta");
    }

    #[test]
    fn test_tags_ignore_markdown_flag() {
        let metadata = Metadata::new().field(
            "tags",
            FieldEntry::new(FieldValue::list(vec!["#x"])).markdown(true),
        );
        let table = MetadataTable::build(Some(&metadata), &SearchQuery::none());
        assert!(matches!(table.rows[0].value.content, CellContent::Tags { .. }));
    }

    #[test]
    fn test_hidden_label_spans_both_columns() {
        let metadata = Metadata::new().field(
            "summary",
            FieldEntry::new("match me").label("Summary").hide_label(true),
        );
        let table = MetadataTable::build(Some(&metadata), &SearchQuery::new("summary"));
        let row = &table.rows[0];

        assert!(row.label.is_none());
        assert_eq!(row.value.col_span, 2);
        assert!(!row.has_match());
    }

    #[test]
    fn test_label_match_uses_label_over_key() {
        let metadata = Metadata::new().field("dt", FieldEntry::new("2024").label("Due date"));

        let table = MetadataTable::build(Some(&metadata), &SearchQuery::new("DUE"));
        let label = table.rows[0].label.as_ref().unwrap();
        assert_eq!(label.text, "Due date");
        assert!(label.is_match);

        let table = MetadataTable::build(Some(&metadata), &SearchQuery::new("dt"));
        assert!(!table.rows[0].label.as_ref().unwrap().is_match);
    }

    #[test]
    fn test_build_is_idempotent() {
        let metadata = sample_metadata();
        let query = SearchQuery::new("a");
        assert_eq!(
            MetadataTable::build(Some(&metadata), &query),
            MetadataTable::build(Some(&metadata), &query)
        );
    }

    #[test]
    fn test_serialized_shape() {
        let metadata = Metadata::new().field("n", FieldEntry::new(3_i64).hide_label(true));
        let table = MetadataTable::build(Some(&metadata), &SearchQuery::none());
        let json = serde_json::to_value(&table).unwrap();

        let row = &json["rows"][0];
        assert!(row.get("label").is_none());
        assert_eq!(row["value"]["col_span"], 2);
        assert_eq!(row["value"]["raw_text"], "3");
        assert_eq!(row["value"]["content"]["kind"], "value");
        assert_eq!(row["value"]["content"]["fragments"][0]["text"], "3");
    }
}
