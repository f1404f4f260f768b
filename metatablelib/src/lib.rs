//! # metatablelib
//!
//! Turns a document's metadata fields into presentation-ready table rows,
//! with every value annotated for search matches and link/markdown handling.
//!
//! ## Overview
//!
//! Given an ordered mapping of metadata fields and an optional search query,
//! the library produces one row per field: a label cell and a value cell.
//! Each value is broken into typed fragments:
//!
//! - **PlainText**: shown as-is
//! - **HighlightedText**: a list element matching the query
//! - **Markdown**: source for the host's markdown renderer (link references
//!   become `[[path]]`), which highlights matches itself
//! - **Separator**: the `", "` between list elements
//!
//! The reserved `tags` field always renders as a list of tag links.
//!
//! ## Features
//!
//! - **Case-insensitive search**: an empty query never matches anything
//! - **Order-preserving**: fields display in insertion order, never re-sorted
//! - **Pure data types**: building a table does no I/O and cannot fail
//! - **Pluggable presentation**: HTML output with an injected markdown renderer
//!
//! ## Example
//!
//! ```rust
//! use metatablelib::{CellContent, FieldEntry, Metadata, MetadataTable, RenderFragment, SearchQuery};
//!
//! let metadata = Metadata::from_json_str(r#"{
//!     "author": { "value": "Jane Doe" },
//!     "related": { "value": [{ "path": "NoteA" }, { "path": "NoteB" }] }
//! }"#).unwrap();
//!
//! let table = MetadataTable::build(Some(&metadata), &SearchQuery::new("jane"));
//! assert_eq!(table.rows.len(), 2);
//!
//! match &table.rows[0].value.content {
//!     CellContent::Value(value) => {
//!         assert!(value.is_match);
//!         assert_eq!(value.fragments, vec![RenderFragment::plain("Jane Doe")]);
//!     }
//!     CellContent::Tags { .. } => unreachable!(),
//! }
//!
//! // Built programmatically instead
//! let metadata = Metadata::new().field("status", FieldEntry::new("draft").label("Status"));
//! assert_eq!(MetadataTable::build(Some(&metadata), &SearchQuery::none()).len(), 1);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;

pub use data::{FieldEntry, FieldValue, LinkReference, Metadata, ScalarValue};
pub use error::MetatableError;
pub use output::{
    format_value, item_metadata, render_tags, CellContent, ClassNamer, EscapedMarkdown,
    FormattedValue, HtmlRenderer, LabelCell, MarkdownRenderer, MetadataTable, RenderFragment,
    RowDescriptor, TagLink, ValueCell,
};
pub use query::{contains_ignore_case, SearchQuery, ViewOptions};

/// Result type for metatablelib operations
pub type Result<T> = std::result::Result<T, MetatableError>;
