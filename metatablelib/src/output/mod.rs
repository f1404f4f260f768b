//! Output: turn metadata into presentation-ready structures.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **Fragments**: the typed pieces a value is made of (`RenderFragment`)
//! - **Formatter**: per-value rendering decisions (`format_value`)
//! - **Tags**: the reserved `tags` field as a list of tag links
//! - **MetadataTable**: one row descriptor per field, in insertion order
//! - **View**: the item-level gate deciding whether a table shows at all
//! - **Markup**: an HTML presentation of a table
//!
//! ## Example
//!
//! ```rust,ignore
//! use metatablelib::output::MetadataTable;
//!
//! let table = MetadataTable::build(Some(&metadata), &SearchQuery::new("jane"));
//! // table.rows: [RowDescriptor { key: "author", label: Some(..), value: ValueCell { .. } }]
//! ```

pub mod formatter;
pub mod fragment;
pub mod markup;
pub mod table;
pub mod tags;
pub mod view;

pub use formatter::format_value;
pub use fragment::{FormattedValue, RenderFragment, SEPARATOR};
pub use markup::{escape_html, ClassNamer, EscapedMarkdown, HtmlRenderer, MarkdownRenderer};
pub use table::{CellContent, LabelCell, MetadataTable, RowDescriptor, ValueCell};
pub use tags::{render_tags, TagLink, TAGS_KEY};
pub use view::item_metadata;
