//! HTML markup for a [`MetadataTable`].
//!
//! The renderer owns no markdown logic and no styling policy. Both are
//! injected: a [`MarkdownRenderer`] turns markdown fragments (including
//! `[[path]]` links) into markup, and a [`ClassNamer`] namespaces the
//! semantic class names.
//!
//! Produced structure:
//!
//! ```text
//! table.meta-table > tbody > tr.meta-row
//!   td.meta-key[data-key] > span          (omitted for hidden labels)
//!   td.meta-value-wrapper[colspan][data-value]
//!     span.meta-value > fragments         (value fields)
//!     a.tag.item-tag[href] > span + text  (tags field)
//! ```
//!
//! Matches carry the unprefixed `is-search-match` class.

use crate::query::search::SearchQuery;

use super::fragment::{FormattedValue, RenderFragment, SEPARATOR};
use super::table::{CellContent, MetadataTable, RowDescriptor};
use super::tags::TagLink;

/// Class added to anything matching the search query.
pub const SEARCH_MATCH_CLASS: &str = "is-search-match";

/// Renders markdown source (with `[[path]]` links) to markup.
pub trait MarkdownRenderer {
    /// `inline` is set for list elements, which sit between separators.
    fn render(&self, source: &str, query: &SearchQuery, inline: bool) -> String;
}

/// Markdown collaborator that shows the source verbatim, HTML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapedMarkdown;

impl MarkdownRenderer for EscapedMarkdown {
    fn render(&self, source: &str, _query: &SearchQuery, inline: bool) -> String {
        let class = if inline { "markdown inline" } else { "markdown" };
        format!("<span class=\"{}\">{}</span>", class, escape_html(source))
    }
}

/// Prefixes semantic class names, e.g. `meta-row` → `kanban-plugin__meta-row`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNamer {
    prefix: String,
}

impl ClassNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn name(&self, class: &str) -> String {
        format!("{}__{}", self.prefix, class)
    }
}

impl Default for ClassNamer {
    fn default() -> Self {
        Self::new("kanban-plugin")
    }
}

/// Writes a [`MetadataTable`] as an HTML table.
pub struct HtmlRenderer<'a> {
    markdown: &'a dyn MarkdownRenderer,
    classes: ClassNamer,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(markdown: &'a dyn MarkdownRenderer, classes: ClassNamer) -> Self {
        Self { markdown, classes }
    }

    /// Render the whole table. An empty table still yields the table shell.
    pub fn render(&self, table: &MetadataTable, query: &SearchQuery) -> String {
        let mut out = format!("<table class=\"{}\"><tbody>", self.classes.name("meta-table"));
        for row in &table.rows {
            out.push_str(&self.render_row(row, query));
        }
        out.push_str("</tbody></table>");
        out
    }

    fn render_row(&self, row: &RowDescriptor, query: &SearchQuery) -> String {
        let mut out = format!("<tr class=\"{}\">", self.classes.name("meta-row"));

        if let Some(label) = &row.label {
            out.push_str(&format!(
                "<td class=\"{}\" data-key=\"{}\"><span>{}</span></td>",
                with_match(self.classes.name("meta-key"), label.is_match),
                escape_html(&row.key),
                escape_html(&label.text)
            ));
        }

        out.push_str(&format!(
            "<td colspan=\"{}\" class=\"{}\" data-value=\"{}\">",
            row.value.col_span,
            self.classes.name("meta-value-wrapper"),
            escape_html(&row.value.raw_text)
        ));
        match &row.value.content {
            CellContent::Tags { tags } => {
                for tag in tags {
                    out.push_str(&self.render_tag(tag));
                }
            }
            CellContent::Value(value) => out.push_str(&self.render_value(value, query)),
        }
        out.push_str("</td></tr>");
        out
    }

    fn render_tag(&self, tag: &TagLink) -> String {
        format!(
            "<a href=\"{}\" class=\"{}\"><span>{}</span>{}</a>",
            escape_html(&tag.target),
            with_match(format!("tag {}", self.classes.name("item-tag")), tag.is_match),
            escape_html(&tag.marker),
            escape_html(&tag.rest)
        )
    }

    fn render_value(&self, value: &FormattedValue, query: &SearchQuery) -> String {
        let inline = value.is_list;
        let mut out = format!(
            "<span class=\"{}\">",
            with_match(self.classes.name("meta-value"), value.is_match)
        );
        for fragment in &value.fragments {
            match fragment {
                RenderFragment::PlainText { text } => out.push_str(&escape_html(text)),
                RenderFragment::HighlightedText { text } => out.push_str(&format!(
                    "<span class=\"{}\">{}</span>",
                    SEARCH_MATCH_CLASS,
                    escape_html(text)
                )),
                RenderFragment::Markdown { source, .. } => {
                    out.push_str(&self.markdown.render(source, query, inline))
                }
                RenderFragment::Separator => {
                    out.push_str(&format!("<span>{}</span>", SEPARATOR))
                }
            }
        }
        out.push_str("</span>");
        out
    }
}

fn with_match(class: String, is_match: bool) -> String {
    if is_match {
        format!("{} {}", class, SEARCH_MATCH_CLASS)
    } else {
        class
    }
}

/// Escape text for HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
