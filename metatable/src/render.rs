//! Output rendering for the CLI: themed terminal table, JSON, and HTML.

use console::Style;
use metatablelib::{
    CellContent, ClassNamer, EscapedMarkdown, FormattedValue, HtmlRenderer, MetadataTable,
    RenderFragment, RowDescriptor, SearchQuery, TagLink,
};
use minijinja::Environment;
use serde::Serialize;

/// Include template at compile time
const METADATA_TABLE_TEMPLATE: &str = include_str!("../templates/metadata_table.jinja");

/// Labels longer than this are truncated in the terminal table
const MAX_LABEL_WIDTH: usize = 24;

/// How terminal output is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Style when the terminal supports it
    Auto,
    /// Plain text, no escape codes
    Text,
}

/// Row data for template rendering (pre-formatted and styled)
#[derive(Debug, Serialize)]
struct TemplateRow {
    /// Pre-padded, styled label (empty when the row spans)
    label: String,
    /// Styled value text
    value: String,
    /// Whether the value takes the whole line
    spans: bool,
}

/// Data context for the metadata table template
#[derive(Debug, Serialize)]
struct MetadataTableContext {
    rows: Vec<TemplateRow>,
}

/// Styles for each part of the table.
///
/// Styles wrap text that is already split into fragments, so user text is
/// never read as markup.
struct Theme {
    enabled: bool,
    label: Style,
    matched: Style,
    link: Style,
    tag: Style,
    marker: Style,
}

impl Theme {
    fn new(output_mode: OutputMode) -> Self {
        Self {
            enabled: output_mode == OutputMode::Auto,
            label: Style::new().bold(),
            matched: Style::new().black().on_yellow(),
            link: Style::new().cyan().underlined(),
            tag: Style::new().magenta(),
            marker: Style::new().magenta().dim(),
        }
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if self.enabled {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Truncate a label to fit within max_len, adding ".." suffix if needed
fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() > max_len {
        let kept: String = label.chars().take(max_len - 2).collect();
        format!("{}..", kept)
    } else {
        label.to_string()
    }
}

/// Style a formatted value: matches highlighted, links underlined.
fn format_value_text(value: &FormattedValue, theme: &Theme) -> String {
    let body: String = value
        .fragments
        .iter()
        .map(|fragment| match fragment {
            RenderFragment::PlainText { text } => text.clone(),
            RenderFragment::HighlightedText { text } => theme.paint(&theme.matched, text),
            RenderFragment::Markdown { source, is_link } => {
                if *is_link {
                    let path = source.trim_start_matches("[[").trim_end_matches("]]");
                    theme.paint(&theme.link, path)
                } else {
                    source.clone()
                }
            }
            RenderFragment::Separator => fragment.text().to_string(),
        })
        .collect();

    if value.is_match {
        theme.paint(&theme.matched, &body)
    } else {
        body
    }
}

fn format_tags_text(tags: &[TagLink], theme: &Theme) -> String {
    tags.iter()
        .map(|tag| {
            if tag.is_match {
                theme.paint(&theme.matched, &tag.text())
            } else {
                let marker = theme.paint(&theme.marker, &tag.marker);
                format!("{}{}", marker, theme.paint(&theme.tag, &tag.rest))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_template_row(row: &RowDescriptor, label_width: usize, theme: &Theme) -> TemplateRow {
    let value = match &row.value.content {
        CellContent::Value(value) => format_value_text(value, theme),
        CellContent::Tags { tags } => format_tags_text(tags, theme),
    };

    match &row.label {
        Some(label) => {
            let text = truncate_label(&label.text, label_width);
            let padding = " ".repeat(label_width - text.chars().count());
            let style = if label.is_match { &theme.matched } else { &theme.label };
            TemplateRow {
                label: format!("{}{}", theme.paint(style, &text), padding),
                value,
                spans: false,
            }
        }
        None => TemplateRow {
            label: String::new(),
            value,
            spans: true,
        },
    }
}

/// Render a metadata table for the terminal
pub fn render_table(table: &MetadataTable, output_mode: OutputMode) -> Result<String, minijinja::Error> {
    let theme = Theme::new(output_mode);
    let label_width = table
        .rows
        .iter()
        .filter_map(|row| row.label.as_ref())
        .map(|label| label.text.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);

    let context = MetadataTableContext {
        rows: table
            .rows
            .iter()
            .map(|row| to_template_row(row, label_width, &theme))
            .collect(),
    };

    let mut env = Environment::new();
    env.add_template("metadata_table", METADATA_TABLE_TEMPLATE)?;
    env.get_template("metadata_table")?.render(&context)
}

/// Render a metadata table as pretty JSON
pub fn render_json(table: &MetadataTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}

/// Render a metadata table as HTML with namespaced class names
pub fn render_html(table: &MetadataTable, query: &SearchQuery, class_prefix: &str) -> String {
    let markdown = EscapedMarkdown;
    HtmlRenderer::new(&markdown, ClassNamer::new(class_prefix)).render(table, query)
}
