//! Value formatting: decide how each metadata value is presented.
//!
//! For every scalar the formatter picks one of three renderings:
//!
//! 1. **Markdown**: link references (as `[[path]]`) and values of markdown fields
//!    go to the markdown renderer, which does its own match highlighting
//! 2. **Highlighted**: list elements matching the search query
//! 3. **Plain**: everything else
//!
//! List values yield one fragment per element with a [`RenderFragment::Separator`]
//! between neighbours, so `n` elements produce `2n - 1` fragments.
//!
//! Scalar values never produce a highlighted fragment. Their match state is
//! reported on the container ([`FormattedValue::is_match`]) instead, and only
//! when the value renders as plain text, so markdown output (including links)
//! is not marked twice.

use crate::data::entry::FieldEntry;
use crate::data::value::{FieldValue, ScalarValue};
use crate::query::search::SearchQuery;

use super::fragment::{FormattedValue, RenderFragment};

/// Format one field's value against the active query.
pub fn format_value(entry: &FieldEntry, query: &SearchQuery) -> FormattedValue {
    match &entry.value {
        FieldValue::List(values) => format_list(values, entry.contains_markdown, query),
        FieldValue::Scalar(value) => format_scalar(value, entry.contains_markdown, query),
    }
}

fn format_list(values: &[ScalarValue], contains_markdown: bool, query: &SearchQuery) -> FormattedValue {
    let mut fragments = Vec::with_capacity((values.len() * 2).saturating_sub(1));

    for (i, value) in values.iter().enumerate() {
        let text = value.to_string();
        let fragment = match markdown_fragment(value, &text, contains_markdown) {
            Some(markdown) => markdown,
            None if query.matches(&text) => RenderFragment::highlighted(text),
            None => RenderFragment::plain(text),
        };
        fragments.push(fragment);

        if i + 1 < values.len() {
            fragments.push(RenderFragment::Separator);
        }
    }

    FormattedValue {
        fragments,
        is_match: false,
        is_list: true,
    }
}

fn format_scalar(value: &ScalarValue, contains_markdown: bool, query: &SearchQuery) -> FormattedValue {
    let text = value.to_string();
    // Markdown output (links included) highlights itself; only plain text marks the container.
    let (fragment, is_match) = match markdown_fragment(value, &text, contains_markdown) {
        Some(markdown) => (markdown, false),
        None => {
            let is_match = query.matches(&text);
            (RenderFragment::plain(text), is_match)
        }
    };

    FormattedValue {
        fragments: vec![fragment],
        is_match,
        is_list: false,
    }
}

/// The markdown rendering of `value`, if it gets one.
fn markdown_fragment(value: &ScalarValue, text: &str, contains_markdown: bool) -> Option<RenderFragment> {
    match value {
        ScalarValue::Link(link) => Some(RenderFragment::markdown(link.to_markdown(), true)),
        _ if contains_markdown => Some(RenderFragment::markdown(text, false)),
        _ => None,
    }
}
