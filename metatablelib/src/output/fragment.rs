//! Render fragments: the atomic units a value cell is made of.
//!
//! Fragments carry no markup vocabulary. A presentation layer maps each
//! kind to its own output (see [`markup`](super::markup) for HTML).

use serde::{Deserialize, Serialize};

/// Literal text placed between list elements.
pub const SEPARATOR: &str = ", ";

/// One piece of a formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderFragment {
    /// Text shown as-is
    PlainText { text: String },
    /// Text matching the active search query
    HighlightedText { text: String },
    /// Source handed to the markdown renderer, which highlights on its own
    Markdown { source: String, is_link: bool },
    /// The literal [`SEPARATOR`] between list elements
    Separator,
}

impl RenderFragment {
    pub fn plain(text: impl Into<String>) -> Self {
        RenderFragment::PlainText { text: text.into() }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        RenderFragment::HighlightedText { text: text.into() }
    }

    pub fn markdown(source: impl Into<String>, is_link: bool) -> Self {
        RenderFragment::Markdown {
            source: source.into(),
            is_link,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, RenderFragment::Separator)
    }

    /// The fragment's text, or its markdown source.
    pub fn text(&self) -> &str {
        match self {
            RenderFragment::PlainText { text } | RenderFragment::HighlightedText { text } => text,
            RenderFragment::Markdown { source, .. } => source,
            RenderFragment::Separator => SEPARATOR,
        }
    }
}

/// A field value broken into fragments.
///
/// `is_match` marks the enclosing container. Only scalar values set it; list
/// values carry their highlight state per fragment instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedValue {
    pub fragments: Vec<RenderFragment>,
    pub is_match: bool,
    /// Whether the value was a list
    pub is_list: bool,
}
