//! Tag-list rendering for the reserved `tags` field.

use serde::{Deserialize, Serialize};

use crate::data::value::FieldValue;
use crate::query::search::SearchQuery;

/// Field key whose value is always rendered as a tag list.
pub const TAGS_KEY: &str = "tags";

/// One rendered tag: a link to the tag's own text.
///
/// The first character (usually `#`) is split off into `marker` for
/// presentation only; `target` and matching use the whole tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagLink {
    /// Link target (the raw tag)
    pub target: String,
    /// First character of the tag
    pub marker: String,
    /// Tag text after the first character
    pub rest: String,
    pub is_match: bool,
}

impl TagLink {
    pub fn new(tag: &str, query: &SearchQuery) -> Self {
        let split = tag.chars().next().map_or(0, char::len_utf8);
        let (marker, rest) = tag.split_at(split);
        Self {
            target: tag.to_string(),
            marker: marker.to_string(),
            rest: rest.to_string(),
            is_match: query.matches(tag),
        }
    }

    /// Display text, identical to the tag.
    pub fn text(&self) -> String {
        format!("{}{}", self.marker, self.rest)
    }
}

/// Render a tag field's value. A scalar is treated as a single tag.
pub fn render_tags(value: &FieldValue, query: &SearchQuery) -> Vec<TagLink> {
    value
        .as_slice()
        .iter()
        .map(|tag| TagLink::new(&tag.to_string(), query))
        .collect()
}
