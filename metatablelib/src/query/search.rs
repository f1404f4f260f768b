//! Case-insensitive search matching.
//!
//! An absent or empty query matches nothing. A naive substring test would
//! report every string as containing `""`, so both entry points guard that
//! case before comparing.

/// Case-insensitive substring test.
///
/// Returns `false` when `needle` is `None` or empty.
pub fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) if !needle.is_empty() => {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
        _ => false,
    }
}

/// The active search query, normalized once for repeated matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: Option<String>,
    needle: Option<String>,
}

impl SearchQuery {
    /// A query from user input. Empty input yields an inactive query.
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        if raw.is_empty() {
            return Self::none();
        }
        let needle = raw.to_lowercase();
        Self {
            raw: Some(raw),
            needle: Some(needle),
        }
    }

    /// The inactive query; matches nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from an optional query string.
    pub fn from_option(query: Option<&str>) -> Self {
        query.map_or_else(Self::none, Self::new)
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// The query text as the user typed it.
    pub fn as_str(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Whether `haystack` contains the query, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        match &self.needle {
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
            None => false,
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<Option<&str>> for SearchQuery {
    fn from(query: Option<&str>) -> Self {
        Self::from_option(query)
    }
}
