//! Options controlling a render pass.

use super::search::SearchQuery;

/// Options for rendering an item's metadata table.
///
/// ```rust,ignore
/// let options = ViewOptions::new().query("jane");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Active search query
    pub query: SearchQuery,
    /// Whether the host's settings view is open (hides the table)
    pub settings_visible: bool,
}

impl ViewOptions {
    /// No query, settings closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the search query (empty text clears it)
    pub fn query(mut self, query: impl Into<SearchQuery>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder: set whether the settings view is open
    pub fn settings_visible(mut self, visible: bool) -> Self {
        self.settings_visible = visible;
        self
    }
}
