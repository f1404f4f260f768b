//! The item-level gate around the metadata table.

use crate::data::metadata::Metadata;
use crate::query::options::ViewOptions;

use super::table::MetadataTable;

/// Build the metadata table for an item, or nothing when it should not show.
///
/// Returns `None` while the settings view is open or when the item carries
/// no metadata. A present but empty mapping still yields an (empty) table.
pub fn item_metadata(metadata: Option<&Metadata>, options: &ViewOptions) -> Option<MetadataTable> {
    if options.settings_visible {
        tracing::trace!("settings visible, skipping metadata table");
        return None;
    }
    let metadata = metadata?;
    Some(MetadataTable::build(Some(metadata), &options.query))
}
