//! Input data: the metadata mapping and its values.
//!
//! This module holds what the front-matter extractor hands over:
//!
//! - **Values**: scalars, link references, and lists of them (`FieldValue`)
//! - **Entries**: one field record with its display flags (`FieldEntry`)
//! - **Metadata**: the ordered key → entry mapping, loadable from JSON or YAML
//!
//! ## Example
//!
//! ```rust,ignore
//! use metatablelib::data::{FieldEntry, Metadata};
//!
//! let metadata = Metadata::new()
//!     .field("author", FieldEntry::new("Jane Doe"))
//!     .field("summary", FieldEntry::new("**draft**").markdown(true));
//! ```

pub mod entry;
pub mod metadata;
pub mod value;

pub use entry::FieldEntry;
pub use metadata::Metadata;
pub use value::{FieldValue, LinkReference, ScalarValue};
