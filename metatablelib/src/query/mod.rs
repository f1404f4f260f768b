//! Search query and render options.
//!
//! - **Search**: case-insensitive matching that never matches on an empty query
//! - **Options**: per-pass configuration (`ViewOptions`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use metatablelib::query::{contains_ignore_case, SearchQuery};
//!
//! assert!(SearchQuery::new("jane").matches("Jane Doe"));
//! assert!(!contains_ignore_case("Jane Doe", Some("")));
//! ```

pub mod options;
pub mod search;

pub use options::ViewOptions;
pub use search::{contains_ignore_case, SearchQuery};
