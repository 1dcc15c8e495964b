//! Query engine over the in-memory contact list.
//!
//! Substring search on name and phone, and stable column sorting for display.

pub mod query;
pub mod sort;

pub use query::{matches, search};
pub use sort::{sort, SortField};
