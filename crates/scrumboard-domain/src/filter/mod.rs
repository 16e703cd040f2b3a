//! Card filtering functionality.
//!
//! Filters narrow the flattened card view for display; they never change
//! the board itself.

pub mod card_filter;

pub use card_filter::{CardFilter, CompositeFilter, ListFilter, TagFilter, TitleFilter};
