//! Search module.
//!
//! Contains incremental substring search with highlight spans and the
//! suggestion box state that drives the search dropdown.

mod index;
mod suggest;

pub use index::{search, search_with_min_len, SearchMatch, MIN_QUERY_LEN};
pub use suggest::SuggestionBox;
