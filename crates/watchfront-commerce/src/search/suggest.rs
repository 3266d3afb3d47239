//! Search-box suggestion state.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::search::index::{search_with_min_len, SearchMatch, MIN_QUERY_LEN};

/// State behind the search input and its suggestion dropdown.
///
/// Picking a suggestion empties the query and hides the dropdown until the
/// user types again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionBox {
    query: String,
    hide: bool,
    min_query_len: usize,
}

impl SuggestionBox {
    /// Create an empty suggestion box.
    pub fn new() -> Self {
        Self::with_min_query_len(MIN_QUERY_LEN)
    }

    /// Create an empty suggestion box with a custom minimum query length.
    pub fn with_min_query_len(min_query_len: usize) -> Self {
        Self {
            query: String::new(),
            hide: false,
            min_query_len,
        }
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the dropdown is suppressed after a selection.
    pub fn is_hidden(&self) -> bool {
        self.hide
    }

    /// Replace the query on a keystroke. Re-opens the dropdown.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.hide = false;
        self.query = query.into();
    }

    /// Empty the query (the "Clear" button).
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Suggestions to render for the current query.
    pub fn suggestions<'a>(&self, products: &'a [Product]) -> Vec<SearchMatch<'a>> {
        if self.hide {
            return Vec::new();
        }
        search_with_min_len(products, &self.query, self.min_query_len)
    }

    /// Pick a product. Returns the navigation target.
    pub fn select(&mut self, product: &Product) -> ProductId {
        self.query.clear();
        self.hide = true;
        product.id.clone()
    }

    /// Enter key: pick the first suggestion, if any.
    pub fn submit(&mut self, products: &[Product]) -> Option<ProductId> {
        let first = self.suggestions(products).first().map(|m| m.product)?;
        Some(self.select(first))
    }
}

impl Default for SuggestionBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn products() -> Vec<Product> {
        vec![
            Product::new(ProductId::new("1"), "Rolex Submariner", Money::new(1_250_000, Currency::USD), 2),
            Product::new(ProductId::new("2"), "Rolex Datejust", Money::new(950_000, Currency::USD), 1),
            Product::new(ProductId::new("3"), "Timex Weekender", Money::new(4_999, Currency::USD), 9),
        ]
    }

    #[test]
    fn test_typing_opens_suggestions() {
        let products = products();
        let mut search_box = SuggestionBox::new();

        search_box.set_query("r");
        assert!(search_box.suggestions(&products).is_empty());

        search_box.set_query("ro");
        assert_eq!(search_box.suggestions(&products).len(), 2);
    }

    #[test]
    fn test_select_hides_until_next_keystroke() {
        let products = products();
        let mut search_box = SuggestionBox::new();
        search_box.set_query("rolex");

        let target = search_box.select(&products[1]);
        assert_eq!(target, ProductId::new("2"));
        assert_eq!(search_box.query(), "");
        assert!(search_box.is_hidden());

        // Even a matching query stays hidden until typing resumes through set_query.
        assert!(search_box.suggestions(&products).is_empty());

        search_box.set_query("timex");
        assert!(!search_box.is_hidden());
        assert_eq!(search_box.suggestions(&products).len(), 1);
    }

    #[test]
    fn test_submit_picks_first_suggestion() {
        let products = products();
        let mut search_box = SuggestionBox::new();

        search_box.set_query("ROLEX");
        assert_eq!(search_box.submit(&products), Some(ProductId::new("1")));
        assert!(search_box.is_hidden());

        search_box.set_query("nothing like this");
        assert_eq!(search_box.submit(&products), None);
        assert!(!search_box.is_hidden());
    }

    #[test]
    fn test_clear_keeps_visibility() {
        let mut search_box = SuggestionBox::new();
        search_box.set_query("weekender");
        search_box.clear();
        assert_eq!(search_box.query(), "");
        assert!(!search_box.is_hidden());
    }
}
