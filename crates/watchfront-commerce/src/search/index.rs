//! Case-insensitive substring search over product names.

use crate::catalog::Product;

/// Queries shorter than this (in characters) match nothing.
pub const MIN_QUERY_LEN: usize = 2;

/// A product whose name contains the query.
///
/// `match_start..match_end` is a byte range into `product.name` covering the
/// first occurrence of the query, compared case-insensitively. Both ends sit on
/// char boundaries, so the three halves always reassemble the name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchMatch<'a> {
    /// The matching product.
    pub product: &'a Product,
    /// Start of the highlighted span.
    pub match_start: usize,
    /// End of the highlighted span (exclusive).
    pub match_end: usize,
}

impl<'a> SearchMatch<'a> {
    /// Name text before the highlight.
    pub fn first_half(&self) -> &'a str {
        &self.product.name[..self.match_start]
    }

    /// The matched text, in the name's original case.
    pub fn highlighted(&self) -> &'a str {
        &self.product.name[self.match_start..self.match_end]
    }

    /// Name text after the highlight.
    pub fn second_half(&self) -> &'a str {
        &self.product.name[self.match_end..]
    }
}

/// Filter `products` to those whose name contains `query`, ignoring case.
///
/// Returns nothing for queries shorter than [`MIN_QUERY_LEN`]. Results keep
/// catalog order.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<SearchMatch<'a>> {
    search_with_min_len(products, query, MIN_QUERY_LEN)
}

/// [`search`] with a configurable minimum query length.
pub fn search_with_min_len<'a>(
    products: &'a [Product],
    query: &str,
    min_len: usize,
) -> Vec<SearchMatch<'a>> {
    if query.chars().count() < min_len.max(1) {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    products
        .iter()
        .filter_map(|product| {
            find_ignore_case(&product.name, &needle).map(|(match_start, match_end)| SearchMatch {
                product,
                match_start,
                match_end,
            })
        })
        .collect()
}

/// Byte range of the first occurrence of `needle` (already lowercased) in
/// `haystack`, comparing lowercased chars.
fn find_ignore_case(haystack: &str, needle: &[char]) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    'start: for (start, _) in haystack.char_indices() {
        let mut matched = 0;
        for (offset, ch) in haystack[start..].char_indices() {
            for lower in ch.to_lowercase() {
                if needle.get(matched) != Some(&lower) {
                    continue 'start;
                }
                matched += 1;
            }
            if matched == needle.len() {
                return Some((start, start + offset + ch.len_utf8()));
            }
        }
        // Ran out of haystack mid-needle; later starts are shorter still.
        return None;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn catalog(names: &[&str]) -> Vec<Product> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Product::new(
                    ProductId::new(i.to_string()),
                    *name,
                    Money::new(1000, Currency::USD),
                    1,
                )
            })
            .collect()
    }

    #[test]
    fn test_rolex_highlight() {
        let products = catalog(&["Rolex Submariner", "Casio G-Shock"]);
        let matches = search(&products, "rolex");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_start, 0);
        assert_eq!(matches[0].match_end, 5);
        assert_eq!(matches[0].highlighted(), "Rolex");
        assert_eq!(matches[0].second_half(), " Submariner");
    }

    #[test]
    fn test_short_queries_match_nothing() {
        let products = catalog(&["Rolex Submariner", "Apple Watch"]);
        assert!(search(&products, "").is_empty());
        assert!(search(&products, "a").is_empty());
        assert!(search(&products, "R").is_empty());
        assert_eq!(search(&products, "ap").len(), 1);
    }

    #[test]
    fn test_first_occurrence_only() {
        let products = catalog(&["Band for band lovers"]);
        let matches = search(&products, "BAND");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_start, 0);
        assert_eq!(matches[0].highlighted(), "Band");
    }

    #[test]
    fn test_halves_reassemble_name() {
        let products = catalog(&[
            "Garmin Vivoactive 3 GPS Smartwatch",
            "Polar M430 GPS Running Watch",
            "Fitbit Charge 2",
        ]);
        for query in ["gps", "watch", "Char", "ar"] {
            for m in search(&products, query) {
                let name = &m.product.name;
                assert_eq!(
                    format!("{}{}{}", m.first_half(), m.highlighted(), m.second_half()),
                    *name
                );
                assert_eq!(m.match_end - m.match_start, query.len());
                assert!(name.to_lowercase()[m.match_start..].starts_with(&query.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let products = catalog(&["Zeta Watch", "Alpha Watch", "Beta Band"]);
        let names: Vec<&str> = search(&products, "watch")
            .iter()
            .map(|m| m.product.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta Watch", "Alpha Watch"]);
    }

    #[test]
    fn test_non_ascii_names_stay_on_char_boundaries() {
        let products = catalog(&["Montre Élégante", "Uhr ÖKO"]);

        let matches = search(&products, "élé");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].highlighted(), "Élé");

        let matches = search(&products, "öko");
        assert_eq!(matches[0].highlighted(), "ÖKO");
        assert_eq!(matches[0].first_half(), "Uhr ");
    }

    #[test]
    fn test_configurable_min_len() {
        let products = catalog(&["Omega Seamaster"]);
        assert!(search_with_min_len(&products, "om", 3).is_empty());
        assert_eq!(search_with_min_len(&products, "o", 1).len(), 1);
        assert!(search_with_min_len(&products, "", 0).is_empty());
    }
}
