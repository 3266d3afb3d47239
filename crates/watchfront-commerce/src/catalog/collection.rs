//! The loaded catalog.

use std::sync::Arc;

use crate::catalog::Product;
use crate::ids::ProductId;

/// The full, server-ordered product sequence for one session.
///
/// Order is exactly as returned by the inventory service and is never re-sorted.
/// Cloning is cheap; the product list is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Wrap a fetched product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// All products in server order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Whether the catalog has been loaded.
///
/// `Unloaded` drives a loading indicator; a loaded but empty catalog drives
/// an empty state. The two must never be conflated.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Not fetched yet, or the last fetch failed.
    #[default]
    Unloaded,
    /// Fetched successfully.
    Loaded(Catalog),
}

impl CatalogState {
    /// The catalog, if loaded.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loaded(catalog) => Some(catalog),
            CatalogState::Unloaded => None,
        }
    }

    /// Check if loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str) -> Product {
        Product::new(ProductId::new(id), format!("Watch {}", id), Money::new(1000, Currency::USD), 1)
    }

    #[test]
    fn test_preserves_server_order() {
        let catalog = Catalog::new(vec![product("b"), product("a"), product("c")]);
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![product("a"), product("b")]);
        assert_eq!(catalog.get(&ProductId::new("b")).map(|p| p.name.as_str()), Some("Watch b"));
        assert!(catalog.get(&ProductId::new("z")).is_none());
    }

    #[test]
    fn test_unloaded_differs_from_empty() {
        let unloaded = CatalogState::Unloaded;
        let empty = CatalogState::Loaded(Catalog::new(Vec::new()));
        assert!(!unloaded.is_loaded());
        assert!(empty.is_loaded());
        assert_ne!(unloaded, empty);
    }
}
