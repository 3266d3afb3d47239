//! Storefront domain types and logic for Watchfront.
//!
//! This crate holds the I/O-free half of the storefront client:
//!
//! - **Catalog**: Products, brands, the loaded catalog and its paginator
//! - **Search**: Case-insensitive substring search with highlight spans, the suggestion box
//! - **Cart**: Server-confirmed cart lines, the cart reducer, membership and button state
//!
//! # Example
//!
//! ```rust
//! use watchfront_commerce::prelude::*;
//!
//! let catalog = Catalog::new(vec![Product::new(
//!     ProductId::new("6543"),
//!     "Rolex Submariner",
//!     Money::new(1_250_000, Currency::USD),
//!     3,
//! )]);
//!
//! let matches = search(catalog.products(), "rolex");
//! assert_eq!(matches[0].highlighted(), "Rolex");
//!
//! let mut cart = Cart::new();
//! cart.reconcile(CartLine::new(ProductId::new("6543"), 1)).unwrap();
//! assert!(is_in_cart(&cart, &ProductId::new("6543")));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogState, Company, PageSlice, Paginator, Product, DEFAULT_PAGE_SIZE,
    };

    // Cart
    pub use crate::cart::{is_in_cart, ButtonState, Cart, CartAction, CartLine, Transition};

    // Search
    pub use crate::search::{search, SearchMatch, SuggestionBox, MIN_QUERY_LEN};
}
