//! Product catalog module.
//!
//! Contains the product and brand types, the loaded catalog, and its paginator.

mod collection;
mod company;
mod paginator;
mod product;

pub use collection::{Catalog, CatalogState};
pub use company::Company;
pub use paginator::{PageSlice, Paginator, DEFAULT_PAGE_SIZE};
pub use product::Product;
