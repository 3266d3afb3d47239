//! Storefront client for Watchfront.
//!
//! Talks to the inventory service and keeps one shopper's session state:
//!
//! - **Service**: the [`InventoryService`] contract and its HTTP implementation,
//!   with every payload validated before it reaches the domain
//! - **Catalog**: a [`CatalogFetcher`] that loads the catalog once per mount
//! - **Cart**: a [`CartEngine`] that reconciles add-to-cart responses into the
//!   cart, coalescing duplicate clicks and dropping responses after close
//! - **Session**: [`StorefrontSession`], the owned state behind the listing,
//!   the search box and the add-to-cart buttons
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use watchfront_storefront::prelude::*;
//!
//! let config = StorefrontConfig::default();
//! let service = Arc::new(HttpInventoryService::new(&config));
//! let mut session = StorefrontSession::new(service, Arc::new(RecordingNavigator::new()), config);
//!
//! session.mount().await?;
//! let first = session.current_page().products().unwrap_or_default()[0].id.clone();
//! session.press_add_to_cart(&first).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod dtos;
pub mod engine;
pub mod error;
pub mod navigation;
pub mod service;
pub mod session;

#[cfg(test)]
mod mock;

pub use catalog::CatalogFetcher;
pub use config::StorefrontConfig;
pub use engine::{AddOutcome, CartEngine, LineState};
pub use error::{Result, StorefrontError};
pub use navigation::{Navigator, RecordingNavigator, Route};
pub use service::{HttpInventoryService, InventoryService};
pub use session::StorefrontSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AddOutcome, CartEngine, CatalogFetcher, HttpInventoryService, InventoryService, LineState,
        Navigator, RecordingNavigator, Route, StorefrontConfig, StorefrontError,
        StorefrontSession,
    };
    pub use watchfront_commerce::prelude::*;
}
