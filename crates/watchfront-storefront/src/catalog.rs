//! Catalog fetcher.

use std::sync::Arc;

use tracing::{info, warn};
use watchfront_commerce::catalog::{Catalog, CatalogState, Company};

use crate::error::{Result, StorefrontError};
use crate::service::InventoryService;

/// Loads the product catalog once and holds it for the session.
pub struct CatalogFetcher<S: ?Sized> {
    service: Arc<S>,
    state: CatalogState,
}

impl<S: InventoryService + ?Sized> CatalogFetcher<S> {
    /// Create a fetcher in the unloaded state.
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            state: CatalogState::Unloaded,
        }
    }

    /// Load the catalog if it is not loaded yet.
    ///
    /// A loaded catalog is returned without another request. On failure the
    /// state stays [`CatalogState::Unloaded`].
    pub async fn load(&mut self) -> Result<&Catalog> {
        if !self.state.is_loaded() {
            self.fetch().await?;
        }
        self.loaded()
    }

    /// Discard the current catalog and fetch a fresh one.
    pub async fn reload(&mut self) -> Result<&Catalog> {
        self.state = CatalogState::Unloaded;
        self.fetch().await?;
        self.loaded()
    }

    /// Current load state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// The catalog, if loaded.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.state.catalog()
    }

    /// List brands. Not cached.
    pub async fn fetch_companies(&self) -> Result<Vec<Company>> {
        self.service.fetch_companies().await
    }

    async fn fetch(&mut self) -> Result<()> {
        info!("loading catalog");
        match self.service.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                self.state = CatalogState::Loaded(Catalog::new(products));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                Err(e)
            }
        }
    }

    fn loaded(&self) -> Result<&Catalog> {
        self.state
            .catalog()
            .ok_or_else(|| StorefrontError::CatalogLoadFailure("catalog not loaded".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{watches, MockInventory};

    #[tokio::test]
    async fn test_load_once_per_mount() {
        let service = MockInventory::new(watches(3));
        let mut fetcher = CatalogFetcher::new(service.clone());
        assert!(!fetcher.state().is_loaded());

        assert_eq!(fetcher.load().await.unwrap().len(), 3);
        assert_eq!(fetcher.load().await.unwrap().len(), 3);
        assert_eq!(service.product_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_stays_unloaded() {
        let service = MockInventory::new(watches(3));
        service.fail_products(true);
        let mut fetcher = CatalogFetcher::new(service.clone());

        let err = fetcher.load().await.unwrap_err();
        assert!(matches!(err, StorefrontError::CatalogLoadFailure(_)));
        assert_eq!(fetcher.state(), &CatalogState::Unloaded);

        service.fail_products(false);
        assert_eq!(fetcher.load().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_reload_replaces_catalog() {
        let service = MockInventory::new(watches(2));
        let mut fetcher = CatalogFetcher::new(service.clone());
        fetcher.load().await.unwrap();

        service.fail_products(true);
        assert!(fetcher.reload().await.is_err());
        assert!(fetcher.catalog().is_none());

        service.fail_products(false);
        fetcher.reload().await.unwrap();
        assert_eq!(service.product_calls(), 3);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_loaded() {
        let mut fetcher = CatalogFetcher::new(MockInventory::new(Vec::new()));
        assert!(fetcher.load().await.unwrap().is_empty());
        assert!(fetcher.state().is_loaded());
    }
}
