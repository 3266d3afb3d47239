//! The storefront session: one shopper's owned state.

use std::sync::Arc;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use watchfront_commerce::cart::{ButtonState, Cart};
use watchfront_commerce::catalog::{Catalog, CatalogState, Company, PageSlice, Paginator, Product};
use watchfront_commerce::search::{SearchMatch, SuggestionBox};
use watchfront_commerce::ProductId;

use crate::catalog::CatalogFetcher;
use crate::config::StorefrontConfig;
use crate::engine::{AddOutcome, CartEngine};
use crate::error::{Result, StorefrontError};
use crate::navigation::{Navigator, Route};
use crate::service::InventoryService;

/// Everything one storefront session owns.
///
/// The catalog, the page cursor, the search box and the cart live here and are
/// changed only through these methods. Dropping or closing the session cancels
/// its token, so add-to-cart responses that arrive afterwards are discarded.
pub struct StorefrontSession<S: ?Sized> {
    config: StorefrontConfig,
    fetcher: CatalogFetcher<S>,
    paginator: Paginator,
    search: SuggestionBox,
    engine: CartEngine<S>,
    navigator: Arc<dyn Navigator>,
    cancel: CancellationToken,
}

impl<S: InventoryService + ?Sized> StorefrontSession<S> {
    /// Create an unmounted session.
    pub fn new(service: Arc<S>, navigator: Arc<dyn Navigator>, config: StorefrontConfig) -> Self {
        let cancel = CancellationToken::new();
        Self {
            fetcher: CatalogFetcher::new(service.clone()),
            paginator: Paginator::new(config.page_size),
            search: SuggestionBox::with_min_query_len(config.min_query_len),
            engine: CartEngine::with_token(service, cancel.child_token()),
            navigator,
            cancel,
            config,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Load the catalog. Issues at most one product request per session.
    pub async fn mount(&mut self) -> Result<&Catalog> {
        self.fetcher.load().await
    }

    /// Fetch the catalog again and go back to page 1.
    pub async fn refresh(&mut self) -> Result<&Catalog> {
        self.paginator.reset();
        self.fetcher.reload().await
    }

    /// Catalog load state.
    pub fn catalog_state(&self) -> &CatalogState {
        self.fetcher.state()
    }

    /// Look up a catalog product.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.fetcher.catalog()?.get(product_id)
    }

    // --- Pagination ---

    /// Products on the current page.
    pub fn current_page(&self) -> PageSlice<'_> {
        self.paginator.current_slice(self.fetcher.state())
    }

    /// Current page number (1-indexed).
    pub fn page_index(&self) -> usize {
        self.paginator.page_index()
    }

    /// Total pages, once loaded.
    pub fn page_count(&self) -> Option<usize> {
        self.fetcher.catalog().map(|c| self.paginator.page_count(c))
    }

    /// Whether "Previous" is enabled.
    pub fn can_go_prev(&self) -> bool {
        self.paginator.can_go_prev()
    }

    /// Whether "Next" is enabled.
    pub fn can_go_next(&self) -> bool {
        self.paginator.can_go_next(self.fetcher.state())
    }

    /// Press "Next". Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        self.paginator.next_page(self.fetcher.state())
    }

    /// Press "Previous". Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev_page()
    }

    // --- Search ---

    /// Current search text.
    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// A keystroke in the search box.
    pub fn type_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    /// The search box's "Clear" button.
    pub fn clear_query(&mut self) {
        self.search.clear();
    }

    /// Dropdown entries for the current query. Empty until the catalog loads.
    pub fn suggestions(&self) -> Vec<SearchMatch<'_>> {
        match self.fetcher.catalog() {
            Some(catalog) => self.search.suggestions(catalog.products()),
            None => Vec::new(),
        }
    }

    /// Click the `index`th suggestion.
    pub fn select_suggestion(&mut self, index: usize) -> Option<ProductId> {
        let catalog = self.fetcher.catalog()?;
        let product = self.search.suggestions(catalog.products()).get(index)?.product;
        let target = self.search.select(product);
        self.navigate(Route::ProductDetail(target.clone()));
        Some(target)
    }

    /// Press Enter in the search box.
    pub fn submit_query(&mut self) -> Option<ProductId> {
        let catalog = self.fetcher.catalog()?;
        let target = self.search.submit(catalog.products())?;
        self.navigate(Route::ProductDetail(target.clone()));
        Some(target)
    }

    /// Open a product's detail view.
    pub fn open_product(&self, product_id: &ProductId) -> Route {
        let route = Route::ProductDetail(product_id.clone());
        self.navigate(route.clone());
        route
    }

    fn navigate(&self, route: Route) {
        debug!(path = %route, "requesting navigation");
        self.navigator.navigate(route);
    }

    // --- Cart ---

    /// Button state for a catalog product.
    pub fn button_state(&self, product_id: &ProductId) -> Option<ButtonState> {
        self.product(product_id)
            .map(|product| self.engine.button_state(product))
    }

    /// Click "Add to Cart" on a catalog product.
    ///
    /// A disabled button returns [`AddOutcome::Blocked`] without a request.
    pub async fn press_add_to_cart(&self, product_id: &ProductId) -> Result<AddOutcome> {
        let product = self.product(product_id).ok_or_else(|| {
            StorefrontError::cart_update(product_id.as_str(), "product is not in the catalog")
        })?;
        let state = self.engine.button_state(product);
        if state.is_disabled() {
            debug!(product_id = %product_id, state = state.label(), "button disabled");
            return Ok(AddOutcome::Blocked(state));
        }
        self.engine.add_product(product).await
    }

    /// Click "Add to Cart" on several products without waiting between clicks.
    ///
    /// Results come back in input order. Repeated ids coalesce.
    pub async fn press_all(&self, product_ids: &[ProductId]) -> Vec<Result<AddOutcome>> {
        join_all(product_ids.iter().map(|id| self.press_add_to_cart(id))).await
    }

    /// A snapshot of the cart.
    pub fn cart(&self) -> Cart {
        self.engine.cart()
    }

    /// The reconciliation engine.
    pub fn engine(&self) -> &CartEngine<S> {
        &self.engine
    }

    /// Brand listing.
    pub async fn companies(&self) -> Result<Vec<Company>> {
        self.fetcher.fetch_companies().await
    }

    /// End the session. Pending add-to-cart responses are dropped.
    pub fn close(&self) {
        if !self.cancel.is_cancelled() {
            info!("closing storefront session");
        }
        self.cancel.cancel();
    }

    /// Check if the session was closed.
    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<S: ?Sized> Drop for StorefrontSession<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
