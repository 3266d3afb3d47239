//! Cart reconciliation engine.
//!
//! Turns add-to-cart clicks into server round trips and folds each confirmed
//! response into the cart. The server owns quantities: a confirmed line either
//! inserts a new cart line or overwrites the existing one, it is never summed.
//!
//! Two guards sit around every request:
//!
//! - a per-product in-flight set, so a second click on a product whose request
//!   is still pending is coalesced instead of issuing another request
//! - a cancellation token tied to the owning session, so responses arriving
//!   after the session closed are dropped without touching the cart

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dashmap::DashSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use watchfront_commerce::cart::{ButtonState, Cart, CartAction, CartLine, Transition};
use watchfront_commerce::catalog::Product;
use watchfront_commerce::ProductId;

use crate::error::Result;
use crate::service::InventoryService;

/// What a click on "Add to Cart" did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product had no line; the confirmed line was inserted.
    Added(CartLine),
    /// The product's line was overwritten with the confirmed quantity.
    Updated {
        /// The line after the update.
        line: CartLine,
        /// Quantity before the update.
        previous: u32,
    },
    /// A request for this product was already pending; no request was sent.
    Coalesced,
    /// The session closed before the response could be applied.
    Dropped,
    /// The button was disabled; no request was sent.
    Blocked(ButtonState),
}

impl AddOutcome {
    /// The confirmed line, if the click changed the cart.
    pub fn line(&self) -> Option<&CartLine> {
        match self {
            AddOutcome::Added(line) | AddOutcome::Updated { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Check if the cart changed.
    pub fn is_applied(&self) -> bool {
        self.line().is_some()
    }
}

impl From<Transition> for AddOutcome {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::Inserted(line) => AddOutcome::Added(line),
            Transition::Updated { line, previous } => AddOutcome::Updated { line, previous },
        }
    }
}

/// Per-product line state as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// No confirmed line and no pending request.
    Absent,
    /// A request is in flight.
    Pending,
    /// A confirmed line exists.
    Present,
}

/// Removes a product from the in-flight set when the request ends, however it ends.
struct InFlight<'a> {
    set: &'a DashSet<ProductId>,
    product_id: ProductId,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set.remove(&self.product_id);
    }
}

/// Owns the cart and serializes server confirmations into it.
pub struct CartEngine<S: ?Sized> {
    service: Arc<S>,
    cart: RwLock<Cart>,
    in_flight: DashSet<ProductId>,
    cancel: CancellationToken,
}

impl<S: InventoryService + ?Sized> CartEngine<S> {
    /// Create an engine with an empty cart and its own cancellation token.
    pub fn new(service: Arc<S>) -> Self {
        Self::with_token(service, CancellationToken::new())
    }

    /// Create an engine whose lifetime is bound to `cancel`.
    pub fn with_token(service: Arc<S>, cancel: CancellationToken) -> Self {
        Self {
            service,
            cart: RwLock::new(Cart::new()),
            in_flight: DashSet::new(),
            cancel,
        }
    }

    /// Click "Add to Cart" for a product known only by id.
    pub async fn add_to_cart(&self, product_id: &ProductId) -> Result<AddOutcome> {
        self.add(product_id, None).await
    }

    /// Click "Add to Cart" for a catalog product.
    ///
    /// Same as [`add_to_cart`](Self::add_to_cart), and additionally warns when
    /// the confirmed quantity exceeds the stock the catalog reported.
    pub async fn add_product(&self, product: &Product) -> Result<AddOutcome> {
        self.add(&product.id, Some(product.stock)).await
    }

    async fn add(&self, product_id: &ProductId, known_stock: Option<u32>) -> Result<AddOutcome> {
        if self.cancel.is_cancelled() {
            debug!(product_id = %product_id, "session closed, click ignored");
            return Ok(AddOutcome::Dropped);
        }
        if !self.in_flight.insert(product_id.clone()) {
            debug!(product_id = %product_id, "request already pending, click coalesced");
            return Ok(AddOutcome::Coalesced);
        }
        let _in_flight = InFlight {
            set: &self.in_flight,
            product_id: product_id.clone(),
        };

        debug!(product_id = %product_id, "issuing add-to-cart");
        let response = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            response = self.service.add_to_cart(product_id) => Some(response),
        };
        let Some(response) = response else {
            debug!(product_id = %product_id, "session closed while pending, response dropped");
            return Ok(AddOutcome::Dropped);
        };

        let line = match response {
            Ok(line) => line,
            Err(e) => {
                warn!(product_id = %product_id, error = %e, "add-to-cart failed, cart unchanged");
                return Err(e);
            }
        };

        if let Some(stock) = known_stock.filter(|stock| line.quantity > *stock) {
            warn!(
                product_id = %product_id,
                quantity = line.quantity,
                stock,
                "confirmed quantity exceeds catalog stock"
            );
        }

        let transition = self.reconcile(line)?;
        info!(
            product_id = %product_id,
            quantity = transition.line().quantity,
            "cart line confirmed"
        );
        Ok(transition.into())
    }

    /// Fold a server-confirmed line into the cart.
    pub fn reconcile(&self, confirmed: CartLine) -> Result<Transition> {
        let mut cart = self.write();
        let action = cart.action_for(confirmed);
        Ok(cart.dispatch(action)?)
    }

    /// Apply a cart action directly.
    ///
    /// Callers must only dispatch lines the inventory service confirmed.
    pub fn dispatch(&self, action: CartAction) -> Result<Transition> {
        Ok(self.write().dispatch(action)?)
    }

    /// A snapshot of the cart.
    pub fn cart(&self) -> Cart {
        self.read().clone()
    }

    /// True iff the product has a confirmed line.
    pub fn is_in_cart(&self, product_id: &ProductId) -> bool {
        self.read().contains(product_id)
    }

    /// The add-to-cart button state for a product.
    pub fn button_state(&self, product: &Product) -> ButtonState {
        ButtonState::for_product(product, &self.read())
    }

    /// Where a product's line currently stands.
    ///
    /// A pending request on an existing line reports `Pending`.
    pub fn line_state(&self, product_id: &ProductId) -> LineState {
        if self.in_flight.contains(product_id) {
            LineState::Pending
        } else if self.is_in_cart(product_id) {
            LineState::Present
        } else {
            LineState::Absent
        }
    }

    /// Number of requests currently in flight.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Cancel the engine's token. Pending and future responses are dropped.
    pub fn close(&self) {
        if !self.cancel.is_cancelled() {
            info!(pending = self.pending(), "closing cart engine");
        }
        self.cancel.cancel();
    }

    /// Check if the engine was closed.
    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn read(&self) -> RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(PoisonError::into_inner)
    }
}
