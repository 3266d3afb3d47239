//! In-memory inventory service for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use watchfront_commerce::cart::CartLine;
use watchfront_commerce::catalog::{Company, Product};
use watchfront_commerce::{Currency, Money, ProductId};

use crate::error::{Result, StorefrontError};
use crate::service::InventoryService;

/// Increments a per-product counter on every add, like the real service.
///
/// With `hold()` engaged, add-to-cart calls park until `release()` so tests can
/// observe the in-flight window.
#[derive(Default)]
pub(crate) struct MockInventory {
    products: Vec<Product>,
    companies: Vec<Company>,
    quantities: Mutex<HashMap<ProductId, u32>>,
    add_calls: AtomicUsize,
    product_calls: AtomicUsize,
    fail_products: AtomicBool,
    fail_cart: AtomicBool,
    held: AtomicBool,
    gate: Notify,
}

impl MockInventory {
    pub(crate) fn new(products: Vec<Product>) -> Arc<Self> {
        Arc::new(Self {
            products,
            ..Self::default()
        })
    }

    pub(crate) fn with_companies(products: Vec<Product>, companies: Vec<Company>) -> Arc<Self> {
        Arc::new(Self {
            products,
            companies,
            ..Self::default()
        })
    }

    pub(crate) fn fail_products(&self, fail: bool) {
        self.fail_products.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_cart(&self, fail: bool) {
        self.fail_cart.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub(crate) fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.notify_waiters();
    }

    pub(crate) fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryService for MockInventory {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_products.load(Ordering::SeqCst) {
            return Err(StorefrontError::CatalogLoadFailure(
                "connection refused".to_string(),
            ));
        }
        Ok(self.products.clone())
    }

    async fn fetch_companies(&self) -> Result<Vec<Company>> {
        Ok(self.companies.clone())
    }

    async fn add_to_cart(&self, product_id: &ProductId) -> Result<CartLine> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        while self.held.load(Ordering::SeqCst) {
            let released = self.gate.notified();
            if !self.held.load(Ordering::SeqCst) {
                break;
            }
            released.await;
        }
        if self.fail_cart.load(Ordering::SeqCst) {
            return Err(StorefrontError::cart_update(
                product_id.as_str(),
                "connection reset",
            ));
        }
        let mut quantities = self
            .quantities
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let quantity = quantities.entry(product_id.clone()).or_insert(0);
        *quantity += 1;
        Ok(CartLine::new(product_id.clone(), *quantity))
    }
}

/// `count` in-stock watches with ids `"1"..=count`.
pub(crate) fn watches(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            Product::new(
                ProductId::new(i.to_string()),
                format!("Watch {}", i),
                Money::new(9_999, Currency::USD),
                5,
            )
        })
        .collect()
}
