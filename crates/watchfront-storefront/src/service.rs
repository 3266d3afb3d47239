//! The inventory service contract and its HTTP implementation.

use async_trait::async_trait;
use tracing::debug;
use urlencoding::encode;
use watchfront_commerce::cart::CartLine;
use watchfront_commerce::catalog::{Company, Product};
use watchfront_commerce::ProductId;
use watchfront_data::FetchClient;

use crate::config::StorefrontConfig;
use crate::dtos::{products_from_wire, CartLineDto, CompanyDto, ProductDto};
use crate::error::{Result, StorefrontError};

/// The remote inventory and cart service.
///
/// Implementations validate every payload before returning it. Catalog calls
/// fail with [`StorefrontError::CatalogLoadFailure`]; cart calls fail with
/// [`StorefrontError::CartUpdateFailure`].
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Fetch the full product catalog in server order.
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Fetch the brand listing.
    async fn fetch_companies(&self) -> Result<Vec<Company>>;

    /// Add one unit of a product to the server-side cart and return the
    /// line's authoritative post-increment state.
    async fn add_to_cart(&self, product_id: &ProductId) -> Result<CartLine>;
}

/// [`InventoryService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpInventoryService {
    client: FetchClient,
}

impl HttpInventoryService {
    /// Create a service client from configuration.
    pub fn new(config: &StorefrontConfig) -> Self {
        let client = FetchClient::new()
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout())
            .with_default_header("Accept", "application/json");
        Self { client }
    }
}

#[async_trait]
impl InventoryService for HttpInventoryService {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let dtos: Vec<ProductDto> = self
            .client
            .get("/api/products")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| {
                debug!(transport = e.is_transport(), error = %e, "product listing request failed");
                StorefrontError::catalog(e)
            })?;
        let products = products_from_wire(dtos).map_err(StorefrontError::catalog)?;
        debug!(count = products.len(), "decoded product listing");
        Ok(products)
    }

    async fn fetch_companies(&self) -> Result<Vec<Company>> {
        let dtos: Vec<CompanyDto> = self
            .client
            .get("/api/companies")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(StorefrontError::catalog)?;
        Ok(dtos.into_iter().map(Company::from).collect())
    }

    async fn add_to_cart(&self, product_id: &ProductId) -> Result<CartLine> {
        let dto: CartLineDto = self
            .client
            .post(format!("/api/cart/{}", encode(product_id.as_str())))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| {
                debug!(
                    product_id = %product_id,
                    transport = e.is_transport(),
                    error = %e,
                    "cart request failed"
                );
                StorefrontError::cart_update(product_id.as_str(), e)
            })?;
        dto.into_line(product_id)
            .map_err(|e| StorefrontError::cart_update(product_id.as_str(), e))
    }
}
