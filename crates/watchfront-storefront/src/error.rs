//! Storefront error types.

use thiserror::Error;
use watchfront_commerce::CommerceError;

/// Errors surfaced by the storefront client.
///
/// None of these are fatal; every failure leaves local state unchanged so the
/// shopper can retry the action.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The product fetch failed or returned malformed data.
    #[error("Catalog load failed: {0}")]
    CatalogLoadFailure(String),

    /// The add-to-cart request failed or returned malformed data.
    #[error("Cart update failed for product {product_id}: {reason}")]
    CartUpdateFailure {
        /// Product the click was for.
        product_id: String,
        /// What went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A domain contract violation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl StorefrontError {
    /// Wrap a fetch error raised while loading the catalog.
    pub fn catalog(err: impl std::fmt::Display) -> Self {
        StorefrontError::CatalogLoadFailure(err.to_string())
    }

    /// Wrap a fetch or validation error raised by an add-to-cart call.
    pub fn cart_update(product_id: impl Into<String>, err: impl std::fmt::Display) -> Self {
        StorefrontError::CartUpdateFailure {
            product_id: product_id.into(),
            reason: err.to_string(),
        }
    }
}

/// Result type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = StorefrontError::cart_update("6543", "connection refused");
        assert_eq!(
            err.to_string(),
            "Cart update failed for product 6543: connection refused"
        );

        let err: StorefrontError = CommerceError::ItemNotInCart("p1".into()).into();
        assert_eq!(err.to_string(), "Item not in cart: p1");
    }
}
