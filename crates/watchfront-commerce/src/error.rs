//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// `ADD_ITEM` dispatched for a product that already has a line.
    #[error("Cart already has a line for product {0}")]
    DuplicateLine(String),

    /// `UPDATE_QUANTITY` dispatched for a product without a line.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Price text or number that cannot be represented as money.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
