//! Membership query and add-to-cart button state.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// True iff some cart line is for `product_id`.
pub fn is_in_cart(cart: &Cart, product_id: &ProductId) -> bool {
    cart.contains(product_id)
}

/// State of a product's add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonState {
    /// No stock; disabled even before the first click.
    OutOfStock,
    /// Already has a confirmed line; disabled.
    AddedToCart,
    /// Clickable.
    AddToCart,
}

impl ButtonState {
    /// Decide the button state for a product.
    ///
    /// Out of stock wins the label; either condition disables the button.
    pub fn for_product(product: &Product, cart: &Cart) -> Self {
        if product.is_out_of_stock() {
            ButtonState::OutOfStock
        } else if is_in_cart(cart, &product.id) {
            ButtonState::AddedToCart
        } else {
            ButtonState::AddToCart
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::OutOfStock => "Out of Stock",
            ButtonState::AddedToCart => "Added to Cart",
            ButtonState::AddToCart => "Add to Cart",
        }
    }

    /// Whether the button ignores clicks.
    pub fn is_disabled(&self) -> bool {
        !matches!(self, ButtonState::AddToCart)
    }
}
