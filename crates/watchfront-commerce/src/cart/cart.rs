//! Cart, cart lines and the cart reducer.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product's confirmed quantity.
///
/// Serializes as the inventory service's `{ "_id", "quantity" }` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line is for.
    #[serde(rename = "_id")]
    pub product_id: ProductId,
    /// Quantity last confirmed by the inventory service. Always positive.
    pub quantity: u32,
}

impl CartLine {
    /// Create a new cart line.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// The two action shapes the cart accepts.
///
/// Serialized with a `type` tag (`ADD_ITEM` / `UPDATE_QUANTITY`) for UI layers
/// that exchange actions as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Insert a line for a product not yet in the cart.
    AddItem {
        /// The confirmed line.
        item: CartLine,
    },
    /// Overwrite the quantity of an existing line.
    UpdateQuantity {
        /// Product whose line is updated.
        #[serde(rename = "_id")]
        product_id: ProductId,
        /// New quantity, replacing (not added to) the old one.
        quantity: u32,
    },
}

/// What a successful dispatch did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new line was inserted.
    Inserted(CartLine),
    /// An existing line's quantity was overwritten.
    Updated {
        /// The line after the update.
        line: CartLine,
        /// The quantity before the update.
        previous: u32,
    },
}

impl Transition {
    /// The line as it now stands in the cart.
    pub fn line(&self) -> &CartLine {
        match self {
            Transition::Inserted(line) => line,
            Transition::Updated { line, .. } => line,
        }
    }
}

/// A shopping cart whose quantities mirror the inventory service.
///
/// At most one line exists per product. Lines are only ever changed through
/// [`dispatch`](Cart::dispatch); the client never increments on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action.
    ///
    /// Returns an error, leaving the cart unchanged, if:
    /// - The quantity is zero
    /// - `AddItem` targets a product that already has a line
    /// - `UpdateQuantity` targets a product without a line
    pub fn dispatch(&mut self, action: CartAction) -> Result<Transition, CommerceError> {
        match action {
            CartAction::AddItem { item } => {
                if item.quantity == 0 {
                    return Err(CommerceError::InvalidQuantity(0));
                }
                if self.contains(&item.product_id) {
                    return Err(CommerceError::DuplicateLine(item.product_id.into_inner()));
                }
                self.lines.push(item.clone());
                Ok(Transition::Inserted(item))
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                if quantity == 0 {
                    return Err(CommerceError::InvalidQuantity(0));
                }
                let line = self
                    .lines
                    .iter_mut()
                    .find(|l| l.product_id == product_id)
                    .ok_or_else(|| CommerceError::ItemNotInCart(product_id.to_string()))?;
                let previous = line.quantity;
                line.quantity = quantity;
                Ok(Transition::Updated {
                    line: line.clone(),
                    previous,
                })
            }
        }
    }

    /// The action that folds a server-confirmed line into this cart.
    pub fn action_for(&self, confirmed: CartLine) -> CartAction {
        if self.contains(&confirmed.product_id) {
            CartAction::UpdateQuantity {
                product_id: confirmed.product_id,
                quantity: confirmed.quantity,
            }
        } else {
            CartAction::AddItem { item: confirmed }
        }
    }

    /// Fold a server-confirmed line into the cart: insert if absent, overwrite if present.
    pub fn reconcile(&mut self, confirmed: CartLine) -> Result<Transition, CommerceError> {
        let action = self.action_for(confirmed);
        self.dispatch(action)
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if a product has a line.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.lines.iter().any(|l| &l.product_id == product_id)
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Confirmed quantity for a product (0 if absent).
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: &str) -> ProductId {
        ProductId::new(id)
    }

    #[test]
    fn test_first_confirmation_inserts() {
        let mut cart = Cart::new();
        let transition = cart.reconcile(CartLine::new(pid("p1"), 1)).unwrap();

        assert_eq!(transition, Transition::Inserted(CartLine::new(pid("p1"), 1)));
        assert_eq!(cart.lines(), &[CartLine::new(pid("p1"), 1)]);
    }

    #[test]
    fn test_second_confirmation_overwrites() {
        let mut cart = Cart::new();
        cart.reconcile(CartLine::new(pid("p1"), 1)).unwrap();
        let transition = cart.reconcile(CartLine::new(pid("p1"), 2)).unwrap();

        assert_eq!(
            transition,
            Transition::Updated {
                line: CartLine::new(pid("p1"), 2),
                previous: 1
            }
        );
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&pid("p1")), 2);
    }

    #[test]
    fn test_lower_confirmation_still_overwrites() {
        let mut cart = Cart::new();
        cart.reconcile(CartLine::new(pid("p1"), 3)).unwrap();
        cart.reconcile(CartLine::new(pid("p1"), 2)).unwrap();
        assert_eq!(cart.quantity_of(&pid("p1")), 2);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut cart = Cart::new();
        cart.dispatch(CartAction::AddItem {
            item: CartLine::new(pid("p1"), 1),
        })
        .unwrap();

        let err = cart
            .dispatch(CartAction::AddItem {
                item: CartLine::new(pid("p1"), 5),
            })
            .unwrap_err();
        assert_eq!(err, CommerceError::DuplicateLine("p1".to_string()));
        assert_eq!(cart.lines(), &[CartLine::new(pid("p1"), 1)]);
    }

    #[test]
    fn test_update_missing_line_rejected() {
        let mut cart = Cart::new();
        let err = cart
            .dispatch(CartAction::UpdateQuantity {
                product_id: pid("p9"),
                quantity: 2,
            })
            .unwrap_err();
        assert_eq!(err, CommerceError::ItemNotInCart("p9".to_string()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = Cart::new();
        assert!(cart.reconcile(CartLine::new(pid("p1"), 0)).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_count() {
        let mut cart = Cart::new();
        cart.reconcile(CartLine::new(pid("a"), 2)).unwrap();
        cart.reconcile(CartLine::new(pid("b"), 3)).unwrap();
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_action_json_shape() {
        let add = CartAction::AddItem {
            item: CartLine::new(pid("p1"), 1),
        };
        assert_eq!(
            serde_json::to_value(&add).unwrap(),
            serde_json::json!({ "type": "ADD_ITEM", "item": { "_id": "p1", "quantity": 1 } })
        );

        let update: CartAction = serde_json::from_value(
            serde_json::json!({ "type": "UPDATE_QUANTITY", "_id": "p1", "quantity": 4 }),
        )
        .unwrap();
        assert_eq!(
            update,
            CartAction::UpdateQuantity {
                product_id: pid("p1"),
                quantity: 4
            }
        );
    }
}
