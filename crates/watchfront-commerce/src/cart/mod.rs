//! Shopping cart module.
//!
//! Contains the server-confirmed cart, its reducer, and the membership query
//! the listing uses to decide button state.

mod cart;
mod membership;

pub use cart::{Cart, CartAction, CartLine, Transition};
pub use membership::{is_in_cart, ButtonState};
