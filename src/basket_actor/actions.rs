//! Mutations accepted by the Basket actor.
//!
//! These actions are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`Basket`](crate::model::Basket). There is no "set quantity" action: baskets grow through
//! `AddProduct` and shrink one unit at a time through `ReduceProduct`.

use crate::model::{BasketSnapshot, Product, ProductId};

/// Custom actions for Basket entities.
#[derive(Debug, Clone)]
pub enum BasketAction {
    /// Adds `quantity` units of a product.
    ///
    /// # Errors
    /// Fails with [`BasketError::InvalidQuantity`](super::BasketError::InvalidQuantity) if
    /// `quantity` is not positive.
    AddProduct { product: Product, quantity: i64 },
    /// Removes one unit of a product. Unknown products are ignored.
    ReduceProduct(ProductId),
    /// Removes every line item.
    Clear,
    /// Hands over the whole basket and empties it in the same turn.
    ///
    /// # Errors
    /// Fails with [`BasketError::EmptyBasket`](super::BasketError::EmptyBasket) if there is
    /// nothing to check out.
    Checkout,
}

/// Results from BasketActions - variants match 1:1 with BasketAction
#[derive(Debug, Clone, PartialEq)]
pub enum BasketActionResult {
    /// Quantity of the product after the addition.
    AddProduct(u32),
    /// Quantity left after the reduction; 0 when the item is gone or was never there.
    ReduceProduct(u32),
    /// Whether anything was removed.
    Clear(bool),
    /// What the basket held before it was emptied.
    Checkout(BasketSnapshot),
}
