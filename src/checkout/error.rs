//! Error types for checkout.

use crate::basket_actor::BasketError;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("Basket is empty")]
    EmptyBasket,

    /// Reading or clearing the basket failed.
    #[error(transparent)]
    Basket(#[from] BasketError),
}
