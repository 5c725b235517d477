//! Error types for the Basket actor.

use thiserror::Error;

/// Errors that can occur during basket operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BasketError {
    /// The increment passed to an add operation is zero or negative.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The resulting quantity would not fit in a line item.
    #[error("Quantity overflow: current {current}, requested {requested}")]
    QuantityOverflow { current: u32, requested: i64 },

    /// Checkout was asked for a basket with no line items.
    #[error("Basket is empty")]
    EmptyBasket,

    /// The basket session does not exist (never opened, or already closed).
    #[error("Basket not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BasketError {
    fn from(msg: String) -> Self {
        BasketError::ActorCommunicationError(msg)
    }
}
