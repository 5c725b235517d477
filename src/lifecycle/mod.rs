//! # System Lifecycle
//!
//! Construction, wiring and shutdown of the basket store, plus logging setup.
//!
//! - [`BasketSystem`] - Owns the basket actor and hands out [`BasketClient`](crate::clients::BasketClient)
//!   and [`CheckoutClient`](crate::checkout::CheckoutClient) clones
//! - [`SystemConfig`] - Channel capacity and checkout fees
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod basket_system;
pub mod tracing;

pub use basket_system::*;
pub use self::tracing::*;
