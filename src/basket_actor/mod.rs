//! # Basket Actor
//!
//! This module lets a [`ResourceActor`] own every open basket.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Basket`]
//! - [`error`] - [`BasketError`] type for type-safe error handling
//! - [`actions`] - [`BasketAction`] and [`BasketActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use basket_store::basket_actor;
//! use basket_store::clients::BasketClient;
//! use basket_store::model::Product;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = basket_actor::new(32);
//!     let client = BasketClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let basket = client.open_basket().await?;
//!     client.add_product(basket, &Product::new(1, "Pizza", 10.0)).await?;
//!     assert_eq!(client.snapshot(basket).await?.item_count, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Basket;

/// Creates a new Basket actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Basket>, ResourceClient<Basket>) {
    ResourceActor::new(buffer_size)
}
