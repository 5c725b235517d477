//! ActorEntity trait implementation for the Basket domain type.
//!
//! Every action delegates to the synchronous operations on [`Basket`], so the actor and a
//! directly owned `Basket` behave identically.

use super::actions::{BasketAction, BasketActionResult};
use super::error::BasketError;
use crate::framework::ActorEntity;
use crate::model::{Basket, BasketId};

impl ActorEntity for Basket {
    type Id = BasketId;
    type Create = ();
    type Action = BasketAction;
    type ActionResult = BasketActionResult;
    type Error = BasketError;

    /// Every session starts with an empty basket.
    fn from_create_params(id: BasketId, _params: ()) -> Result<Self, Self::Error> {
        Ok(Basket::new(id))
    }

    fn handle_action(&mut self, action: BasketAction) -> Result<BasketActionResult, Self::Error> {
        match action {
            BasketAction::AddProduct { product, quantity } => self
                .add_product_quantity(&product, quantity)
                .map(BasketActionResult::AddProduct),
            BasketAction::ReduceProduct(id) => {
                Ok(BasketActionResult::ReduceProduct(self.reduce_product(&id)))
            }
            BasketAction::Clear => Ok(BasketActionResult::Clear(self.clear())),
            BasketAction::Checkout => self.take_all().map(BasketActionResult::Checkout),
        }
    }
}
