//! # Basket Client
//!
//! Provides a high‑level API for interacting with the `Basket` actor.
//! It wraps a `ResourceClient<Basket>` and exposes the basket operations screens need:
//! read a snapshot, mutate, and subscribe to changes.
use crate::basket_actor::{BasketAction, BasketActionResult, BasketError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Basket, BasketId, BasketSnapshot, Product, ProductId};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Client for interacting with the Basket actor.
///
/// Cheap to clone. The owner of the [`BasketSystem`](crate::lifecycle::BasketSystem) hands a
/// clone to every consumer; nothing reaches the basket any other way.
#[derive(Clone)]
pub struct BasketClient {
    inner: ResourceClient<Basket>,
}

impl BasketClient {
    pub fn new(inner: ResourceClient<Basket>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Basket> for BasketClient {
    type Error = BasketError;

    fn inner(&self) -> &ResourceClient<Basket> {
        &self.inner
    }

    /// Recovers the typed [`BasketError`] that the actor boxed on the way out.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BasketError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<BasketError>() {
                Ok(err) => *err,
                Err(other) => BasketError::ActorCommunicationError(other.to_string()),
            },
            other => BasketError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl BasketClient {
    /// Starts a session with an empty basket.
    #[instrument(skip(self))]
    pub async fn open_basket(&self) -> Result<BasketId, BasketError> {
        debug!("Sending request");
        self.inner.create(()).await.map_err(Self::map_error)
    }

    /// Ends a session. Open subscriptions see the basket close.
    #[instrument(skip(self))]
    pub async fn close_basket(&self, basket: BasketId) -> Result<(), BasketError> {
        self.delete(basket).await
    }

    /// Adds one unit of `product`. Returns the product's new quantity.
    pub async fn add_product(&self, basket: BasketId, product: &Product) -> Result<u32, BasketError> {
        self.add_product_quantity(basket, product, 1).await
    }

    /// Adds `quantity` units of `product`. Returns the product's new quantity.
    ///
    /// Fails with [`BasketError::InvalidQuantity`] if `quantity` is not positive; the basket is
    /// left as it was.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_product_quantity(
        &self,
        basket: BasketId,
        product: &Product,
        quantity: i64,
    ) -> Result<u32, BasketError> {
        debug!(?product, quantity, "add_product called");
        let action = BasketAction::AddProduct {
            product: product.clone(),
            quantity,
        };
        match self.inner.perform_action(basket, action).await {
            Ok(BasketActionResult::AddProduct(quantity)) => Ok(quantity),
            Ok(_) => unreachable!("AddProduct action must return AddProduct result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes one unit of a product. Returns what is left (0 if it is gone or never was there).
    #[instrument(skip(self))]
    pub async fn reduce_product(&self, basket: BasketId, product: ProductId) -> Result<u32, BasketError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(basket, BasketAction::ReduceProduct(product))
            .await
        {
            Ok(BasketActionResult::ReduceProduct(remaining)) => Ok(remaining),
            Ok(_) => unreachable!("ReduceProduct action must return ReduceProduct result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes every line item. Returns whether anything was removed.
    #[instrument(skip(self))]
    pub async fn clear_basket(&self, basket: BasketId) -> Result<bool, BasketError> {
        debug!("Sending request");
        match self.inner.perform_action(basket, BasketAction::Clear).await {
            Ok(BasketActionResult::Clear(changed)) => Ok(changed),
            Ok(_) => unreachable!("Clear action must return Clear result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Empties the basket and returns what it held, as one request.
    ///
    /// No other request can run between the read and the clear, so nothing added concurrently
    /// is lost: it lands either in the returned snapshot or in the basket afterwards.
    /// Fails with [`BasketError::EmptyBasket`] if there is nothing to take.
    #[instrument(skip(self))]
    pub async fn checkout_basket(&self, basket: BasketId) -> Result<BasketSnapshot, BasketError> {
        debug!("Sending request");
        match self.inner.perform_action(basket, BasketAction::Checkout).await {
            Ok(BasketActionResult::Checkout(snapshot)) => Ok(snapshot),
            Ok(_) => unreachable!("Checkout action must return Checkout result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Reads the current totals and line items.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, basket: BasketId) -> Result<BasketSnapshot, BasketError> {
        self.get(basket)
            .await?
            .map(|b| b.snapshot())
            .ok_or_else(|| BasketError::NotFound(basket.to_string()))
    }

    /// Registers for change notifications. Drop the returned handle to unsubscribe.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, basket: BasketId) -> Result<BasketSubscription, BasketError> {
        debug!("Sending request");
        let receiver = self.inner.subscribe(basket).await.map_err(Self::map_error)?;
        Ok(BasketSubscription { receiver })
    }
}

/// A live view of one basket.
///
/// Created by [`BasketClient::subscribe`]. The actor publishes after every mutation that
/// changed the basket; no-op reductions and clearing an empty basket stay silent.
/// Dropping the subscription releases it.
#[derive(Debug)]
pub struct BasketSubscription {
    receiver: watch::Receiver<Basket>,
}

impl BasketSubscription {
    /// The latest published state. Marks it as seen.
    pub fn current(&mut self) -> BasketSnapshot {
        self.receiver.borrow_and_update().snapshot()
    }

    /// Waits for the next change.
    ///
    /// Returns `None` once the basket has been closed or the store has shut down.
    pub async fn changed(&mut self) -> Option<BasketSnapshot> {
        self.receiver.changed().await.ok()?;
        Some(self.current())
    }

    /// Whether a change has been published since the last read.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }
}
