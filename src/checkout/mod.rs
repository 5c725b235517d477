//! # Checkout
//!
//! Turns a basket into an accepted order. Fees live here, not in the basket: the store only
//! knows line items and the subtotal, and checkout prices them with a [`FeeSchedule`].
//!
//! Accepting an order takes the basket's contents and empties it in a single request
//! ([`BasketClient::checkout_basket`]), so a product added from another screen while the order
//! is placed is either part of the order or still in the basket afterwards.

pub mod error;

pub use error::*;

use crate::basket_actor::BasketError;
use crate::clients::BasketClient;
use crate::model::{BasketId, FeeSchedule, OrderSummary};
use tracing::{debug, info, instrument};

/// Client for the checkout flow.
#[derive(Clone)]
pub struct CheckoutClient {
    basket: BasketClient,
    fees: FeeSchedule,
}

impl CheckoutClient {
    pub fn new(basket: BasketClient, fees: FeeSchedule) -> Self {
        Self { basket, fees }
    }

    pub fn fees(&self) -> FeeSchedule {
        self.fees
    }

    /// Prices the basket as it is now without changing it.
    #[instrument(skip(self))]
    pub async fn summary(&self, basket: BasketId) -> Result<OrderSummary, CheckoutError> {
        let snapshot = self.basket.snapshot(basket).await?;
        Ok(OrderSummary::new(snapshot, self.fees))
    }

    /// Accepts the order and empties the basket.
    ///
    /// # Errors
    /// * [`CheckoutError::EmptyBasket`] if there is nothing to order; the basket is not touched.
    /// * [`CheckoutError::Basket`] if the basket cannot be reached.
    #[instrument(skip(self))]
    pub async fn place_order(&self, basket: BasketId) -> Result<OrderSummary, CheckoutError> {
        let snapshot = match self.basket.checkout_basket(basket).await {
            Ok(snapshot) => snapshot,
            Err(BasketError::EmptyBasket) => {
                debug!("Nothing to order");
                return Err(CheckoutError::EmptyBasket);
            }
            Err(e) => return Err(e.into()),
        };

        let summary = OrderSummary::new(snapshot, self.fees);
        info!(
            items = summary.item_count,
            total = summary.total,
            "Order accepted"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket_actor::BasketActionResult;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{Basket, Product};

    fn basket_with_pizza() -> Basket {
        let mut basket = Basket::new(1);
        basket
            .add_product_quantity(&Product::new(1, "Pizza", 10.0), 2)
            .unwrap();
        basket
    }

    #[tokio::test]
    async fn test_place_order_prices_and_clears() {
        let mut mock = MockClient::<Basket>::new();
        mock.expect_action(BasketId(1))
            .return_ok(BasketActionResult::Checkout(basket_with_pizza().snapshot()));

        let fees = FeeSchedule {
            service: 1.0,
            delivery: 4.0,
        };
        let checkout = CheckoutClient::new(BasketClient::new(mock.client()), fees);

        let summary = checkout.place_order(BasketId(1)).await.unwrap();
        assert_eq!(summary.subtotal, 20.0);
        assert_eq!(summary.total, 25.0);
        assert_eq!(summary.line_items.len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_empty_basket_is_not_ordered() {
        let mut mock = MockClient::<Basket>::new();
        mock.expect_action(BasketId(1))
            .return_err(FrameworkError::EntityError(Box::new(BasketError::EmptyBasket)));

        let checkout = CheckoutClient::new(BasketClient::new(mock.client()), FeeSchedule::default());

        assert_eq!(
            checkout.place_order(BasketId(1)).await,
            Err(CheckoutError::EmptyBasket)
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_basket_is_reported() {
        let mut mock = MockClient::<Basket>::new();
        mock.expect_action(BasketId(1))
            .return_err(FrameworkError::NotFound("basket_1".to_string()));

        let checkout = CheckoutClient::new(BasketClient::new(mock.client()), FeeSchedule::default());

        assert_eq!(
            checkout.place_order(BasketId(1)).await,
            Err(CheckoutError::Basket(BasketError::NotFound(
                "basket_1".to_string()
            )))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_summary_does_not_clear() {
        let mut mock = MockClient::<Basket>::new();
        mock.expect_get(BasketId(1)).return_ok(Some(basket_with_pizza()));

        let checkout = CheckoutClient::new(BasketClient::new(mock.client()), FeeSchedule::default());
        let summary = checkout.summary(BasketId(1)).await.unwrap();

        assert_eq!(summary.item_count, 2);
        assert!((summary.total - 28.98).abs() < 1e-9);
        mock.verify();
    }
}
