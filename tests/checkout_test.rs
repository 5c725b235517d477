use basket_store::basket_actor::{BasketActionResult, BasketError};
use basket_store::checkout::{CheckoutClient, CheckoutError};
use basket_store::clients::BasketClient;
use basket_store::framework::mock::MockClient;
use basket_store::framework::FrameworkError;
use basket_store::model::{Basket, BasketId, FeeSchedule, Product};

fn basket_with(products: &[(Product, i64)]) -> Basket {
    let mut basket = Basket::new(1);
    for (product, quantity) in products {
        basket.add_product_quantity(product, *quantity).unwrap();
    }
    basket
}

#[tokio::test]
async fn test_order_total_uses_default_fees() {
    let basket = basket_with(&[
        (Product::new(1, "Pizza", 10.0), 1),
        (Product::new(2, "Salad", 4.5), 2),
    ]);

    let mut mock = MockClient::<Basket>::new();
    mock.expect_action(BasketId(1))
        .return_ok(BasketActionResult::Checkout(basket.snapshot()));

    let checkout = CheckoutClient::new(BasketClient::new(mock.client()), FeeSchedule::default());
    let order = checkout.place_order(BasketId(1)).await.unwrap();

    assert_eq!(order.item_count, 3);
    assert_eq!(order.subtotal, 19.0);
    assert!((order.total - (19.0 + 2.99 + 5.99)).abs() < 1e-9);
    assert_eq!(order.line_items.len(), 2);
    mock.verify();
}

#[tokio::test]
async fn test_checkout_of_closed_basket() {
    let mut mock = MockClient::<Basket>::new();
    mock.expect_action(BasketId(4))
        .return_err(FrameworkError::NotFound("basket_4".to_string()));

    let checkout = CheckoutClient::new(BasketClient::new(mock.client()), FeeSchedule::default());

    assert_eq!(
        checkout.place_order(BasketId(4)).await,
        Err(CheckoutError::Basket(BasketError::NotFound(
            "basket_4".to_string()
        )))
    );
    mock.verify();
}

#[tokio::test]
async fn test_checkout_when_store_is_gone() {
    let mut mock = MockClient::<Basket>::new();
    mock.expect_get(BasketId(1))
        .return_err(FrameworkError::ActorClosed);

    let checkout = CheckoutClient::new(BasketClient::new(mock.client()), FeeSchedule::default());

    assert!(matches!(
        checkout.summary(BasketId(1)).await,
        Err(CheckoutError::Basket(BasketError::ActorCommunicationError(_)))
    ));
    mock.verify();
}
