use basket_store::basket_actor::BasketError;
use basket_store::checkout::CheckoutError;
use basket_store::lifecycle::{BasketSystem, SystemConfig};
use basket_store::model::{FeeSchedule, Product, ProductId};

fn pizza() -> Product {
    Product::new(1, "Pizza", 10.0)
}

/// Full end-to-end test through the real actor: add twice, reduce twice.
#[tokio::test]
async fn test_add_and_reduce_scenario() {
    let system = BasketSystem::new();
    let client = &system.basket_client;

    let basket = client.open_basket().await.expect("Failed to open basket");
    assert!(client.snapshot(basket).await.unwrap().is_empty());

    client.add_product(basket, &pizza()).await.unwrap();
    let quantity = client.add_product(basket, &pizza()).await.unwrap();
    assert_eq!(quantity, 2);

    let snapshot = client.snapshot(basket).await.unwrap();
    assert_eq!(snapshot.line_items.len(), 1);
    assert_eq!(snapshot.line_items[0].id, ProductId(1));
    assert_eq!(snapshot.line_items[0].quantity, 2);
    assert_eq!(snapshot.subtotal, 20.0);
    assert_eq!(snapshot.item_count, 2);

    assert_eq!(client.reduce_product(basket, ProductId(1)).await.unwrap(), 1);
    let snapshot = client.snapshot(basket).await.unwrap();
    assert_eq!(snapshot.line_items[0].quantity, 1);
    assert_eq!(snapshot.subtotal, 10.0);

    assert_eq!(client.reduce_product(basket, ProductId(1)).await.unwrap(), 0);
    let snapshot = client.snapshot(basket).await.unwrap();
    assert!(snapshot.line_items.is_empty());
    assert_eq!(snapshot.subtotal, 0.0);
    assert_eq!(snapshot.item_count, 0);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_invalid_increment_leaves_basket_unchanged() {
    let system = BasketSystem::new();
    let client = &system.basket_client;
    let basket = client.open_basket().await.unwrap();

    client.add_product(basket, &pizza()).await.unwrap();
    let before = client.snapshot(basket).await.unwrap();

    for bad in [0, -1] {
        let result = client.add_product_quantity(basket, &pizza(), bad).await;
        assert_eq!(result, Err(BasketError::InvalidQuantity(bad)));
    }
    let result = client
        .add_product_quantity(basket, &Product::new(2, "Salad", 4.5), 0)
        .await;
    assert_eq!(result, Err(BasketError::InvalidQuantity(0)));

    assert_eq!(client.snapshot(basket).await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reduce_and_clear_are_total() {
    let system = BasketSystem::new();
    let client = &system.basket_client;
    let basket = client.open_basket().await.unwrap();

    // Nothing there yet: both succeed as no-ops.
    assert_eq!(client.reduce_product(basket, ProductId(5)).await.unwrap(), 0);
    assert!(!client.clear_basket(basket).await.unwrap());

    client.add_product_quantity(basket, &pizza(), 3).await.unwrap();
    client
        .add_product(basket, &Product::new(2, "Salad", 4.5))
        .await
        .unwrap();
    let before = client.snapshot(basket).await.unwrap();
    assert_eq!(client.reduce_product(basket, ProductId(5)).await.unwrap(), 0);
    assert_eq!(client.snapshot(basket).await.unwrap(), before);

    assert!(client.clear_basket(basket).await.unwrap());
    let snapshot = client.snapshot(basket).await.unwrap();
    assert_eq!(snapshot.item_count, 0);
    assert_eq!(snapshot.subtotal, 0.0);
    assert!(snapshot.line_items.is_empty());

    system.shutdown().await.unwrap();
}

/// Concurrent taps from many handles are serialised by the actor.
#[tokio::test]
async fn test_concurrent_adds_accumulate() {
    let system = BasketSystem::new();
    let basket = system.basket_client.open_basket().await.unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let client = system.basket_client.clone();
        handles.push(tokio::spawn(async move {
            client.add_product_quantity(basket, &pizza(), 2).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("add should succeed");
    }

    let snapshot = system.basket_client.snapshot(basket).await.unwrap();
    assert_eq!(snapshot.line_items.len(), 1);
    assert_eq!(snapshot.item_count, 20);
    assert_eq!(snapshot.subtotal, 200.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let system = BasketSystem::new();
    let client = &system.basket_client;

    let first = client.open_basket().await.unwrap();
    let second = client.open_basket().await.unwrap();
    assert_ne!(first, second);

    client.add_product(first, &pizza()).await.unwrap();
    assert_eq!(client.snapshot(first).await.unwrap().item_count, 1);
    assert!(client.snapshot(second).await.unwrap().is_empty());

    client.close_basket(first).await.unwrap();
    assert!(matches!(
        client.snapshot(first).await,
        Err(BasketError::NotFound(_))
    ));
    assert!(matches!(
        client.add_product(first, &pizza()).await,
        Err(BasketError::NotFound(_))
    ));
    assert!(matches!(
        client.close_basket(first).await,
        Err(BasketError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_prices_order_and_clears_basket() {
    let config = SystemConfig {
        fees: FeeSchedule {
            service: 2.0,
            delivery: 3.0,
        },
        ..SystemConfig::default()
    };
    let system = BasketSystem::with_config(config);
    let basket = system.basket_client.open_basket().await.unwrap();

    assert_eq!(
        system.checkout_client.place_order(basket).await,
        Err(CheckoutError::EmptyBasket)
    );

    system
        .basket_client
        .add_product_quantity(basket, &pizza(), 2)
        .await
        .unwrap();

    let preview = system.checkout_client.summary(basket).await.unwrap();
    assert_eq!(preview.total, 25.0);
    assert_eq!(system.basket_client.snapshot(basket).await.unwrap().item_count, 2);

    let order = system.checkout_client.place_order(basket).await.unwrap();
    assert_eq!(order.subtotal, 20.0);
    assert_eq!(order.service_fee, 2.0);
    assert_eq!(order.delivery_fee, 3.0);
    assert_eq!(order.total, 25.0);
    assert_eq!(order.line_items[0].name, "Pizza");

    let snapshot = system.basket_client.snapshot(basket).await.unwrap();
    assert!(snapshot.is_empty());

    system.shutdown().await.unwrap();
}

/// Products added from another screen while an order is placed are either ordered or left in
/// the basket, never dropped.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_checkout_racing_adds_loses_nothing() {
    let system = BasketSystem::new();

    for _ in 0..200 {
        let basket = system.basket_client.open_basket().await.unwrap();
        system.basket_client.add_product(basket, &pizza()).await.unwrap();

        let other_screen = system.basket_client.clone();
        let adder = tokio::spawn(async move {
            other_screen.add_product_quantity(basket, &pizza(), 5).await
        });

        let order = system.checkout_client.place_order(basket).await.unwrap();
        adder.await.unwrap().unwrap();
        let remaining = system.basket_client.snapshot(basket).await.unwrap();

        assert_eq!(
            order.item_count + remaining.item_count,
            6,
            "ordered {} and left {}",
            order.item_count,
            remaining.item_count
        );

        system.basket_client.close_basket(basket).await.unwrap();
    }

    system.shutdown().await.unwrap();
}
