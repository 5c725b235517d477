//! Demo session: open a basket, watch it change, order, shut down.

use basket_store::lifecycle::{setup_tracing, BasketSystem};
use basket_store::model::{Product, ProductId};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting basket demo");
    let system = BasketSystem::new();
    let baskets = system.basket_client.clone();

    let basket = baskets.open_basket().await.map_err(|e| e.to_string())?;

    // A "screen" that redraws whenever the basket changes.
    let mut subscription = baskets
        .subscribe(basket)
        .await
        .map_err(|e| e.to_string())?;
    let screen = tokio::spawn(
        async move {
            while let Some(snapshot) = subscription.changed().await {
                info!(
                    items = snapshot.item_count,
                    subtotal = snapshot.subtotal,
                    "Basket redrawn"
                );
            }
            info!("Basket closed");
        }
        .instrument(tracing::info_span!("basket_screen")),
    );

    let margherita = Product::new(1, "Pizza Margherita", 10.0);
    let salad = Product::new(2, "Caprese Salad", 8.5);

    let span = tracing::info_span!("menu_taps");
    async {
        baskets.add_product(basket, &margherita).await?;
        baskets.add_product(basket, &margherita).await?;
        baskets.add_product_quantity(basket, &salad, 2).await?;
        baskets.reduce_product(basket, ProductId(2)).await?;
        Ok::<_, basket_store::basket_actor::BasketError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    if let Err(e) = baskets.add_product_quantity(basket, &salad, 0).await {
        info!(error = %e, "Rejected add");
    }

    let order = system
        .checkout_client
        .place_order(basket)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        items = order.item_count,
        subtotal = order.subtotal,
        total = order.total,
        "Thanks for your order!"
    );

    baskets.close_basket(basket).await.map_err(|e| e.to_string())?;
    screen.await.map_err(|e| e.to_string())?;

    drop(baskets);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
