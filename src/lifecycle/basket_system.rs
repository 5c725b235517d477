use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::checkout::CheckoutClient;
use crate::clients::BasketClient;
use crate::model::FeeSchedule;

/// Settings for a [`BasketSystem`].
///
/// Deserializable so a host application can read it from whatever config source it already
/// uses; missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity of the basket actor's request channel.
    pub channel_capacity: usize,
    /// Fees added at checkout.
    pub fees: FeeSchedule,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            fees: FeeSchedule::default(),
        }
    }
}

/// The owner of the basket store.
///
/// `BasketSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the basket actor
/// - **Dependency Wiring**: Building the checkout client on top of the basket client
/// - **Access**: Handing out clients; consumers receive a clone and never look the store up
///
/// # Example
///
/// ```ignore
/// let system = BasketSystem::new();
///
/// let basket = system.basket_client.open_basket().await?;
/// system.basket_client.add_product(basket, &pizza).await?;
/// let order = system.checkout_client.place_order(basket).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BasketSystem {
    /// Client for reading, mutating and observing baskets
    pub basket_client: BasketClient,

    /// Client for the checkout flow
    pub checkout_client: CheckoutClient,

    /// Task handle of the basket actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl BasketSystem {
    /// Creates a system with [`SystemConfig::default`]. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Creates the basket actor, spawns it and wires the clients.
    pub fn with_config(config: SystemConfig) -> Self {
        let (basket_actor, generic_client) = crate::basket_actor::new(config.channel_capacity);
        let handle = tokio::spawn(basket_actor.run());

        let basket_client = BasketClient::new(generic_client);
        let checkout_client = CheckoutClient::new(basket_client.clone(), config.fees);

        info!(capacity = config.channel_capacity, "Basket system started");
        Self {
            basket_client,
            checkout_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the request channel; the actor drains what is queued and
    /// exits. Clones held elsewhere keep the actor alive, so callers must drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down basket system...");

        drop(self.checkout_client);
        drop(self.basket_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Basket system shutdown complete.");
        Ok(())
    }
}

impl Default for BasketSystem {
    fn default() -> Self {
        Self::new()
    }
}
