//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The format is compact and hides the module prefix (`with_target(false)`); the actor logs
//! an `entity_type` field instead. Levels come from `RUST_LOG`:
//!
//! ```bash
//! # Basket lifecycle and every accepted action
//! RUST_LOG=info cargo run
//!
//! # Full action payloads and reads
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown, with the number of open baskets
//! - **Basket Operations**: create, get, delete, actions and subscriptions, keyed by `id`
//! - **Failures**: rejected actions (e.g. `Invalid quantity: 0`) at `warn`
//! - **Checkout**: accepted orders with item count and total
//!
//! With `RUST_LOG=info` a short session reads:
//!
//! ```text
//! INFO Actor started entity_type="Basket"
//! INFO Created entity_type="Basket" id=basket_1 size=1
//! INFO add_product_quantity: Action ok entity_type="Basket" id=basket_1
//! INFO place_order: Order accepted items=2 total=28.98
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "place_order: Order accepted")
        .init();
}
