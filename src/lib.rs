//! # Basket Store
//!
//! > **The shopping basket of a food-ordering client, with one owner and many observers.**
//!
//! Screens read the basket, change it in response to taps and redraw when it changes. This
//! crate owns that state and nothing else: no rendering, navigation or persistence.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner, injected handles
//! The basket lives inside a single actor task. Consumers get a cloned
//! [`BasketClient`](clients::BasketClient) from the [`BasketSystem`](lifecycle::BasketSystem)
//! that created it; there is no global store to look up.
//!
//! ### Sequential by construction
//! Requests are processed one at a time, so every operation is atomic with respect to every
//! other and a caller that awaited a mutation always reads its effect.
//!
//! ### Explicit notifications
//! Instead of implicit re-rendering, screens subscribe
//! ([`BasketClient::subscribe`](clients::BasketClient::subscribe)) and receive a new snapshot
//! after every change. Dropping the subscription unsubscribes.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Basket`](model::Basket) holds line items keyed by product id and keeps `item_count` and
//! `subtotal` in step with them. Its operations are plain synchronous methods.
//!
//! ### 2. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) that owns entities, serialises
//! requests and publishes changes, plus [`mock`](framework::mock) for testing clients.
//!
//! ### 3. The Basket Actor ([`basket_actor`])
//! Plugs [`Basket`](model::Basket) into the engine: actions, errors, factory.
//!
//! ### 4. The Interface ([`clients`], [`checkout`])
//! Domain clients for screens: basket reads, mutations, subscriptions, and the checkout flow
//! that prices an order and clears the basket.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Builds and shuts down the system, and sets up logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo session with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod basket_actor;
pub mod checkout;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
