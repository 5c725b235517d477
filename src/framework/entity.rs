//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every piece of owned state must implement
//! to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor). It specifies
//! associated types for IDs, creation payloads, actions and errors, and the hooks the actor
//! calls while processing requests.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any entity must implement to be managed by `ResourceActor`.
///
/// # Architecture Note
/// The actor loop is written once against this contract. A basket, or anything else that needs
/// a single owner, only has to describe how it is built and how it reacts to its actions.
///
/// Associated types keep the wiring type-safe: a `Basket` actor only accepts `BasketAction`
/// values and only ever answers with `BasketActionResult`.
///
/// # Change Detection
/// `PartialEq` is required so the actor can tell whether an action actually changed the
/// entity. Subscribers are only woken for real changes.
pub trait ActorEntity: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing entity-specific operations (e.g., `AddProduct`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// Errors are boxed into [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError)
    /// on the way back to the client, which can downcast them to recover the typed variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Handle an entity-specific action.
    ///
    /// A failed action must leave the entity exactly as it was.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
