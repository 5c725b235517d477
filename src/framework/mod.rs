//! Generic single-owner state runtime.
//!
//! This module provides the building blocks that own mutable state in exactly one place
//! and let any number of cheap handles read, mutate and observe it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that state types implement to be managed by the runtime
//! - [`ResourceActor`] - Generic event loop that owns every entity of one type
//! - [`ResourceClient`] - Cloneable, type-safe handle for talking to the actor
//! - [`ActorClient`] - Helper trait that gives domain clients `get`/`delete` for free
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
