//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::{oneshot, watch};

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: Start of an entity's life. Uses [`ActorEntity::Create`].
/// - **Get**: Returns a clone of the current state.
/// - **Delete**: End of an entity's life. Closes its subscription channel.
/// - **Action**: Mutation. Executes an [`ActorEntity::Action`] and publishes the new state.
/// - **Subscribe**: Hands out a `watch` receiver that sees every later change.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Subscribe {
        id: T::Id,
        respond_to: Response<watch::Receiver<T>>,
    },
}
