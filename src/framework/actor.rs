//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single owner of every entity of one type.
//! It processes messages sequentially, so each request runs to completion before the next
//! one is looked at, and it publishes state changes to subscribers.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`), one `watch`
/// sender per observed entity (`watchers`) and the receiver end of the request channel.
///
/// **Concurrency Model**:
/// Requests from every cloned client are funnelled through one channel and handled one at a
/// time, so no `Mutex` guards the `store`. A mutation is answered only after its new state has
/// been published, which means a caller that awaited the reply can never read a stale value.
///
/// # Implementation Details
///
/// * **Create**: Generates the next `u32` ID, converts it to `T::Id`, builds the entity with
///   `T::from_create_params` and stores it. Ids are never reused; after `u32::MAX` every create
///   fails with [`FrameworkError::IdsExhausted`].
/// * **Get**: Returns a clone of the entity, or `None`.
/// * **Delete**: Removes the entity and drops its watch sender, which closes every subscription.
/// * **Action**: Runs `handle_action`; on success publishes the new state if it changed.
/// * **Subscribe**: Returns a receiver seeded with the current state.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    watchers: HashMap<T::Id, watch::Sender<T>>,
    /// `None` once every `u32` id has been handed out.
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            watchers: HashMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Basket" instead of "basket_store::model::basket::Basket")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Id space exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    self.next_id = raw_id.checked_add(1);
                    let id = T::Id::from(raw_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        self.watchers.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action)
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => {
                                Self::publish(&mut self.watchers, &id, item);
                                info!(entity_type, %id, "Action ok");
                            }
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Subscribe { id, respond_to } => {
                    if let Some(item) = self.store.get(&id) {
                        let receiver = match self.watchers.get(&id) {
                            Some(sender) => sender.subscribe(),
                            None => {
                                let (sender, receiver) = watch::channel(item.clone());
                                self.watchers.insert(id.clone(), sender);
                                receiver
                            }
                        };
                        debug!(entity_type, %id, "Subscribed");
                        let _ = respond_to.send(Ok(receiver));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Pushes `item` to the entity's subscribers if it differs from what they last saw.
    ///
    /// A sender whose receivers have all been dropped is released here instead of being updated,
    /// so existing entries in `watchers` always hold the current state.
    fn publish(watchers: &mut HashMap<T::Id, watch::Sender<T>>, id: &T::Id, item: &T) {
        let Some(sender) = watchers.get(id) else {
            return;
        };
        if sender.is_closed() {
            watchers.remove(id);
            debug!(%id, "Subscription released");
            return;
        }
        sender.send_if_modified(|current| {
            if *current == *item {
                false
            } else {
                *current = item.clone();
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        count: u32,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
        Touch,
        Fail,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally refused")]
    struct TallyError;

    impl ActorEntity for Tally {
        type Id = u32;
        type Create = u32;
        type Action = TallyAction;
        type ActionResult = u32;
        type Error = TallyError;

        fn from_create_params(id: u32, start: u32) -> Result<Self, Self::Error> {
            Ok(Self { id, count: start })
        }

        fn handle_action(&mut self, action: TallyAction) -> Result<u32, Self::Error> {
            match action {
                TallyAction::Bump => self.count += 1,
                TallyAction::Touch => {}
                TallyAction::Fail => return Err(TallyError),
            }
            Ok(self.count)
        }
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run());

        let id = client.create(5).await.unwrap();
        assert_eq!(id, 1);

        let count = client.perform_action(id, TallyAction::Bump).await.unwrap();
        assert_eq!(count, 6);

        let tally = client.get(id).await.unwrap().unwrap();
        assert_eq!(tally, Tally { id: 1, count: 6 });

        let err = client.perform_action(id, TallyAction::Fail).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
        assert!(matches!(
            client.perform_action(id, TallyAction::Bump).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_subscribers_only_see_real_changes() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run());

        let id = client.create(0).await.unwrap();
        let mut rx = client.subscribe(id).await.unwrap();
        assert_eq!(rx.borrow().count, 0);

        client.perform_action(id, TallyAction::Touch).await.unwrap();
        assert!(!rx.has_changed().unwrap());

        client.perform_action(id, TallyAction::Bump).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().count, 1);

        // A late subscriber starts from the current state.
        let late = client.subscribe(id).await.unwrap();
        assert_eq!(late.borrow().count, 1);

        client.delete(id).await.unwrap();
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test]
    async fn test_dropped_subscription_is_released() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run());

        let id = client.create(0).await.unwrap();
        drop(client.subscribe(id).await.unwrap());

        // Publishing to a closed channel prunes it; a fresh subscription is seeded from the store.
        client.perform_action(id, TallyAction::Bump).await.unwrap();
        client.perform_action(id, TallyAction::Bump).await.unwrap();
        let rx = client.subscribe(id).await.unwrap();
        assert_eq!(rx.borrow().count, 2);
    }

    #[tokio::test]
    async fn test_create_fails_once_ids_run_out() {
        let (mut actor, client) = ResourceActor::<Tally>::new(10);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run());

        let last = client.create(0).await.unwrap();
        assert_eq!(last, u32::MAX);
        assert!(matches!(
            client.create(0).await,
            Err(FrameworkError::IdsExhausted)
        ));

        // Existing entities keep working.
        assert_eq!(client.perform_action(last, TallyAction::Bump).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_subscribe_unknown_entity() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run());

        let result = client.subscribe(42).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    }
}
