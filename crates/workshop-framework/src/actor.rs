//! # Generic Actor Server
//!
//! `ResourceActor` owns the store of one entity type and processes requests one at a
//! time, so a single entity is never mutated by two requests at once.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor runs in its own Tokio task and handles
/// its messages sequentially; no `Mutex` guards the store.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use workshop_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Spool { id: u32, meters: u32 }
/// #[derive(Debug)] struct SpoolCreate { meters: u32 }
/// #[derive(Debug)] struct SpoolUpdate;
/// #[derive(Debug)] enum SpoolAction {}
/// #[derive(Debug, thiserror::Error)] #[error("spool error")] struct SpoolError;
///
/// #[async_trait]
/// impl ActorEntity for Spool {
///     type Id = u32;
///     type Create = SpoolCreate;
///     type Update = SpoolUpdate;
///     type Action = SpoolAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = SpoolError;
///
///     fn from_create_params(id: u32, p: SpoolCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, meters: p.meters })
///     }
///     async fn on_update(&mut self, _: SpoolUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: SpoolAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Spool>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.create(SpoolCreate { meters: 500 }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().meters, 500);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: next id, `from_create_params`, unique-key check, `on_create`, insert.
///   The id is taken before validation, so a failed create still uses it up: ids
///   increase but can have gaps.
/// * **Get**: clone of the stored entity, or `None`.
/// * **List**: clones of all entities in id order.
/// * **Update**: `on_update` runs on a copy; the copy replaces the stored entity only
///   when the hook succeeds and the unique key is still free.
/// * **Delete**: `on_delete`, then removal.
/// * **Action**: `handle_action` on a copy, committed on success.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

fn entity_error<E>(e: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::EntityError(Box::new(e))
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` is passed into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Material" rather than "tailor_workshop::model::material::Material"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let result = self.create(id, params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        // Checked before on_create so a duplicate never triggers side effects in other actors.
        self.ensure_key_free(&item, None)?;
        item.on_create(context).await.map_err(entity_error)?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut candidate = self.existing(id)?.clone();
        candidate.on_update(update, context).await.map_err(entity_error)?;
        self.ensure_key_free(&candidate, Some(id))?;
        self.store.insert(id.clone(), candidate.clone());
        Ok(candidate)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self.existing(id)?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.store.remove(id);
        Ok(())
    }

    async fn act(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut candidate = self.existing(id)?.clone();
        let result = candidate
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;
        self.ensure_key_free(&candidate, Some(id))?;
        self.store.insert(id.clone(), candidate);
        Ok(result)
    }

    fn existing(&self, id: &T::Id) -> Result<&T, FrameworkError> {
        self.store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    fn ensure_key_free(&self, item: &T, except: Option<&T::Id>) -> Result<(), FrameworkError> {
        let Some(key) = item.unique_key() else {
            return Ok(());
        };
        let taken = self
            .store
            .iter()
            .any(|(id, other)| except != Some(id) && other.unique_key().as_deref() == Some(key.as_str()));
        if taken {
            Err(FrameworkError::Conflict(key))
        } else {
            Ok(())
        }
    }
}
