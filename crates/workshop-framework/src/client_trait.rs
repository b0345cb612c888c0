//! # ActorClient Trait
//!
//! Common surface of the typed clients (`MaterialClient`, `OrderClient`, ...): `get`,
//! `list` and `delete` come for free once a wrapper exposes its inner `ResourceClient`
//! and says how framework errors become its own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// # Example
///
/// ```rust
/// use workshop_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Button { id: u32 }
/// #[derive(Debug)] struct ButtonCreate;
/// #[derive(Debug)] struct ButtonUpdate;
/// #[derive(Debug)] enum ButtonAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ButtonError(String);
///
/// #[async_trait]
/// impl ActorEntity for Button {
///     type Id = u32;
///     type Create = ButtonCreate;
///     type Update = ButtonUpdate;
///     type Action = ButtonAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ButtonError;
///
///     fn from_create_params(id: u32, _: ButtonCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: ButtonUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: ButtonAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct ButtonClient { inner: ResourceClient<Button> }
///
/// #[async_trait]
/// impl ActorClient<Button> for ButtonClient {
///     type Error = ButtonError;
///     fn inner(&self) -> &ResourceClient<Button> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { ButtonError(e.to_string()) }
/// }
///
/// async fn usage(client: ButtonClient) {
///     // get(), list() and delete() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, ordered by ID.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
