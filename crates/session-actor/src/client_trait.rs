//! # ActorClient Trait
//!
//! Common interface for entity-specific clients: default `get` and `delete` built on
//! top of a generic `ResourceClient`, with framework errors mapped into the client's own
//! error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the lifecycle operations.
///
/// # Example
///
/// ```rust
/// use session_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Cart { id: u32 }
/// #[derive(Debug)] struct CartOpen;
/// #[derive(Debug)] enum CartAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct CartError(String);
///
/// impl From<String> for CartError {
///     fn from(s: String) -> Self { CartError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Cart {
///     type Id = u32;
///     type Create = CartOpen;
///     type Action = CartAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CartError;
///
///     fn from_create_params(id: u32, _: CartOpen) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn handle_action(&mut self, _: CartAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct CartClient {
///     inner: ResourceClient<Cart>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Cart> for CartClient {
///     type Error = CartError;
///
///     fn inner(&self) -> &ResourceClient<Cart> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CartError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CartClient) {
///     // get() and delete() are provided automatically.
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the client's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
