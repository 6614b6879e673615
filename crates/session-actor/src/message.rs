//! # Generic Messages
//!
//! Request types sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// An entity goes through three lifecycle steps, each one a variant:
///
/// - **Create**: a new entity from [`ActorEntity::Create`], e.g. a page view opening.
/// - **Get**: a snapshot (clone) of the entity's current state.
/// - **Delete**: the entity is discarded, e.g. a page view closing.
///
/// Everything in between goes through **Action**, carrying the entity's own
/// [`ActorEntity::Action`] enum.
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
}
