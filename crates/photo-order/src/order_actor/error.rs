//! Error types for the order actor.

use crate::model::PackId;
use thiserror::Error;

/// Errors that can occur during order session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The session was closed or never opened.
    #[error("Order session not found: {0}")]
    NotFound(String),

    /// A pack must contain at least one photo.
    #[error("Invalid photo count 0 for pack {0}")]
    InvalidPhotoCount(PackId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
