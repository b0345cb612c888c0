//! Error types for the Role actor.

use thiserror::Error;
use workshop_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoleError {
    #[error("Role not found: {0}")]
    NotFound(String),

    #[error("Role already exists: {0}")]
    AlreadyExists(String),

    #[error("Role validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RoleError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<RoleError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RoleError::NotFound(id),
            Err(FrameworkError::Conflict(name)) => RoleError::AlreadyExists(name),
            Err(other) => RoleError::ActorCommunicationError(other.to_string()),
        }
    }
}
