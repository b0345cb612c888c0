//! Error types for the Staff actor.

use thiserror::Error;
use workshop_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StaffError {
    #[error("Staff user not found: {0}")]
    NotFound(String),

    #[error("Staff user already exists with email {0}")]
    AlreadyExists(String),

    #[error("Staff validation error: {0}")]
    ValidationError(String),

    /// The role given at create or on a role change does not exist.
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Staff user {0} is inactive")]
    Inactive(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for StaffError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<StaffError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => StaffError::NotFound(id),
            Err(FrameworkError::Conflict(email)) => StaffError::AlreadyExists(email),
            Err(other) => StaffError::ActorCommunicationError(other.to_string()),
        }
    }
}
