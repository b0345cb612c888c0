//! Error types for the Customer actor.

use thiserror::Error;
use workshop_framework::FrameworkError;

/// Errors that can occur during customer and loyalty operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Another customer already uses this phone number.
    #[error("Customer already exists with phone {0}")]
    AlreadyExists(String),

    #[error("Customer validation error: {0}")]
    ValidationError(String),

    #[error("Insufficient loyalty points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u64, available: u64 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<CustomerError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CustomerError::NotFound(id),
            Err(FrameworkError::Conflict(phone)) => CustomerError::AlreadyExists(phone),
            Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}
