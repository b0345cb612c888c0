//! Error types for the Worker actor.

use thiserror::Error;
use workshop_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkerError {
    #[error("Worker not found: {0}")]
    NotFound(String),

    #[error("Worker already exists with phone {0}")]
    AlreadyExists(String),

    #[error("Worker validation error: {0}")]
    ValidationError(String),

    #[error("Worker {0} is inactive")]
    Inactive(String),

    #[error("Payroll for period {0} already ran")]
    AlreadyPaid(String),

    /// Raised before delete while orders still point at the worker.
    #[error("Worker {worker} still has {orders} open order(s)")]
    HasOpenOrders { worker: String, orders: usize },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for WorkerError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<WorkerError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => WorkerError::NotFound(id),
            Err(FrameworkError::Conflict(phone)) => WorkerError::AlreadyExists(phone),
            Err(other) => WorkerError::ActorCommunicationError(other.to_string()),
        }
    }
}
