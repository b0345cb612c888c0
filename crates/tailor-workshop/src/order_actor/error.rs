//! Error types for the Order actor.

use crate::model::OrderStatus;
use thiserror::Error;
use workshop_framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The customer specified in the order does not exist.
    #[error("Invalid customer: {0}")]
    InvalidCustomer(String),

    /// The fabric specified in the order does not exist.
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid worker: {0}")]
    InvalidWorker(String),

    #[error("Worker {0} is inactive")]
    WorkerInactive(String),

    /// There is not enough fabric to cut the order.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Order {0} has no assigned worker")]
    NoWorkerAssigned(String),

    #[error("Cannot {action} an order that is {from}")]
    InvalidTransition { from: OrderStatus, action: &'static str },

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
