//! Error types for the Material actor.

use rust_decimal::Decimal;
use thiserror::Error;
use workshop_framework::FrameworkError;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MaterialError {
    #[error("Material not found: {0}")]
    NotFound(String),

    /// The SKU is already used by another material.
    #[error("Material already exists with SKU {0}")]
    AlreadyExists(String),

    #[error("Material validation error: {0}")]
    ValidationError(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock of {sku}: requested {requested}, available {available}")]
    InsufficientStock {
        sku: String,
        requested: Decimal,
        available: Decimal,
    },

    /// Zero or negative stock movement.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(Decimal),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MaterialError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<MaterialError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MaterialError::NotFound(id),
            Err(FrameworkError::Conflict(sku)) => MaterialError::AlreadyExists(sku),
            Err(other) => MaterialError::ActorCommunicationError(other.to_string()),
        }
    }
}
