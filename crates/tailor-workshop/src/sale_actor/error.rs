//! Error types for the Sale actor.

use rust_decimal::Decimal;
use thiserror::Error;
use workshop_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    #[error("Sale not found: {0}")]
    NotFound(String),

    #[error("A sale needs at least one line")]
    EmptySale,

    #[error("Sale validation error: {0}")]
    ValidationError(String),

    #[error("Invalid customer: {0}")]
    InvalidCustomer(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Insufficient loyalty points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u64, available: u64 },

    #[error("Cash tendered {tendered} is below the total {total}")]
    InsufficientTender { total: Decimal, tendered: Decimal },

    /// Sales cannot be edited or deleted once rung up.
    #[error("Sales are immutable")]
    Immutable,

    /// The sale was stored but its invoice could not be raised.
    #[error("Invoice for sale failed: {0}")]
    Invoice(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SaleError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<SaleError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => SaleError::NotFound(id),
            Err(other) => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}
