//! Error types for the Invoice actor.

use crate::model::InvoiceStatus;
use rust_decimal::Decimal;
use thiserror::Error;
use workshop_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvoiceError {
    #[error("Invoice not found: {0}")]
    NotFound(String),

    #[error("Invoice validation error: {0}")]
    ValidationError(String),

    /// The order or sale to invoice does not exist or cannot be billed.
    #[error("Invalid invoice source: {0}")]
    InvalidSource(String),

    #[error("{0} already has an open invoice")]
    AlreadyInvoiced(String),

    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Payment of {amount} exceeds the balance of {balance}")]
    Overpayment { amount: Decimal, balance: Decimal },

    #[error("Invoice is {0:?} and cannot take payments")]
    NotPayable(InvoiceStatus),

    #[error("Invoice cannot be voided: {0}")]
    CannotVoid(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for InvoiceError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<InvoiceError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => InvoiceError::NotFound(id),
            Err(other) => InvoiceError::ActorCommunicationError(other.to_string()),
        }
    }
}
