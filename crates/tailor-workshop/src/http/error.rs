//! Translation of domain errors into HTTP responses.
//!
//! | Kind | Status |
//! |---|---|
//! | missing record | 404 |
//! | duplicate unique key | 409 |
//! | validation or state rule | 422 |
//! | actor unavailable | 503 |

use crate::customer_actor::CustomerError;
use crate::invoice_actor::InvoiceError;
use crate::material_actor::MaterialError;
use crate::order_actor::OrderError;
use crate::pos::{CartError, PosError};
use crate::role_actor::RoleError;
use crate::sale_actor::SaleError;
use crate::staff_actor::StaffError;
use crate::worker_actor::WorkerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};
use workshop_framework::FrameworkError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{what} not found"))
    }

    fn unprocessable(e: impl ToString) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    }

    fn unavailable(e: impl ToString) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, error = %self.message, "Request rejected");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<FrameworkError> for ApiError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            FrameworkError::Conflict(_) => Self::new(StatusCode::CONFLICT, e.to_string()),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => Self::unavailable(e),
            FrameworkError::EntityError(_) => Self::unprocessable(e),
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            CustomerError::AlreadyExists(_) => Self::new(StatusCode::CONFLICT, e.to_string()),
            CustomerError::ActorCommunicationError(_) => Self::unavailable(e),
            CustomerError::ValidationError(_) | CustomerError::InsufficientPoints { .. } => {
                Self::unprocessable(e)
            }
        }
    }
}

impl From<WorkerError> for ApiError {
    fn from(e: WorkerError) -> Self {
        match e {
            WorkerError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            WorkerError::AlreadyExists(_) | WorkerError::AlreadyPaid(_) => {
                Self::new(StatusCode::CONFLICT, e.to_string())
            }
            WorkerError::ActorCommunicationError(_) => Self::unavailable(e),
            WorkerError::ValidationError(_)
            | WorkerError::Inactive(_)
            | WorkerError::HasOpenOrders { .. } => Self::unprocessable(e),
        }
    }
}

impl From<MaterialError> for ApiError {
    fn from(e: MaterialError) -> Self {
        match e {
            MaterialError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            MaterialError::AlreadyExists(_) => Self::new(StatusCode::CONFLICT, e.to_string()),
            MaterialError::ActorCommunicationError(_) => Self::unavailable(e),
            MaterialError::ValidationError(_)
            | MaterialError::InsufficientStock { .. }
            | MaterialError::InvalidQuantity(_) => Self::unprocessable(e),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            OrderError::ActorCommunicationError(_) => Self::unavailable(e),
            _ => Self::unprocessable(e),
        }
    }
}

impl From<InvoiceError> for ApiError {
    fn from(e: InvoiceError) -> Self {
        match e {
            InvoiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            InvoiceError::AlreadyInvoiced(_) => Self::new(StatusCode::CONFLICT, e.to_string()),
            InvoiceError::ActorCommunicationError(_) => Self::unavailable(e),
            _ => Self::unprocessable(e),
        }
    }
}

impl From<RoleError> for ApiError {
    fn from(e: RoleError) -> Self {
        match e {
            RoleError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            RoleError::AlreadyExists(_) => Self::new(StatusCode::CONFLICT, e.to_string()),
            RoleError::ActorCommunicationError(_) => Self::unavailable(e),
            RoleError::ValidationError(_) => Self::unprocessable(e),
        }
    }
}

impl From<StaffError> for ApiError {
    fn from(e: StaffError) -> Self {
        match e {
            StaffError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            StaffError::AlreadyExists(_) => Self::new(StatusCode::CONFLICT, e.to_string()),
            StaffError::ActorCommunicationError(_) => Self::unavailable(e),
            StaffError::ValidationError(_) | StaffError::InvalidRole(_) | StaffError::Inactive(_) => {
                Self::unprocessable(e)
            }
        }
    }
}

impl From<SaleError> for ApiError {
    fn from(e: SaleError) -> Self {
        match e {
            SaleError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            SaleError::ActorCommunicationError(_) => Self::unavailable(e),
            SaleError::Invoice(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            _ => Self::unprocessable(e),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        Self::unprocessable(e)
    }
}

impl From<PosError> for ApiError {
    fn from(e: PosError) -> Self {
        match e {
            PosError::Cart(e) => e.into(),
            PosError::UnknownMaterial(_) | PosError::UnknownCustomer(_) => Self::unprocessable(e),
            PosError::Material(e) => e.into(),
            PosError::Customer(e) => e.into(),
            PosError::Sale(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (CustomerError::NotFound("customer_9".into()).into(), StatusCode::NOT_FOUND),
            (MaterialError::AlreadyExists("FAB-1".into()).into(), StatusCode::CONFLICT),
            (
                MaterialError::InsufficientStock {
                    sku: "FAB-1".into(),
                    requested: dec!(5),
                    available: dec!(2),
                }
                .into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (OrderError::ActorCommunicationError("closed".into()).into(), StatusCode::SERVICE_UNAVAILABLE),
            (FrameworkError::ActorClosed.into(), StatusCode::SERVICE_UNAVAILABLE),
            (PosError::Cart(CartError::EmptyCart).into(), StatusCode::UNPROCESSABLE_ENTITY),
            (InvoiceError::AlreadyInvoiced("order_1".into()).into(), StatusCode::CONFLICT),
        ];
        for (error, status) in cases {
            assert_eq!(error.status(), status, "{}", error.message());
        }
    }

    #[test]
    fn response_carries_status() {
        let response = ApiError::not_found("order_4").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
