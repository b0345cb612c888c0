//! # HTTP API
//!
//! JSON REST surface over [`WorkshopSystem`]. Handlers are thin: they decode the request,
//! call one typed client or system workflow, and let [`ApiError`] pick the status code.
//!
//! Errors are returned as `{"error": "<message>"}`.

pub mod customers;
pub mod dashboard;
pub mod error;
pub mod invoices;
pub mod materials;
pub mod orders;
pub mod sales;
pub mod staff;
pub mod workers;

pub use error::ApiError;

use crate::lifecycle::WorkshopSystem;
use axum::Router;
use std::sync::Arc;

/// Handler state: the running system, shared by every request.
pub type AppState = Arc<WorkshopSystem>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(customers::routes())
        .merge(workers::routes())
        .merge(materials::routes())
        .merge(orders::routes())
        .merge(invoices::routes())
        .merge(staff::routes())
        .merge(sales::routes())
        .merge(dashboard::routes())
        .with_state(state)
}

/// Turns a missing record into a 404.
fn found<T>(record: Option<T>, id: impl std::fmt::Display) -> Result<T, ApiError> {
    record.ok_or_else(|| ApiError::not_found(id))
}
