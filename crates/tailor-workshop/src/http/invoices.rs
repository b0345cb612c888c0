//! Invoices and payments. Invoices are raised by order and sale workflows, never posted
//! directly.

use super::{found, ApiError, AppState};
use crate::model::{Invoice, InvoiceId, InvoiceStatus};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use workshop_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/invoices", get(list_invoices))
        .route("/api/invoices/{id}", get(get_invoice))
        .route("/api/invoices/{id}/payments", post(record_payment))
        .route("/api/invoices/{id}/void", post(void_invoice))
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PaymentReceipt {
    pub id: InvoiceId,
    pub status: InvoiceStatus,
    pub balance: Decimal,
}

pub async fn list_invoices(State(system): State<AppState>) -> Result<Json<Vec<Invoice>>, ApiError> {
    Ok(Json(system.invoice_client.list().await?))
}

pub async fn get_invoice(
    State(system): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<Json<Invoice>, ApiError> {
    Ok(Json(found(system.invoice_client.get(id).await?, id)?))
}

pub async fn record_payment(
    State(system): State<AppState>,
    Path(id): Path<InvoiceId>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentReceipt>, ApiError> {
    let (status, balance) = system.invoice_client.record_payment(id, request.amount).await?;
    Ok(Json(PaymentReceipt { id, status, balance }))
}

pub async fn void_invoice(
    State(system): State<AppState>,
    Path(id): Path<InvoiceId>,
) -> Result<Json<Invoice>, ApiError> {
    system.invoice_client.void(id).await?;
    Ok(Json(found(system.invoice_client.get(id).await?, id)?))
}
