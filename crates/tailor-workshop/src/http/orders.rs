//! Tailoring orders and their production lifecycle.

use super::{found, ApiError, AppState};
use crate::model::{InvoiceId, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, WorkerId};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use workshop_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order).put(update_order))
        .route("/api/orders/{id}/assign", post(assign_worker))
        .route("/api/orders/{id}/start", post(start_production))
        .route("/api/orders/{id}/advance", post(advance_stage))
        .route("/api/orders/{id}/deliver", post(mark_delivered))
        .route("/api/orders/{id}/cancel", post(cancel_order))
        .route("/api/orders/{id}/invoice", post(invoice_order))
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub worker_id: WorkerId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CancelRequest {
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct DeliveryReceipt {
    pub order: Order,
    pub points_earned: u64,
}

#[derive(Debug, Serialize)]
pub struct InvoiceCreated {
    pub invoice_id: InvoiceId,
}

async fn reload(state: &AppState, id: OrderId) -> Result<Order, ApiError> {
    found(state.order_client.get(id).await?, id)
}

pub async fn list_orders(State(system): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(system.order_client.list().await?))
}

pub async fn create_order(
    State(system): State<AppState>,
    Json(params): Json<OrderCreate>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let id = system.order_client.create_order(params).await?;
    Ok((StatusCode::CREATED, Json(reload(&system, id).await?)))
}

pub async fn get_order(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(reload(&system, id).await?))
}

/// Due date and notes only; closed orders refuse edits.
pub async fn update_order(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
    Json(update): Json<OrderUpdate>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(system.order_client.update_order(id, update).await?))
}

pub async fn assign_worker(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
    Json(request): Json<AssignRequest>,
) -> Result<Json<Order>, ApiError> {
    system.order_client.assign_worker(id, request.worker_id).await?;
    Ok(Json(reload(&system, id).await?))
}

pub async fn start_production(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, ApiError> {
    system.order_client.start_production(id).await?;
    Ok(Json(reload(&system, id).await?))
}

pub async fn advance_stage(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, ApiError> {
    let status: OrderStatus = system.order_client.advance_stage(id).await?;
    tracing::debug!(%id, %status, "Stage advanced");
    Ok(Json(reload(&system, id).await?))
}

pub async fn mark_delivered(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<DeliveryReceipt>, ApiError> {
    let points_earned = system.order_client.mark_delivered(id).await?;
    Ok(Json(DeliveryReceipt {
        order: reload(&system, id).await?,
        points_earned,
    }))
}

pub async fn cancel_order(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
    Json(request): Json<CancelRequest>,
) -> Result<Json<Order>, ApiError> {
    system.order_client.cancel(id, request.reason).await?;
    Ok(Json(reload(&system, id).await?))
}

pub async fn invoice_order(
    State(system): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<(StatusCode, Json<InvoiceCreated>), ApiError> {
    let invoice_id = system.invoice_order(id).await?;
    Ok((StatusCode::CREATED, Json(InvoiceCreated { invoice_id })))
}
