//! Workers and payroll.

use super::{found, ApiError, AppState};
use crate::model::{PayrollSlip, Worker, WorkerCreate, WorkerId, WorkerUpdate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use workshop_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/workers", get(list_workers).post(create_worker))
        .route(
            "/api/workers/{id}",
            get(get_worker).put(update_worker).delete(delete_worker),
        )
        .route("/api/workers/{id}/payroll", post(run_payroll))
}

#[derive(Debug, Deserialize)]
pub struct PayrollRequest {
    /// Pay period label, e.g. `2024-06`.
    pub period: String,
}

pub async fn list_workers(State(system): State<AppState>) -> Result<Json<Vec<Worker>>, ApiError> {
    Ok(Json(system.worker_client.list().await?))
}

pub async fn create_worker(
    State(system): State<AppState>,
    Json(params): Json<WorkerCreate>,
) -> Result<(StatusCode, Json<Worker>), ApiError> {
    let id = system.worker_client.create_worker(params).await?;
    let worker = found(system.worker_client.get(id).await?, id)?;
    Ok((StatusCode::CREATED, Json(worker)))
}

pub async fn get_worker(
    State(system): State<AppState>,
    Path(id): Path<WorkerId>,
) -> Result<Json<Worker>, ApiError> {
    Ok(Json(found(system.worker_client.get(id).await?, id)?))
}

pub async fn update_worker(
    State(system): State<AppState>,
    Path(id): Path<WorkerId>,
    Json(update): Json<WorkerUpdate>,
) -> Result<Json<Worker>, ApiError> {
    Ok(Json(system.worker_client.update_worker(id, update).await?))
}

/// Refused while open orders are assigned to the worker.
pub async fn delete_worker(
    State(system): State<AppState>,
    Path(id): Path<WorkerId>,
) -> Result<StatusCode, ApiError> {
    system.delete_worker(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn run_payroll(
    State(system): State<AppState>,
    Path(id): Path<WorkerId>,
    Json(request): Json<PayrollRequest>,
) -> Result<Json<PayrollSlip>, ApiError> {
    Ok(Json(system.worker_client.run_payroll(id, request.period).await?))
}
