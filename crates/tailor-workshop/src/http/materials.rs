//! Inventory.

use super::{found, ApiError, AppState};
use crate::model::{Material, MaterialCreate, MaterialId, MaterialUpdate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use workshop_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/materials", get(list_materials).post(create_material))
        .route(
            "/api/materials/{id}",
            get(get_material).put(update_material).delete(delete_material),
        )
        .route("/api/materials/{id}/restock", post(restock_material))
}

#[derive(Debug, Deserialize)]
pub struct RestockRequest {
    pub quantity: Decimal,
}

#[derive(Debug, Serialize)]
pub struct StockLevel {
    pub id: MaterialId,
    pub quantity: Decimal,
}

pub async fn list_materials(State(system): State<AppState>) -> Result<Json<Vec<Material>>, ApiError> {
    Ok(Json(system.material_client.list().await?))
}

pub async fn create_material(
    State(system): State<AppState>,
    Json(params): Json<MaterialCreate>,
) -> Result<(StatusCode, Json<Material>), ApiError> {
    let id = system.material_client.create_material(params).await?;
    let material = found(system.material_client.get(id).await?, id)?;
    Ok((StatusCode::CREATED, Json(material)))
}

pub async fn get_material(
    State(system): State<AppState>,
    Path(id): Path<MaterialId>,
) -> Result<Json<Material>, ApiError> {
    Ok(Json(found(system.material_client.get(id).await?, id)?))
}

pub async fn update_material(
    State(system): State<AppState>,
    Path(id): Path<MaterialId>,
    Json(update): Json<MaterialUpdate>,
) -> Result<Json<Material>, ApiError> {
    Ok(Json(system.material_client.update_material(id, update).await?))
}

pub async fn delete_material(
    State(system): State<AppState>,
    Path(id): Path<MaterialId>,
) -> Result<StatusCode, ApiError> {
    system.material_client.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restock_material(
    State(system): State<AppState>,
    Path(id): Path<MaterialId>,
    Json(request): Json<RestockRequest>,
) -> Result<Json<StockLevel>, ApiError> {
    let quantity = system.material_client.restock(id, request.quantity).await?;
    Ok(Json(StockLevel { id, quantity }))
}
