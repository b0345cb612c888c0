//! The POS register endpoint and the sales journal.

use super::{ApiError, AppState};
use crate::model::Sale;
use crate::pos::{ring_up, CreateSaleRequest, SaleReceipt};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use workshop_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/boutique/pos/create-sale", post(create_sale))
        .route("/api/sales", get(list_sales))
}

pub async fn create_sale(
    State(system): State<AppState>,
    Json(request): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleReceipt>), ApiError> {
    let receipt = ring_up(&system, request).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn list_sales(State(system): State<AppState>) -> Result<Json<Vec<Sale>>, ApiError> {
    Ok(Json(system.sale_client.list().await?))
}
