//! Customer records, measurements and the loyalty ledger.

use super::{found, ApiError, AppState};
use crate::customer_actor::LoyaltyReceipt;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use workshop_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/api/customers/{id}/measurements", post(record_measurement))
        .route("/api/customers/{id}/loyalty/earn", post(earn_points))
        .route("/api/customers/{id}/loyalty/redeem", post(redeem_points))
}

#[derive(Debug, Deserialize)]
pub struct MeasurementRequest {
    pub name: String,
    pub value_cm: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct EarnRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct RedeemRequest {
    pub points: u64,
}

pub async fn list_customers(State(system): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(system.customer_client.list().await?))
}

pub async fn create_customer(
    State(system): State<AppState>,
    Json(params): Json<CustomerCreate>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let id = system.customer_client.create_customer(params).await?;
    let customer = found(system.customer_client.get(id).await?, id)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn get_customer(
    State(system): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(found(system.customer_client.get(id).await?, id)?))
}

pub async fn update_customer(
    State(system): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(update): Json<CustomerUpdate>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(system.customer_client.update_customer(id, update).await?))
}

pub async fn delete_customer(
    State(system): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode, ApiError> {
    system.customer_client.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn record_measurement(
    State(system): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(request): Json<MeasurementRequest>,
) -> Result<Json<Customer>, ApiError> {
    system
        .customer_client
        .record_measurement(id, request.name, request.value_cm)
        .await?;
    Ok(Json(found(system.customer_client.get(id).await?, id)?))
}

pub async fn earn_points(
    State(system): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(request): Json<EarnRequest>,
) -> Result<Json<LoyaltyReceipt>, ApiError> {
    Ok(Json(system.customer_client.earn_points(id, request.amount).await?))
}

pub async fn redeem_points(
    State(system): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(request): Json<RedeemRequest>,
) -> Result<Json<LoyaltyReceipt>, ApiError> {
    Ok(Json(system.customer_client.redeem_points(id, request.points).await?))
}
