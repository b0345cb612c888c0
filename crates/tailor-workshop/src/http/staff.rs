//! Roles, permissions and back-office users.

use super::{found, ApiError, AppState};
use crate::model::{Permission, Role, RoleCreate, RoleId, StaffCreate, StaffUser};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use workshop_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/roles", get(list_roles).post(create_role))
        .route("/api/roles/{id}/grant", post(grant_permission))
        .route("/api/roles/{id}/revoke", post(revoke_permission))
        .route("/api/staff", get(list_staff).post(create_staff))
}

#[derive(Debug, Deserialize)]
pub struct PermissionRequest {
    pub permission: Permission,
}

#[derive(Debug, Serialize)]
pub struct PermissionChange {
    /// False when the role already had (or already lacked) the permission.
    pub changed: bool,
    pub role: Role,
}

pub async fn list_roles(State(system): State<AppState>) -> Result<Json<Vec<Role>>, ApiError> {
    Ok(Json(system.role_client.list().await?))
}

pub async fn create_role(
    State(system): State<AppState>,
    Json(params): Json<RoleCreate>,
) -> Result<(StatusCode, Json<Role>), ApiError> {
    let id = system.role_client.create_role(params).await?;
    let role = found(system.role_client.get(id).await?, id)?;
    Ok((StatusCode::CREATED, Json(role)))
}

pub async fn grant_permission(
    State(system): State<AppState>,
    Path(id): Path<RoleId>,
    Json(request): Json<PermissionRequest>,
) -> Result<Json<PermissionChange>, ApiError> {
    let changed = system.role_client.grant(id, request.permission).await?;
    let role = found(system.role_client.get(id).await?, id)?;
    Ok(Json(PermissionChange { changed, role }))
}

pub async fn revoke_permission(
    State(system): State<AppState>,
    Path(id): Path<RoleId>,
    Json(request): Json<PermissionRequest>,
) -> Result<Json<PermissionChange>, ApiError> {
    let changed = system.role_client.revoke(id, request.permission).await?;
    let role = found(system.role_client.get(id).await?, id)?;
    Ok(Json(PermissionChange { changed, role }))
}

pub async fn list_staff(State(system): State<AppState>) -> Result<Json<Vec<StaffUser>>, ApiError> {
    Ok(Json(system.staff_client.list().await?))
}

pub async fn create_staff(
    State(system): State<AppState>,
    Json(params): Json<StaffCreate>,
) -> Result<(StatusCode, Json<StaffUser>), ApiError> {
    let id = system.staff_client.create_staff(params).await?;
    let user = found(system.staff_client.get(id).await?, id)?;
    Ok((StatusCode::CREATED, Json(user)))
}
