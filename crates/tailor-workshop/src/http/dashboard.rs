use super::{ApiError, AppState};
use crate::analytics::Dashboard;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(dashboard))
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Reference day for overdue checks, defaults to today (UTC).
    pub date: Option<NaiveDate>,
}

pub async fn dashboard(
    State(system): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Dashboard>, ApiError> {
    let today = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(system.dashboard(today).await?))
}
