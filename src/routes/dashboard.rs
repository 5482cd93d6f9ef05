//! Dashboard routes: aggregated view, goal inspection, cache refresh.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::{ApiResponse, AppError};
use crate::services::dashboard::{self, DashboardView, GoalBreakdown};
use crate::AppState;

/// Outcome of a manual cache refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResult {
    pub cleared: bool,
}

/// GET /api/v1/dashboard, the aggregated dashboard view.
pub async fn view(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardView>>, AppError> {
    let view = dashboard::get_view(&state).await?;
    Ok(ApiResponse::success(view))
}

/// GET /api/v1/goals/debug, the per-record goal extraction breakdown.
pub async fn goals_debug(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GoalBreakdown>>, AppError> {
    let breakdown = dashboard::goal_breakdown(&state).await?;
    Ok(ApiResponse::success(breakdown))
}

/// POST /api/v1/cache/refresh, drop cached query results so the next
/// read fetches fresh data.
pub async fn refresh_cache(State(state): State<AppState>) -> Json<ApiResponse<RefreshResult>> {
    state.cache.clear();
    tracing::info!("query cache cleared by manual refresh");
    ApiResponse::success(RefreshResult { cleared: true })
}
