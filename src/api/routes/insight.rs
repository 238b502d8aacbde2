//! Insight Routes
//!
//! - GET /daily-insight - One-sentence summary of today's operations

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DailyInsightResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /daily-insight
pub async fn daily_insight(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DailyInsightResponse>> {
    let text = state.insights.daily_insight().await?;
    Ok(Json(DailyInsightResponse { text }))
}
