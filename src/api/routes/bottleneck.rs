//! Bottleneck Routes
//!
//! - GET /bottleneck - Current inventory shortages and staffing gaps

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::BottleneckResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /bottleneck
pub async fn check_bottlenecks(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BottleneckResponse>> {
    let bottlenecks = state.agent.bottlenecks().await?;
    Ok(Json(BottleneckResponse { bottlenecks }))
}
