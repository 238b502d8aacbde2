//! Order Routes
//!
//! - POST /order - Decide an order
//! - GET /orders - Recorded orders, most recent first

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DecisionResponse, OrderRequest, OrdersQuery, OrdersResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /order
///
/// Decides the order against current stock and staff, records it, and returns
/// the decision with a short explanation.
pub async fn submit_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OrderRequest>,
) -> ApiResult<Json<DecisionResponse>> {
    let outcome = state.agent.decide(&req).await?;
    Ok(Json(outcome))
}

/// GET /orders?limit=N
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrdersQuery>,
) -> ApiResult<Json<OrdersResponse>> {
    let mut orders = state.ledger.load_orders()?;
    let total = orders.len();

    orders.reverse();
    if let Some(limit) = query.limit {
        orders.truncate(limit);
    }

    Ok(Json(OrdersResponse { orders, total }))
}
