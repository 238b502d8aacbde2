//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::ledger::OrderRecord;

pub use crate::decision::{DecisionOutcome as DecisionResponse, OrderRequest};

/// GET /bottleneck response
#[derive(Debug, Serialize, Deserialize)]
pub struct BottleneckResponse {
    pub bottlenecks: Vec<String>,
}

/// GET /daily-insight response
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyInsightResponse {
    pub text: String,
}

/// GET /orders query parameters
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// Maximum number of orders to return (most recent first)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// GET /orders response
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderRecord>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy", "degraded"
    pub status: String,
    /// Ledger status: "ok" or "error"
    pub ledger: String,
    /// Whether explanations come from an LLM
    pub llm_enabled: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
