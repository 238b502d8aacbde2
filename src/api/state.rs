//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::ApiConfig;
use crate::decision::{DecisionAgent, InsightEngine};
use crate::ledger::Ledger;
use crate::llm::Explainer;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Workbooks holding inventory, staff and orders
    pub ledger: Arc<Ledger>,
    /// Order decisions and bottleneck detection
    pub agent: Arc<DecisionAgent>,
    /// Daily insight generation
    pub insights: Arc<InsightEngine>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state over a ledger, sharing one explainer between engines
    pub fn new(ledger: Arc<Ledger>, explainer: Explainer, config: ApiConfig) -> Self {
        let agent = Arc::new(DecisionAgent::new(Arc::clone(&ledger), explainer.clone()));
        let insights = Arc::new(InsightEngine::new(Arc::clone(&ledger), explainer));

        Self {
            ledger,
            agent,
            insights,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check if LLM explanations are available
    pub fn has_llm(&self) -> bool {
        self.agent.explainer().has_llm()
    }
}
