//! # OpsDesk
//!
//! Decision-centric operations desk for small and medium businesses.
//!
//! ## Features
//!
//! - **Order decisions**: accept, hold or reject orders against live stock and staff
//! - **Bottleneck detection**: stock shortages and unstaffed items
//! - **Daily insight**: one sentence summarising the day for the owner
//! - **Explanations**: optional LLM phrasing with template fallbacks
//!
//! ## Modules
//!
//! - [`ledger`]: CSV workbooks for inventory, staff and orders
//! - [`decision`]: Decision rules, the decision agent and the insight engine
//! - [`llm`]: Chat-completions client and explanation prompts
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use opsdesk::config::LedgerConfig;
//! use opsdesk::decision::{DecisionAgent, OrderRequest};
//! use opsdesk::ledger::Ledger;
//! use opsdesk::llm::Explainer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ledger = Arc::new(Ledger::new(LedgerConfig::new("./opsdesk_data"))?);
//!     ledger.seed_demo()?;
//!
//!     let agent = DecisionAgent::new(ledger, Explainer::template_only());
//!     let outcome = agent
//!         .decide(&OrderRequest {
//!             customer_name: "Lena".into(),
//!             customer_email: "lena@shop.in".into(),
//!             customer_phone: None,
//!             item_name: "rice".into(),
//!             quantity: 5,
//!         })
//!         .await?;
//!
//!     println!("{}: {}", outcome.decision, outcome.reason);
//!     println!("Bottlenecks: {:?}", agent.bottlenecks().await?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod decision;
pub mod ledger;
pub mod llm;
pub mod telemetry;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LedgerConfig, LlmConfig, LoggingConfig};

pub use decision::{
    detect_bottlenecks, DailySnapshot, DecisionAgent, DecisionError, DecisionOutcome,
    InsightEngine, OrderRequest,
};

pub use ledger::{Decision, InventoryItem, Ledger, LedgerError, OrderRecord, StaffMember};

pub use llm::{Explainer, LlmClient, LlmError};
