//! OpsDesk API Server
//!
//! Run with: cargo run --bin opsdesk-api
//!
//! # Configuration
//!
//! Read from `config.toml` (see `opsdesk-cli config`), then overridden by:
//! - `OPSDESK_API_HOST` / `OPSDESK_API_PORT`: Bind address (default: 127.0.0.1:8000)
//! - `OPSDESK_DATA_DIR`: Directory holding the CSV workbooks
//! - `OPSDESK_LLM_API_KEY` or `GROQ_API_KEY`: Enables LLM explanations
//! - `OPSDESK_SEED_DEMO`: Write demo workbooks if none exist (default: false)
//! - `RUST_LOG`: Log filter (default: opsdesk=info,tower_http=debug)

use opsdesk::api::{serve, AppState};
use opsdesk::config::Config;
use opsdesk::ledger::Ledger;
use opsdesk::llm::Explainer;
use opsdesk::telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    telemetry::init(&config.logging);

    tracing::info!("Starting OpsDesk API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {:?}", config.ledger.data_dir);

    let ledger = Arc::new(Ledger::new(config.ledger.clone())?);

    let seed_demo = std::env::var("OPSDESK_SEED_DEMO")
        .map(|s| s.to_lowercase() == "true" || s == "1")
        .unwrap_or(false);
    if seed_demo {
        ledger.seed_demo()?;
    }

    match (ledger.load_inventory(), ledger.load_staff()) {
        (Ok(items), Ok(staff)) => {
            tracing::info!("Ledger loaded: {} items, {} staff", items.len(), staff.len())
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Ledger not ready: {} (set OPSDESK_SEED_DEMO=1 for demo data)", e)
        }
    }

    let explainer = Explainer::from_config(&config.llm);
    let state = AppState::new(ledger, explainer, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state).await?;

    tracing::info!("OpsDesk API server stopped");
    Ok(())
}
