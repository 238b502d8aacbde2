//! Decision Engine
//!
//! Decides incoming orders against the ledger and reports what is holding the
//! business back.
//!
//! ## Architecture
//!
//! - **rules**: Pure evaluation, staff assignment and bottleneck detection
//! - **order**: Order requests and decision outcomes
//! - **agent**: `DecisionAgent`, applying the rules and updating the ledger
//! - **insight**: `InsightEngine`, the once-a-day summary for the dashboard
//!
//! ## Order Flow
//!
//! 1. Validate the request
//! 2. Evaluate stock: unknown item → REJECT, short stock → HOLD
//! 3. Assign a free, skilled staff member, or HOLD
//! 4. Deduct stock, mark the staff member busy, record ACCEPT

mod agent;
mod error;
mod insight;
mod order;
pub mod rules;

pub use agent::DecisionAgent;
pub use error::DecisionError;
pub use insight::{DailySnapshot, InsightEngine};
pub use order::{DecisionOutcome, OrderRequest};
pub use rules::{assign_staff, detect_bottlenecks, evaluate_order, Evaluation};
