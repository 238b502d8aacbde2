use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors that can occur while deciding an order
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The order request failed validation
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
