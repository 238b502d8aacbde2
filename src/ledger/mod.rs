//! OpsDesk Ledger
//!
//! CSV workbooks holding the business state the decision service works on:
//!
//! - **types**: Inventory items, staff members, order records, decisions
//! - **store**: The `Ledger`, reading and rewriting the workbooks
//! - **error**: Error types
//!
//! Workbooks are re-read on every call so that edits made by the owner in a
//! spreadsheet tool are picked up without a restart. Excel workbooks must be
//! saved as CSV with the same headers; padded cells are trimmed on load.
//!
//! # Example
//!
//! ```rust,no_run
//! use opsdesk::config::LedgerConfig;
//! use opsdesk::ledger::Ledger;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = Ledger::new(LedgerConfig::new("./opsdesk_data"))?;
//! for item in ledger.load_inventory()? {
//!     println!("{}: {} (min {})", item.name, item.quantity, item.min_required);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::{LedgerError, LedgerResult};
pub use store::Ledger;
pub use types::{normalize_key, Decision, InventoryItem, OrderRecord, StaffMember, TIMESTAMP_FORMAT};
