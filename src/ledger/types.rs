//! Core data types held in the ledger workbooks
//!
//! - `InventoryItem`: stock level and the minimum the business wants on hand
//! - `StaffMember`: who can fulfil which item, and whether they are free
//! - `OrderRecord`: one decided order, as appended to the orders workbook
//! - `Decision`: the outcome of deciding an order

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used in the orders workbook
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalize an item name or skill for comparison
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Stock level for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Trimmed, lower-cased item name
    pub name: String,
    /// Units currently in stock
    pub quantity: i64,
    /// Units below which the item counts as short
    pub min_required: i64,
}

impl InventoryItem {
    pub fn new(name: &str, quantity: i64, min_required: i64) -> Self {
        Self {
            name: normalize_key(name),
            quantity,
            min_required,
        }
    }

    /// Stock has fallen below the configured minimum
    pub fn is_short(&self) -> bool {
        self.quantity < self.min_required
    }
}

/// A staff member and the one item they are skilled to handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Trimmed display name
    pub name: String,
    /// Trimmed, lower-cased skill (matches an item name)
    pub skill: String,
    pub available: bool,
}

impl StaffMember {
    pub fn new(name: &str, skill: &str, available: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            skill: normalize_key(skill),
            available,
        }
    }

    /// Free and skilled for `item`
    pub fn can_handle(&self, item: &str) -> bool {
        self.available && self.skill == normalize_key(item)
    }
}

/// Outcome of deciding an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Accept,
    Hold,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::Hold => "HOLD",
            Decision::Reject => "REJECT",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the orders workbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Local time, formatted with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub item_name: String,
    pub quantity: u32,
    pub decision: Decision,
    #[serde(default)]
    pub assigned_staff: Option<String>,
}

impl OrderRecord {
    /// Record stamped with the current local time
    pub fn now(
        customer_name: &str,
        customer_email: &str,
        customer_phone: Option<&str>,
        item_name: &str,
        quantity: u32,
        decision: Decision,
        assigned_staff: Option<&str>,
    ) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            customer_name: customer_name.to_string(),
            customer_email: customer_email.to_string(),
            customer_phone: customer_phone.map(str::to_string),
            item_name: item_name.to_string(),
            quantity,
            decision,
            assigned_staff: assigned_staff.map(str::to_string),
        }
    }

    /// Day the order was recorded, if the timestamp parses
    pub fn recorded_on(&self) -> Option<NaiveDate> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .ok()
            .map(|dt| dt.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_item_normalizes_name() {
        let item = InventoryItem::new("  Flour ", 3, 5);
        assert_eq!(item.name, "flour");
        assert!(item.is_short());
        assert!(!InventoryItem::new("sugar", 5, 5).is_short());
    }

    #[test]
    fn test_staff_can_handle() {
        let staff = StaffMember::new(" Asha ", "Flour", true);
        assert_eq!(staff.name, "Asha");
        assert!(staff.can_handle("FLOUR "));
        assert!(!staff.can_handle("sugar"));

        let busy = StaffMember::new("Ravi", "flour", false);
        assert!(!busy.can_handle("flour"));
    }

    #[test]
    fn test_decision_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Decision::Hold).unwrap(), "\"HOLD\"");
        let parsed: Decision = serde_json::from_str("\"ACCEPT\"").unwrap();
        assert_eq!(parsed, Decision::Accept);
        assert_eq!(Decision::Reject.to_string(), "REJECT");
    }

    #[test]
    fn test_recorded_on() {
        let mut record = OrderRecord::now("A", "a@b.c", None, "flour", 1, Decision::Accept, None);
        record.timestamp = "2026-03-14 09:30:00".to_string();
        assert_eq!(
            record.recorded_on(),
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );

        record.timestamp = "garbage".to_string();
        assert_eq!(record.recorded_on(), None);
    }
}
