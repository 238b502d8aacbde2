//! Decision Rules
//!
//! Pure functions over ledger snapshots. Nothing here touches the disk.

use crate::ledger::{normalize_key, Decision, InventoryItem, StaffMember};

pub const REASON_ITEM_NOT_FOUND: &str = "Item not found in inventory";
pub const REASON_INSUFFICIENT_STOCK: &str = "Insufficient stock";
pub const REASON_IN_STOCK: &str = "Inventory available";
pub const REASON_NO_STAFF: &str = "No available staff with required skill";
pub const REASON_ACCEPTED: &str = "Inventory and staff available";

/// Result of checking an order against stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Stock covers the order; staff assignment comes next
    Pass,
    /// The order cannot proceed, with the decision and reason to record
    Stop(Decision, &'static str),
}

impl Evaluation {
    pub fn reason(&self) -> &'static str {
        match self {
            Evaluation::Pass => REASON_IN_STOCK,
            Evaluation::Stop(_, reason) => reason,
        }
    }
}

/// Check whether `quantity` units of `item` can be served from stock
pub fn evaluate_order(item: &str, quantity: u32, inventory: &[InventoryItem]) -> Evaluation {
    let key = normalize_key(item);

    match inventory.iter().find(|i| i.name == key) {
        None => Evaluation::Stop(Decision::Reject, REASON_ITEM_NOT_FOUND),
        Some(stock) if stock.quantity < i64::from(quantity) => {
            Evaluation::Stop(Decision::Hold, REASON_INSUFFICIENT_STOCK)
        }
        Some(_) => Evaluation::Pass,
    }
}

/// First available staff member skilled for `item`, in roster order
pub fn assign_staff<'a>(item: &str, staff: &'a [StaffMember]) -> Option<&'a StaffMember> {
    staff.iter().find(|member| member.can_handle(item))
}

/// Operational constraints, item by item in inventory order
pub fn detect_bottlenecks(inventory: &[InventoryItem], staff: &[StaffMember]) -> Vec<String> {
    let mut bottlenecks = Vec::new();

    for item in inventory {
        if item.is_short() {
            bottlenecks.push(format!("Inventory shortage: {}", item.name));
        }

        if assign_staff(&item.name, staff).is_none() {
            bottlenecks.push(format!("Staff unavailable for: {}", item.name));
        }
    }

    bottlenecks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("rice", 120, 50),
            InventoryItem::new("flour", 18, 40),
            InventoryItem::new("sugar", 60, 25),
        ]
    }

    fn staff() -> Vec<StaffMember> {
        vec![
            StaffMember::new("Asha", "rice", true),
            StaffMember::new("Ravi", "flour", true),
            StaffMember::new("Meena", "sugar", false),
            StaffMember::new("Dev", "rice", true),
        ]
    }

    #[test]
    fn test_evaluate_unknown_item() {
        let eval = evaluate_order("saffron", 1, &inventory());
        assert_eq!(eval, Evaluation::Stop(Decision::Reject, REASON_ITEM_NOT_FOUND));
    }

    #[test]
    fn test_evaluate_insufficient_stock() {
        let eval = evaluate_order(" Flour", 19, &inventory());
        assert_eq!(eval, Evaluation::Stop(Decision::Hold, REASON_INSUFFICIENT_STOCK));
    }

    #[test]
    fn test_evaluate_exact_stock_passes() {
        assert_eq!(evaluate_order("FLOUR", 18, &inventory()), Evaluation::Pass);
        assert_eq!(Evaluation::Pass.reason(), REASON_IN_STOCK);
    }

    #[test]
    fn test_assign_staff_picks_first_available() {
        let staff = staff();
        assert_eq!(assign_staff("Rice", &staff).map(|s| s.name.as_str()), Some("Asha"));
        assert!(assign_staff("sugar", &staff).is_none());
        assert!(assign_staff("salt", &staff).is_none());
    }

    #[test]
    fn test_detect_bottlenecks_in_inventory_order() {
        let bottlenecks = detect_bottlenecks(&inventory(), &staff());
        assert_eq!(
            bottlenecks,
            vec![
                "Inventory shortage: flour".to_string(),
                "Staff unavailable for: sugar".to_string(),
            ]
        );
    }

    #[test]
    fn test_item_can_have_both_bottlenecks() {
        let inventory = vec![InventoryItem::new("oil", 1, 10)];
        let bottlenecks = detect_bottlenecks(&inventory, &[]);
        assert_eq!(
            bottlenecks,
            vec![
                "Inventory shortage: oil".to_string(),
                "Staff unavailable for: oil".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_bottlenecks() {
        let inventory = vec![InventoryItem::new("rice", 100, 10)];
        let staff = vec![StaffMember::new("Asha", "rice", true)];
        assert!(detect_bottlenecks(&inventory, &staff).is_empty());
    }
}
