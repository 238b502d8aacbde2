//! Order intake form state.

use crate::api::{DecisionResponse, OrderRequest};

/// Raw form fields as typed by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub item_name: String,
    pub quantity: String,
}

impl OrderDraft {
    /// Check the fields and build a request, or describe the first problem
    pub fn validate(&self) -> Result<OrderRequest, String> {
        let name = self.customer_name.trim();
        let email = self.customer_email.trim();
        let item = self.item_name.trim();

        if name.is_empty() {
            return Err("Customer name is required".to_string());
        }
        if email.is_empty() {
            return Err("Customer email is required".to_string());
        }
        if !email.contains('@') {
            return Err("Customer email must contain '@'".to_string());
        }
        if item.is_empty() {
            return Err("Item name is required".to_string());
        }

        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| "Quantity must be a whole number of at least 1".to_string())?;

        let phone = self.customer_phone.trim();

        Ok(OrderRequest {
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            customer_phone: (!phone.is_empty()).then(|| phone.to_string()),
            item_name: item.to_string(),
            quantity,
        })
    }
}

/// Where the last submission stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OrderStatus {
    #[default]
    Idle,
    Submitting,
    Decided(DecisionResponse),
    Invalid(String),
    Failed(String),
}

impl OrderStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, OrderStatus::Submitting)
    }

    /// Tailwind colour class for a decision badge
    pub fn badge_class(decision: &str) -> &'static str {
        match decision {
            "ACCEPT" => "bg-green-600",
            "HOLD" => "bg-yellow-600",
            _ => "bg-red-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: " Lena ".to_string(),
            customer_email: "lena@shop.in".to_string(),
            customer_phone: String::new(),
            item_name: "Rice".to_string(),
            quantity: "3".to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let request = draft().validate().unwrap();
        assert_eq!(request.customer_name, "Lena");
        assert_eq!(request.customer_phone, None);
        assert_eq!(request.item_name, "Rice");
        assert_eq!(request.quantity, 3);
    }

    #[test]
    fn test_phone_kept_when_given() {
        let mut d = draft();
        d.customer_phone = " 98450 12345 ".to_string();
        assert_eq!(d.validate().unwrap().customer_phone.as_deref(), Some("98450 12345"));
    }

    #[test]
    fn test_rejects_bad_fields() {
        let mut d = draft();
        d.customer_name = "  ".to_string();
        assert!(d.validate().is_err());

        let mut d = draft();
        d.customer_email = "lena.shop.in".to_string();
        assert!(d.validate().unwrap_err().contains('@'));

        let mut d = draft();
        d.item_name = String::new();
        assert!(d.validate().is_err());

        for bad in ["0", "-2", "two", ""] {
            let mut d = draft();
            d.quantity = bad.to_string();
            assert!(d.validate().is_err(), "quantity {:?} accepted", bad);
        }
    }

    #[test]
    fn test_status_helpers() {
        assert!(OrderStatus::Submitting.is_submitting());
        assert!(!OrderStatus::Idle.is_submitting());
        assert_eq!(OrderStatus::badge_class("ACCEPT"), "bg-green-600");
        assert_eq!(OrderStatus::badge_class("REJECT"), "bg-red-600");
    }
}
