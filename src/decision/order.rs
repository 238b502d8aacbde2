//! Order requests and decision outcomes

use serde::{Deserialize, Serialize};

use super::error::DecisionError;
use crate::ledger::Decision;

/// An incoming customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub item_name: String,
    pub quantity: u32,
}

impl OrderRequest {
    /// Reject requests that could never be decided
    pub fn validate(&self) -> Result<(), DecisionError> {
        if self.customer_name.trim().is_empty() {
            return Err(DecisionError::InvalidOrder(
                "customer_name cannot be empty".to_string(),
            ));
        }
        if !self.customer_email.contains('@') {
            return Err(DecisionError::InvalidOrder(
                "customer_email must be an email address".to_string(),
            ));
        }
        if self.item_name.trim().is_empty() {
            return Err(DecisionError::InvalidOrder(
                "item_name cannot be empty".to_string(),
            ));
        }
        if self.quantity == 0 {
            return Err(DecisionError::InvalidOrder(
                "quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Phone number, if one was given and is not blank
    pub fn phone(&self) -> Option<&str> {
        self.customer_phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// The decision sent back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub reason: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_staff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> OrderRequest {
        OrderRequest {
            customer_name: "Lena".to_string(),
            customer_email: "lena@shop.in".to_string(),
            customer_phone: None,
            item_name: "rice".to_string(),
            quantity: 2,
        }
    }

    #[test]
    fn test_valid_order() {
        assert!(order().validate().is_ok());
    }

    #[test]
    fn test_invalid_orders() {
        let mut o = order();
        o.customer_name = "  ".to_string();
        assert!(o.validate().is_err());

        let mut o = order();
        o.customer_email = "lena".to_string();
        assert!(o.validate().is_err());

        let mut o = order();
        o.item_name = String::new();
        assert!(o.validate().is_err());

        let mut o = order();
        o.quantity = 0;
        let err = o.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid order: quantity must be at least 1");
    }

    #[test]
    fn test_phone_blank_is_none() {
        let mut o = order();
        o.customer_phone = Some("  ".to_string());
        assert_eq!(o.phone(), None);
        o.customer_phone = Some(" 555-0101 ".to_string());
        assert_eq!(o.phone(), Some("555-0101"));
    }

    #[test]
    fn test_request_phone_is_optional() {
        let parsed: OrderRequest = serde_json::from_str(
            r#"{"customer_name":"Lena","customer_email":"lena@shop.in","item_name":"rice","quantity":2}"#,
        )
        .unwrap();
        assert_eq!(parsed, order());
    }

    #[test]
    fn test_outcome_omits_missing_fields() {
        let outcome = DecisionOutcome {
            decision: Decision::Reject,
            reason: "Item not found in inventory".to_string(),
            customer_name: "Lena".to_string(),
            customer_email: "lena@shop.in".to_string(),
            assigned_staff: None,
            explanation: None,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"decision\":\"REJECT\""));
        assert!(!json.contains("assigned_staff"));
    }
}
