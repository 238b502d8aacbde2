//! Decision Agent
//!
//! Applies the decision rules to fresh ledger snapshots and records every
//! decided order.

use std::sync::Arc;
use tokio::sync::Mutex;

use super::error::DecisionError;
use super::order::{DecisionOutcome, OrderRequest};
use super::rules::{self, Evaluation};
use crate::ledger::{Decision, Ledger, OrderRecord};
use crate::llm::Explainer;

/// Decides orders and detects bottlenecks
pub struct DecisionAgent {
    ledger: Arc<Ledger>,
    explainer: Explainer,
    /// Serializes read-modify-write cycles over the workbooks
    write_lock: Mutex<()>,
}

impl DecisionAgent {
    /// Create a new decision agent
    pub fn new(ledger: Arc<Ledger>, explainer: Explainer) -> Self {
        Self {
            ledger,
            explainer,
            write_lock: Mutex::new(()),
        }
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    pub fn explainer(&self) -> &Explainer {
        &self.explainer
    }

    /// Decide an order and record the outcome in the orders workbook.
    ///
    /// Stock deduction and staff assignment happen under one lock, so two
    /// concurrent orders never claim the same units or the same person.
    pub async fn decide(&self, order: &OrderRequest) -> Result<DecisionOutcome, DecisionError> {
        order.validate()?;

        let (decision, reason, staff) = {
            let _guard = self.write_lock.lock().await;
            self.apply(order)?
        };

        tracing::info!(
            item = %order.item_name,
            quantity = order.quantity,
            decision = %decision,
            staff = staff.as_deref().unwrap_or("-"),
            "Order decided"
        );

        let explanation = self
            .explainer
            .explain_decision(decision, &order.item_name, order.quantity, staff.as_deref(), reason)
            .await;

        Ok(DecisionOutcome {
            decision,
            reason: reason.to_string(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            assigned_staff: staff,
            explanation: Some(explanation),
        })
    }

    /// Run the rules and update the ledger. Caller holds the write lock.
    fn apply(
        &self,
        order: &OrderRequest,
    ) -> Result<(Decision, &'static str, Option<String>), DecisionError> {
        let inventory = self.ledger.load_inventory()?;

        if let Evaluation::Stop(decision, reason) =
            rules::evaluate_order(&order.item_name, order.quantity, &inventory)
        {
            self.record(order, decision, None)?;
            return Ok((decision, reason, None));
        }

        let staff = self.ledger.load_staff()?;
        let Some(member) = rules::assign_staff(&order.item_name, &staff) else {
            self.record(order, Decision::Hold, None)?;
            return Ok((Decision::Hold, rules::REASON_NO_STAFF, None));
        };
        let name = member.name.clone();

        self.ledger
            .deduct_inventory(&order.item_name, order.quantity)?;
        self.ledger.mark_staff_unavailable(&name)?;
        self.record(order, Decision::Accept, Some(&name))?;

        Ok((Decision::Accept, rules::REASON_ACCEPTED, Some(name)))
    }

    fn record(
        &self,
        order: &OrderRequest,
        decision: Decision,
        staff: Option<&str>,
    ) -> Result<(), DecisionError> {
        let record = OrderRecord::now(
            &order.customer_name,
            &order.customer_email,
            order.phone(),
            &order.item_name,
            order.quantity,
            decision,
            staff,
        );
        self.ledger.append_order(&record)?;
        Ok(())
    }

    /// Current bottlenecks over fresh workbooks
    pub async fn bottlenecks(&self) -> Result<Vec<String>, DecisionError> {
        let inventory = self.ledger.load_inventory()?;
        let staff = self.ledger.load_staff()?;
        let bottlenecks = rules::detect_bottlenecks(&inventory, &staff);

        tracing::debug!(count = bottlenecks.len(), "Bottlenecks detected");
        Ok(bottlenecks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;
    use crate::ledger::{InventoryItem, StaffMember};
    use tempfile::{tempdir, TempDir};

    fn create_agent() -> (DecisionAgent, TempDir) {
        let dir = tempdir().unwrap();
        let ledger = Ledger::new(LedgerConfig::new(dir.path())).unwrap();
        ledger
            .write_inventory(&[
                InventoryItem::new("rice", 10, 5),
                InventoryItem::new("flour", 2, 5),
                InventoryItem::new("sugar", 50, 5),
            ])
            .unwrap();
        ledger
            .write_staff(&[
                StaffMember::new("Asha", "rice", true),
                StaffMember::new("Ravi", "flour", true),
                StaffMember::new("Meena", "sugar", false),
            ])
            .unwrap();

        let agent = DecisionAgent::new(Arc::new(ledger), Explainer::template_only());
        (agent, dir)
    }

    fn order(item: &str, quantity: u32) -> OrderRequest {
        OrderRequest {
            customer_name: "Lena".to_string(),
            customer_email: "lena@shop.in".to_string(),
            customer_phone: Some("555-0101".to_string()),
            item_name: item.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_accept_updates_ledger() {
        let (agent, _dir) = create_agent();

        let outcome = agent.decide(&order("Rice", 4)).await.unwrap();
        assert_eq!(outcome.decision, Decision::Accept);
        assert_eq!(outcome.reason, "Inventory and staff available");
        assert_eq!(outcome.assigned_staff.as_deref(), Some("Asha"));
        assert!(outcome.explanation.unwrap().contains("Asha"));

        let ledger = agent.ledger();
        assert_eq!(ledger.load_inventory().unwrap()[0].quantity, 6);
        assert!(!ledger.load_staff().unwrap()[0].available);

        let orders = ledger.load_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].decision, Decision::Accept);
        assert_eq!(orders[0].assigned_staff.as_deref(), Some("Asha"));
        assert_eq!(orders[0].customer_phone.as_deref(), Some("555-0101"));
    }

    #[tokio::test]
    async fn test_second_order_holds_without_staff() {
        let (agent, _dir) = create_agent();

        agent.decide(&order("rice", 1)).await.unwrap();
        let outcome = agent.decide(&order("rice", 1)).await.unwrap();

        assert_eq!(outcome.decision, Decision::Hold);
        assert_eq!(outcome.reason, "No available staff with required skill");
        assert_eq!(outcome.assigned_staff, None);
        // Stock is untouched by a held order
        assert_eq!(agent.ledger().load_inventory().unwrap()[0].quantity, 9);
    }

    #[tokio::test]
    async fn test_reject_unknown_item() {
        let (agent, _dir) = create_agent();

        let outcome = agent.decide(&order("saffron", 1)).await.unwrap();
        assert_eq!(outcome.decision, Decision::Reject);
        assert_eq!(outcome.reason, "Item not found in inventory");

        let orders = agent.ledger().load_orders().unwrap();
        assert_eq!(orders[0].decision, Decision::Reject);
    }

    #[tokio::test]
    async fn test_hold_on_insufficient_stock() {
        let (agent, _dir) = create_agent();

        let outcome = agent.decide(&order("flour", 3)).await.unwrap();
        assert_eq!(outcome.decision, Decision::Hold);
        assert_eq!(outcome.reason, "Insufficient stock");
        assert!(agent.ledger().load_staff().unwrap()[1].available);
    }

    #[tokio::test]
    async fn test_invalid_order_is_not_recorded() {
        let (agent, _dir) = create_agent();

        let result = agent.decide(&order("rice", 0)).await;
        assert!(matches!(result, Err(DecisionError::InvalidOrder(_))));
        assert!(agent.ledger().load_orders().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_orders_share_one_staff_member() {
        let (agent, _dir) = create_agent();
        let agent = Arc::new(agent);

        let a = tokio::spawn({
            let agent = Arc::clone(&agent);
            async move { agent.decide(&order("rice", 1)).await.unwrap() }
        });
        let b = tokio::spawn({
            let agent = Arc::clone(&agent);
            async move { agent.decide(&order("rice", 1)).await.unwrap() }
        });

        let outcomes = [a.await.unwrap(), b.await.unwrap()];
        let accepted = outcomes
            .iter()
            .filter(|o| o.decision == Decision::Accept)
            .count();
        assert_eq!(accepted, 1);
    }

    #[tokio::test]
    async fn test_bottlenecks() {
        let (agent, _dir) = create_agent();

        let bottlenecks = agent.bottlenecks().await.unwrap();
        assert_eq!(
            bottlenecks,
            vec![
                "Inventory shortage: flour".to_string(),
                "Staff unavailable for: sugar".to_string(),
            ]
        );
    }
}
