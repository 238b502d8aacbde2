//! Daily Insight
//!
//! Summarises today's orders and the current stock and staffing gaps into one
//! sentence for the dashboard. Rule-based, optionally rephrased by the LLM.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use super::error::DecisionError;
use super::rules;
use crate::ledger::{Decision, InventoryItem, Ledger, OrderRecord, StaffMember};
use crate::llm::Explainer;

/// Facts the daily insight is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub accepted: usize,
    pub held: usize,
    pub rejected: usize,
    /// Items below their minimum stock, inventory order
    pub shortages: Vec<String>,
    /// Items nobody free can handle, inventory order
    pub unstaffed: Vec<String>,
}

impl DailySnapshot {
    /// Build the snapshot for `date` from ledger contents
    pub fn collect(
        date: NaiveDate,
        orders: &[OrderRecord],
        inventory: &[InventoryItem],
        staff: &[StaffMember],
    ) -> Self {
        let mut snapshot = Self {
            date,
            accepted: 0,
            held: 0,
            rejected: 0,
            shortages: Vec::new(),
            unstaffed: Vec::new(),
        };

        for order in orders.iter().filter(|o| o.recorded_on() == Some(date)) {
            match order.decision {
                Decision::Accept => snapshot.accepted += 1,
                Decision::Hold => snapshot.held += 1,
                Decision::Reject => snapshot.rejected += 1,
            }
        }

        for item in inventory {
            if item.is_short() {
                snapshot.shortages.push(item.name.clone());
            }
            if rules::assign_staff(&item.name, staff).is_none() {
                snapshot.unstaffed.push(item.name.clone());
            }
        }

        snapshot
    }

    pub fn total_orders(&self) -> usize {
        self.accepted + self.held + self.rejected
    }

    /// One line per fact, for prompting
    pub fn facts(&self) -> Vec<String> {
        let mut facts = vec![
            format!("Date: {}", self.date.format("%Y-%m-%d")),
            format!(
                "Orders today: {} ({} accepted, {} on hold, {} rejected)",
                self.total_orders(),
                self.accepted,
                self.held,
                self.rejected
            ),
        ];

        if !self.shortages.is_empty() {
            facts.push(format!("Below minimum stock: {}", self.shortages.join(", ")));
        }
        if !self.unstaffed.is_empty() {
            facts.push(format!("No available staff for: {}", self.unstaffed.join(", ")));
        }

        facts
    }

    /// Rule-based summary sentence
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        let total = self.total_orders();
        parts.push(if total == 0 {
            "No orders recorded today".to_string()
        } else {
            format!(
                "{} order{} today: {} accepted, {} on hold, {} rejected",
                total,
                if total == 1 { "" } else { "s" },
                self.accepted,
                self.held,
                self.rejected
            )
        });

        parts.push(match self.shortages.len() {
            0 => "all items are at or above minimum stock".to_string(),
            1 => format!("1 item below minimum stock ({})", self.shortages[0]),
            n => format!("{} items below minimum stock ({})", n, self.shortages.join(", ")),
        });

        if !self.unstaffed.is_empty() {
            parts.push(format!("no free staff for {}", self.unstaffed.join(", ")));
        }

        format!("{}.", parts.join("; "))
    }
}

/// Produces the daily insight shown on the dashboard
pub struct InsightEngine {
    ledger: Arc<Ledger>,
    explainer: Explainer,
}

impl InsightEngine {
    /// Create a new insight engine
    pub fn new(ledger: Arc<Ledger>, explainer: Explainer) -> Self {
        Self { ledger, explainer }
    }

    /// Snapshot of today's ledger state
    pub async fn snapshot(&self) -> Result<DailySnapshot, DecisionError> {
        let today = Local::now().date_naive();
        let orders = self.ledger.load_orders()?;
        let inventory = self.ledger.load_inventory()?;
        let staff = self.ledger.load_staff()?;

        Ok(DailySnapshot::collect(today, &orders, &inventory, &staff))
    }

    /// Today's insight sentence
    pub async fn daily_insight(&self) -> Result<String, DecisionError> {
        let snapshot = self.snapshot().await?;

        tracing::debug!(
            orders = snapshot.total_orders(),
            shortages = snapshot.shortages.len(),
            unstaffed = snapshot.unstaffed.len(),
            "Built daily snapshot"
        );

        let fallback = snapshot.summary();
        Ok(self
            .explainer
            .phrase_insight(&snapshot.facts(), fallback)
            .await)
    }
}
