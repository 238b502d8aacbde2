//! Decision Explanations
//!
//! Builds prompts for the LLM and falls back to template sentences.

use std::sync::Arc;

use super::client::LlmClient;
use crate::config::LlmConfig;
use crate::ledger::Decision;

/// Produces owner-facing sentences, with or without an LLM
#[derive(Clone, Default)]
pub struct Explainer {
    client: Option<Arc<LlmClient>>,
}

impl Explainer {
    /// Explainer that only uses templates
    pub fn template_only() -> Self {
        Self { client: None }
    }

    /// Explainer backed by an LLM client
    pub fn with_llm(client: Arc<LlmClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Build from configuration, falling back to templates when the LLM is
    /// disabled, has no key, or the client cannot be built
    pub fn from_config(config: &LlmConfig) -> Self {
        if !config.is_usable() {
            tracing::info!("LLM disabled or no API key set, using template explanations");
            return Self::template_only();
        }

        match LlmClient::new(config.clone()) {
            Ok(client) => {
                tracing::info!(model = %config.model, "LLM explanations enabled");
                Self::with_llm(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!("Failed to build LLM client: {} (using templates)", e);
                Self::template_only()
            }
        }
    }

    /// Whether an LLM is configured
    pub fn has_llm(&self) -> bool {
        self.client.is_some()
    }

    /// One short, clear sentence explaining a decision
    pub async fn explain_decision(
        &self,
        decision: Decision,
        item: &str,
        quantity: u32,
        staff: Option<&str>,
        reason: &str,
    ) -> String {
        let fallback = template_explanation(decision, item, quantity, staff, reason);

        let Some(client) = &self.client else {
            return fallback;
        };

        let prompt = format!(
            "You are an MSME operations assistant.\n\n\
             Decision: {}\n\
             Item: {}\n\
             Quantity: {}\n\
             Assigned Staff: {}\n\n\
             Explain this decision in one short, clear sentence for a business owner.",
            decision,
            item,
            quantity,
            staff.unwrap_or("None"),
        );

        match client.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(decision = %decision, "LLM explanation failed: {}", e);
                fallback
            }
        }
    }

    /// Rephrase a set of daily facts as one sentence, or return `fallback`
    pub async fn phrase_insight(&self, facts: &[String], fallback: String) -> String {
        let Some(client) = &self.client else {
            return fallback;
        };

        let prompt = format!(
            "You are an MSME operations assistant.\n\n\
             Today's operational facts:\n- {}\n\n\
             Summarize the most important point in one short sentence for a business owner.",
            facts.join("\n- ")
        );

        match client.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("LLM daily insight failed: {}", e);
                fallback
            }
        }
    }
}

/// Deterministic explanation used when no LLM answer is available
pub fn template_explanation(
    decision: Decision,
    item: &str,
    quantity: u32,
    staff: Option<&str>,
    reason: &str,
) -> String {
    match decision {
        Decision::Accept => match staff {
            Some(name) => format!(
                "Order accepted: {} x {} is in stock and {} has been assigned to fulfil it.",
                quantity, item, name
            ),
            None => format!("Order accepted: {} x {} is in stock.", quantity, item),
        },
        Decision::Hold => format!(
            "Order on hold: {} x {} cannot be fulfilled right now ({}).",
            quantity,
            item,
            reason.to_lowercase()
        ),
        Decision::Reject => format!(
            "Order rejected: {} is not an item we stock.",
            item
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_explanations() {
        assert_eq!(
            template_explanation(Decision::Accept, "rice", 3, Some("Asha"), "Inventory and staff available"),
            "Order accepted: 3 x rice is in stock and Asha has been assigned to fulfil it."
        );
        assert_eq!(
            template_explanation(Decision::Hold, "flour", 50, None, "Insufficient stock"),
            "Order on hold: 50 x flour cannot be fulfilled right now (insufficient stock)."
        );
        assert_eq!(
            template_explanation(Decision::Reject, "saffron", 1, None, "Item not found in inventory"),
            "Order rejected: saffron is not an item we stock."
        );
    }

    #[test]
    fn test_from_config_without_key_uses_templates() {
        let explainer = Explainer::from_config(&LlmConfig::default());
        assert!(!explainer.has_llm());
    }

    #[tokio::test]
    async fn test_template_only_explainer() {
        let explainer = Explainer::template_only();
        let text = explainer
            .explain_decision(Decision::Hold, "flour", 5, None, "No available staff with required skill")
            .await;
        assert_eq!(
            text,
            "Order on hold: 5 x flour cannot be fulfilled right now (no available staff with required skill)."
        );

        let insight = explainer
            .phrase_insight(&["3 orders today".to_string()], "fallback".to_string())
            .await;
        assert_eq!(insight, "fallback");
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back() {
        let config = LlmConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: Some("test".to_string()),
            max_retries: 0,
            request_timeout_ms: 500,
            ..Default::default()
        };
        let explainer = Explainer::from_config(&config);
        assert!(explainer.has_llm());

        let text = explainer
            .explain_decision(Decision::Reject, "saffron", 1, None, "Item not found in inventory")
            .await;
        assert_eq!(text, "Order rejected: saffron is not an item we stock.");
    }
}
