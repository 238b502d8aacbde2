//! Bottleneck panel state.
//!
//! A check is started with [`BottleneckState::begin`], which hands out a ticket,
//! and finished with [`BottleneckState::complete`]. Only the ticket of the
//! outstanding check is honoured, so `loading` is true exactly while that
//! check is unresolved.

use crate::api::ApiFailure;

pub const CHECK_LABEL: &str = "Check Bottlenecks";
pub const ANALYZING_LABEL: &str = "Analyzing...";
pub const ISSUE_PREFIX: &str = "⚠️";

/// Identifies one issued check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BottleneckState {
    issues: Vec<String>,
    loading: bool,
    error: Option<String>,
    issued: u64,
}

impl BottleneckState {
    /// Start a check. Returns `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<CheckTicket> {
        if self.loading {
            return None;
        }
        self.issued += 1;
        self.loading = true;
        self.error = None;
        Some(CheckTicket(self.issued))
    }

    /// Finish the check identified by `ticket`.
    ///
    /// Success replaces the list wholesale. Failure keeps the previous list and
    /// records the error. Returns false if the ticket is stale.
    pub fn complete(&mut self, ticket: CheckTicket, outcome: Result<Vec<String>, ApiFailure>) -> bool {
        if !self.loading || ticket.0 != self.issued {
            return false;
        }

        match outcome {
            Ok(issues) => self.issues = issues,
            Err(failure) => self.error = Some(failure.to_string()),
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            ANALYZING_LABEL
        } else {
            CHECK_LABEL
        }
    }

    /// The list section is rendered only when there is something in it
    pub fn show_list(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Display labels keyed by position, so repeated texts still get distinct keys
    pub fn keyed_issues(&self) -> Vec<(usize, String)> {
        self.issues
            .iter()
            .map(|issue| format!("{} {}", ISSUE_PREFIX, issue))
            .enumerate()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = BottleneckState::default();
        assert!(!state.is_loading());
        assert!(!state.show_list());
        assert_eq!(state.button_label(), "Check Bottlenecks");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_successful_check_replaces_list() {
        let mut state = BottleneckState::default();
        let ticket = state.begin().unwrap();
        assert!(state.is_loading());
        assert_eq!(state.button_label(), "Analyzing...");

        assert!(state.complete(
            ticket,
            Ok(issues(&["Order backlog at packaging stage", "Supplier delay: SKU-4821"]))
        ));
        assert!(!state.is_loading());
        assert_eq!(
            state.issues(),
            ["Order backlog at packaging stage", "Supplier delay: SKU-4821"]
        );
        assert_eq!(
            state.keyed_issues(),
            vec![
                (0, "⚠️ Order backlog at packaging stage".to_string()),
                (1, "⚠️ Supplier delay: SKU-4821".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_result_hides_list() {
        let mut state = BottleneckState::default();
        let ticket = state.begin().unwrap();
        state.complete(ticket, Ok(Vec::new()));
        assert!(!state.show_list());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_same_response_twice_does_not_accumulate() {
        let mut state = BottleneckState::default();
        for _ in 0..2 {
            let ticket = state.begin().unwrap();
            state.complete(ticket, Ok(issues(&["Inventory shortage: flour"])));
        }
        assert_eq!(state.issues(), ["Inventory shortage: flour"]);
    }

    #[test]
    fn test_trigger_ignored_while_in_flight() {
        let mut state = BottleneckState::default();
        let first = state.begin().unwrap();
        assert!(state.begin().is_none());

        state.complete(first, Ok(Vec::new()));
        assert!(state.begin().is_some());
    }

    #[test]
    fn test_failure_returns_to_idle_and_keeps_list() {
        let mut state = BottleneckState::default();
        let ticket = state.begin().unwrap();
        state.complete(ticket, Ok(issues(&["Staff unavailable for: sugar"])));

        let ticket = state.begin().unwrap();
        state.complete(ticket, Err(ApiFailure::Network("connection refused".to_string())));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Network error: connection refused"));
        assert_eq!(state.issues(), ["Staff unavailable for: sugar"]);
        assert_eq!(state.button_label(), "Check Bottlenecks");

        // Starting again clears the error
        state.begin().unwrap();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut state = BottleneckState::default();
        let first = state.begin().unwrap();
        state.complete(first, Ok(Vec::new()));

        let second = state.begin().unwrap();
        assert!(!state.complete(first, Ok(issues(&["late"]))));
        assert!(state.is_loading());
        assert!(state.complete(second, Ok(Vec::new())));
    }
}
