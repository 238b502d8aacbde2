//! Daily insight text and the liveness token guarding its fetch.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::ApiFailure;

/// Shown until the first fetch resolves
pub const INSIGHT_PLACEHOLDER: &str = "Loading daily insight...";

/// Shown when the fetch fails
pub const INSIGHT_FAILURE: &str = "Unable to fetch daily insight.";

/// Text displayed in the insight panel. Never cleared once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightState {
    text: String,
}

impl Default for InsightState {
    fn default() -> Self {
        Self {
            text: INSIGHT_PLACEHOLDER.to_string(),
        }
    }
}

impl InsightState {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply the outcome of a fetch.
    ///
    /// `Ok(None)` or blank text leaves the current text alone; any failure
    /// replaces it with the fixed failure message.
    pub fn apply(&mut self, outcome: Result<Option<String>, ApiFailure>) {
        match outcome {
            Ok(Some(text)) if !text.trim().is_empty() => self.text = text,
            Ok(_) => {}
            Err(_) => self.text = INSIGHT_FAILURE.to_string(),
        }
    }

    /// Apply the outcome only if the view that issued the fetch still exists.
    ///
    /// Returns whether it was applied.
    pub fn apply_if_live(
        &mut self,
        liveness: &Liveness,
        outcome: Result<Option<String>, ApiFailure>,
    ) -> bool {
        if !liveness.is_live() {
            return false;
        }
        self.apply(outcome);
        true
    }
}

/// Shared flag that says whether the view which issued a request still exists
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    /// Mark the owner as gone. Every clone observes it.
    pub fn revoke(&self) {
        self.0.set(false);
    }
}
