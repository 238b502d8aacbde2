//! Panel State
//!
//! Plain state machines behind each panel. Components wrap these in signals;
//! the transitions themselves carry no Leptos types so they can be tested natively.

pub mod bottleneck;
pub mod insight;
pub mod order;

pub use bottleneck::BottleneckState;
pub use insight::{InsightState, Liveness};
pub use order::{OrderDraft, OrderStatus};
