//! UI Components
//!
//! Panels composed by the root view.

pub mod bottleneck_panel;
pub mod insight_card;
pub mod loading;
pub mod order_form;
pub mod settings;

pub use bottleneck_panel::BottleneckPanel;
pub use insight_card::DailyInsightCard;
pub use loading::InlineLoading;
pub use order_form::OrderForm;
pub use settings::ApiSettings;
