//! App Root Component
//!
//! Header, the three panels and the settings footer. Owns the daily insight
//! text and fetches it once per mount.

use leptos::*;

use crate::api;
use crate::components::{ApiSettings, BottleneckPanel, DailyInsightCard, OrderForm};
use crate::state::{InsightState, Liveness};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let insight = create_rw_signal(InsightState::default());

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.revoke()
    });

    spawn_local(async move {
        let outcome = api::fetch_daily_insight().await.map(|r| r.text);
        if let Err(e) = &outcome {
            web_sys::console::error_1(&format!("Daily insight fetch failed: {}", e).into());
        }
        // try_update: the signal is disposed along with the view
        insight.try_update(|state| state.apply_if_live(&liveness, outcome));
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 py-6 px-4">
                <div class="container mx-auto">
                    <h1 class="text-3xl font-bold">"Decision-Centric MSME AI"</h1>
                    <p class="text-gray-400 mt-1">"Smart decisions for small & medium businesses"</p>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <OrderForm />
                    <BottleneckPanel />
                    <DailyInsightCard text=Signal::derive(move || insight.with(|s| s.text().to_string())) />
                </div>
            </main>

            <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
                <div class="container mx-auto flex items-center justify-between">
                    <span class="text-gray-500 text-sm">{concat!("OpsDesk v", env!("CARGO_PKG_VERSION"))}</span>
                    <ApiSettings />
                </div>
            </footer>
        </div>
    }
}
