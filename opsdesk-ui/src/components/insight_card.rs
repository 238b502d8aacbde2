//! Daily Insight Card
//!
//! Read-only panel for the insight text owned by the root view.

use leptos::*;

#[component]
pub fn DailyInsightCard(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 md:col-span-2">
            <h2 class="text-xl font-semibold mb-4">"📊 Daily AI Insight"</h2>
            <div class="bg-gray-700 rounded-lg p-4">
                <p class="text-gray-200 leading-relaxed">{move || text.get()}</p>
            </div>
        </section>
    }
}
