//! Bottleneck Panel
//!
//! Runs a bottleneck check on demand and lists what came back.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::BottleneckState;

#[component]
pub fn BottleneckPanel() -> impl IntoView {
    let state = create_rw_signal(BottleneckState::default());

    let run_check = move |_| {
        let Some(ticket) = state.try_update(|s| s.begin()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = api::fetch_bottlenecks().await.map(|r| r.bottlenecks);
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Bottleneck check failed: {}", e).into());
            }
            // try_update: the panel may have been unmounted while waiting
            state.try_update(|s| s.complete(ticket, outcome));
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🚧 System Bottlenecks"</h2>

            <button
                on:click=run_check
                disabled=move || state.with(|s| s.is_loading())
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || state.with(|s| s.is_loading()).then(|| view! { <InlineLoading /> })}
                <span>{move || state.with(|s| s.button_label())}</span>
            </button>

            {move || state.with(|s| s.error().map(str::to_string)).map(|message| view! {
                <p class="text-red-400 text-sm mt-3">
                    {format!("Bottleneck check failed: {}", message)}
                </p>
            })}

            <Show when=move || state.with(|s| s.show_list())>
                <ul class="mt-4 space-y-2">
                    <For
                        each=move || state.with(|s| s.keyed_issues())
                        key=|(index, label)| (*index, label.clone())
                        children=|(_, label)| view! {
                            <li class="bg-gray-700 rounded-lg px-4 py-2 text-yellow-300">{label}</li>
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
