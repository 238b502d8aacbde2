//! API Settings
//!
//! Footer control for the service base address.

use leptos::*;

use crate::api;

#[component]
pub fn ApiSettings() -> impl IntoView {
    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (saved, set_saved) = create_signal(None::<bool>);

    let save_url = move |_| {
        let ok = api::set_api_base(&api_url.get());
        if ok {
            set_api_url.set(api::get_api_base());
        }
        set_saved.set(Some(ok));
    };

    let reset_url = move |_| {
        api::clear_api_base();
        set_api_url.set(api::get_api_base());
        set_saved.set(None);
    };

    view! {
        <div class="flex items-center space-x-2 text-sm">
            <label class="text-gray-400" for="api-url">"API"</label>
            <input
                id="api-url"
                type="url"
                prop:value=move || api_url.get()
                on:input=move |ev| {
                    set_api_url.set(event_target_value(&ev));
                    set_saved.set(None);
                }
                class="bg-gray-700 rounded px-2 py-1 text-white border border-gray-600
                       focus:border-primary-500 focus:outline-none w-64"
            />
            <button
                on:click=save_url
                class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded transition-colors"
            >
                "Save"
            </button>
            <button
                on:click=reset_url
                class="px-3 py-1 text-gray-400 hover:text-white transition-colors"
            >
                "Reset"
            </button>
            {move || match saved.get() {
                Some(true) => view! { <span class="text-green-400">"Saved"</span> }.into_view(),
                Some(false) => view! { <span class="text-red-400">"Storage unavailable"</span> }.into_view(),
                None => view! {}.into_view(),
            }}
        </div>
    }
}
