//! Order Form
//!
//! Order intake panel: collects an order, submits it and shows the decision.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::{OrderDraft, OrderStatus};

#[component]
pub fn OrderForm() -> impl IntoView {
    let draft = create_rw_signal(OrderDraft {
        quantity: "1".to_string(),
        ..Default::default()
    });
    let status = create_rw_signal(OrderStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.with(OrderStatus::is_submitting) {
            return;
        }

        let request = match draft.with(OrderDraft::validate) {
            Ok(request) => request,
            Err(message) => {
                status.set(OrderStatus::Invalid(message));
                return;
            }
        };

        status.set(OrderStatus::Submitting);
        spawn_local(async move {
            let next = match api::submit_order(&request).await {
                Ok(decision) => OrderStatus::Decided(decision),
                Err(e) => {
                    web_sys::console::error_1(&format!("Order submission failed: {}", e).into());
                    OrderStatus::Failed(e.to_string())
                }
            };
            status.try_set(next);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"📦 New Order"</h2>

            <form on:submit=on_submit class="space-y-3">
                <TextField
                    label="Customer name"
                    input_type="text"
                    value=Signal::derive(move || draft.with(|d| d.customer_name.clone()))
                    on_input=move |v| draft.update(|d| d.customer_name = v)
                />
                <TextField
                    label="Customer email"
                    input_type="email"
                    value=Signal::derive(move || draft.with(|d| d.customer_email.clone()))
                    on_input=move |v| draft.update(|d| d.customer_email = v)
                />
                <TextField
                    label="Phone (optional)"
                    input_type="tel"
                    value=Signal::derive(move || draft.with(|d| d.customer_phone.clone()))
                    on_input=move |v| draft.update(|d| d.customer_phone = v)
                />
                <TextField
                    label="Item"
                    input_type="text"
                    value=Signal::derive(move || draft.with(|d| d.item_name.clone()))
                    on_input=move |v| draft.update(|d| d.item_name = v)
                />
                <TextField
                    label="Quantity"
                    input_type="number"
                    value=Signal::derive(move || draft.with(|d| d.quantity.clone()))
                    on_input=move |v| draft.update(|d| d.quantity = v)
                />

                <button
                    type="submit"
                    disabled=move || status.with(OrderStatus::is_submitting)
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if status.with(OrderStatus::is_submitting) {
                        view! {
                            <InlineLoading />
                            <span>"Deciding..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Submit Order"</span> }.into_view()
                    }}
                </button>
            </form>

            {move || match status.get() {
                OrderStatus::Decided(decision) => view! { <DecisionCard decision=decision /> }.into_view(),
                OrderStatus::Invalid(message) => view! {
                    <p class="text-yellow-400 text-sm mt-3">{message}</p>
                }.into_view(),
                OrderStatus::Failed(message) => view! {
                    <p class="text-red-400 text-sm mt-3">{format!("Order failed: {}", message)}</p>
                }.into_view(),
                OrderStatus::Idle | OrderStatus::Submitting => view! {}.into_view(),
            }}
        </section>
    }
}

#[component]
fn TextField(
    label: &'static str,
    input_type: &'static str,
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-1">{label}</span>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </label>
    }
}

#[component]
fn DecisionCard(decision: api::DecisionResponse) -> impl IntoView {
    let badge = format!(
        "px-2 py-1 rounded text-xs font-bold {}",
        OrderStatus::badge_class(&decision.decision)
    );

    view! {
        <div class="bg-gray-700 rounded-lg p-4 mt-4 space-y-2">
            <div class="flex items-center space-x-2">
                <span class=badge>{decision.decision.clone()}</span>
                <span class="text-gray-300">{decision.reason.clone()}</span>
            </div>
            <p class="text-sm text-gray-400">
                {format!("{} <{}>", decision.customer_name, decision.customer_email)}
            </p>
            {decision.assigned_staff.clone().map(|staff| view! {
                <p class="text-sm text-gray-400">{format!("Assigned to {}", staff)}</p>
            })}
            {decision.explanation.clone().map(|text| view! {
                <p class="text-gray-200 leading-relaxed">{text}</p>
            })}
        </div>
    }
}
