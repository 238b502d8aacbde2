//! OpsDesk Dashboard
//!
//! Single-page operations dashboard built with Leptos (WASM).
//!
//! # Panels
//!
//! - Order intake: submit an order and see the decision
//! - Bottlenecks: check current stock and staffing constraints on demand
//! - Daily insight: one sentence about today, fetched once per page load
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Each panel owns its own state and talks to the OpsDesk API
//! over HTTP; the API base address is configurable at runtime.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
