//! Public tracking page; reachable without a session.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn TrackingPage() -> impl IntoView {
    let params = use_params_map();
    let waybill_number = move || params.read().get("waybill_number").unwrap_or_default();

    view! {
        <main class="container mx-auto p-4 mt-6 space-y-2">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Tracking"</h1>
            <p class="font-mono text-gray-600 dark:text-gray-300">{waybill_number}</p>
        </main>
    }
}
