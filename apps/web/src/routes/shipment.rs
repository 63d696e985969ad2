use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ShipmentPage() -> impl IntoView {
    let params = use_params_map();
    let waybill_number = move || params.read().get("waybill_number").unwrap_or_default();

    view! {
        <section class="space-y-4">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Shipment " {waybill_number}
            </h1>
            <A
                href=move || format!("/shipment/{}/track", waybill_number())
                {..}
                class="text-blue-700 hover:underline dark:text-blue-400"
            >
                "Public tracking page"
            </A>
        </section>
    }
}
