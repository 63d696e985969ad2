use leptos::prelude::*;

#[component]
pub fn ShipmentsListPage() -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Shipments"</h1>
            <p class="text-gray-600 dark:text-gray-300">
                "Open a shipment by its waybill number to see details and tracking."
            </p>
        </section>
    }
}
