use crate::features::auth::state::use_accessor;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let accessor = use_accessor().accessor;
    let greeting = move || {
        accessor
            .get()
            .map(|accessor| format!("Signed in as {}", accessor.email))
            .unwrap_or_default()
    };

    view! {
        <section class="space-y-4">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Shipdesk"</h1>
            <p class="text-gray-600 dark:text-gray-300">{greeting}</p>
            <A href="/shipments" {..} class="text-blue-700 hover:underline dark:text-blue-400">
                "Browse shipments"
            </A>
        </section>
    }
}
