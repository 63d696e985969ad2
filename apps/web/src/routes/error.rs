//! Error page for unknown routes, deactivated accounts and route
//! configuration defects.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <h1 class="text-4xl font-black text-gray-900 dark:text-white">"Something went wrong"</h1>
            <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                "This page does not exist or your account no longer has access to the console."
            </p>
            <div class="mt-6 flex flex-col sm:flex-row items-center justify-center gap-4">
                <A
                    href="/"
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                    "Go Home"
                </A>
                <button
                    on:click=move |_| {
                        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                            let _ = history.back();
                        }
                    }
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"arrow_back"</span>
                    "Go Back"
                </button>
            </div>
        </div>
    }
}
