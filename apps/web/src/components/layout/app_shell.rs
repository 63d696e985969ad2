//! Shared layout for protected pages: header with the signed-in accessor,
//! the access notice banner, side navigation, and the content container.

use crate::components::layout::SideNav;
use crate::components::{Alert, AlertKind};
use crate::features::auth::firebase::FirebaseIdentity;
use crate::features::auth::state::use_accessor;
use leptos::prelude::*;
use leptos_router::components::A;
use shipdesk::session::IdentityProvider;

/// Wraps protected routes with a header, side navigation and main container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let access = use_accessor();
    let accessor = access.accessor;
    let email = move || accessor.get().map(|accessor| accessor.email).unwrap_or_default();
    let avatar = move || accessor.get().and_then(|accessor| accessor.img_url);

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3 rtl:space-x-reverse">
                        <span class="material-symbols-outlined text-blue-600">"local_shipping"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Shipdesk"
                        </span>
                    </A>
                    <div class="flex items-center gap-4">
                        {move || {
                            avatar()
                                .map(|src| {
                                    view! {
                                        <img src=src class="h-8 w-8 rounded-full" alt="" />
                                    }
                                })
                        }}
                        <span class="text-sm text-gray-700 dark:text-gray-300">{email}</span>
                        <button
                            type="button"
                            class="text-sm text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                            on:click=move |_| FirebaseIdentity.sign_out()
                        >
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </header>
            <div class="flex flex-1">
                <SideNav />
                <main class="flex-1">
                    <div class="container mx-auto p-4 mt-6">
                        {move || {
                            access
                                .notice
                                .get()
                                .map(|message| {
                                    view! {
                                        <div class="mb-4" on:click=move |_| access.dismiss_notice()>
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    }
                                })
                        }}
                        {children()}
                    </div>
                </main>
            </div>
        </div>
    }
}
