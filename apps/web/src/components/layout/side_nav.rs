//! Side navigation for signed-in users. Links to pages the accessor cannot
//! open are hidden; the route guard still decides on navigation.

use crate::app_lib::build_info::git_commit_hash;
use crate::features::access::use_registry;
use crate::features::auth::state::use_accessor;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use shipdesk::paths;

#[component]
pub fn SideNav() -> impl IntoView {
    let access = use_accessor();
    let registry = use_registry();
    let location = use_location();
    let pathname = move || location.pathname.get();
    let can_open = move |route: &str| {
        access.accessor.with(|accessor| {
            accessor.as_ref().is_some_and(|accessor| {
                registry
                    .has_access(route, &accessor.groups)
                    .unwrap_or(false)
            })
        })
    };
    let shipments_visible = move || can_open(paths::SHIPMENTS);

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-1">
                <SideNavLink
                    target=paths::ROOT
                    icon="home"
                    label="Home"
                    active=Signal::derive(move || pathname() == paths::ROOT)
                />
                <Show when=shipments_visible>
                    <SideNavLink
                        target=paths::SHIPMENTS
                        icon="inventory_2"
                        label="Shipments"
                        active=Signal::derive(move || pathname().starts_with("/shipment"))
                    />
                </Show>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("Shipdesk {}", git_commit_hash())}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SideNavLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:text-gray-600=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
        >
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
