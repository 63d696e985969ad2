use crate::components::{AppShell, Spinner};
use crate::features::access::use_registry;
use crate::features::auth::state::use_accessor;
use crate::routes::ErrorPage;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use shipdesk::access::{decide, GuardDecision, NavigationRequest, ACCESS_DENIED_NOTICE};
use tracing::{error, warn};

/// Wraps one protected route. The decision is recomputed whenever the
/// location or the accessor changes; the API enforces the same groups.
#[component]
pub fn ProtectedRoute(route: &'static str, children: ChildrenFn) -> impl IntoView {
    let access = use_accessor();
    let registry = use_registry();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let request = NavigationRequest::new(route, location.pathname.get())
            .with_query(&location.search.get());
        access
            .state
            .with(|state| decide(&registry, &request, state))
    });

    Effect::new(move |_| match decision.get() {
        Ok(GuardDecision::Denied { .. }) => {
            warn!(route, "access denied");
            access.show_notice(ACCESS_DENIED_NOTICE);
        }
        Err(err) => error!(route, error = %err, "route guard misconfigured"),
        Ok(_) => {}
    });

    move || match decision.get() {
        Ok(GuardDecision::Waiting) => view! { <WaitingPlaceholder /> }.into_any(),
        Ok(GuardDecision::Render) => view! { <AppShell>{children()}</AppShell> }.into_any(),
        Ok(GuardDecision::Deactivated) | Err(_) => view! { <ErrorPage /> }.into_any(),
        Ok(GuardDecision::Denied { redirect } | GuardDecision::Login { redirect }) => {
            view! { <Redirect path=redirect /> }.into_any()
        }
    }
}

#[component]
fn WaitingPlaceholder() -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-4 min-h-[50vh] text-gray-500 dark:text-gray-400">
            <Spinner />
            <p>"Waiting to sign you in"</p>
        </div>
    }
}
