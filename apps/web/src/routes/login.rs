use crate::components::{Button, Spinner};
use crate::features::auth::firebase::FirebaseIdentity;
use crate::features::auth::state::use_accessor;
use leptos::prelude::*;
use shipdesk::session::{IdentityProvider, SessionState};

/// Sign-in screen. The session listener navigates away once the provider
/// reports a session; until the first report only a spinner is shown.
#[component]
pub fn LoginPage() -> impl IntoView {
    let access = use_accessor();
    let (requested, set_requested) = signal(false);
    let pending = move || access.state.with(|state| matches!(state, SessionState::Pending));

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Shipdesk"</h1>
            <Show
                when=move || !pending()
                fallback=|| view! { <Spinner label="Checking your session" /> }
            >
                <Button
                    disabled=requested
                    on_click=move || {
                        set_requested.set(true);
                        FirebaseIdentity.sign_in();
                    }
                >
                    "Sign in with Google"
                </Button>
            </Show>
        </div>
    }
}
