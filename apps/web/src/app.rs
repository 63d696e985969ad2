use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind};
use crate::features::access::provide_registry;
use crate::features::auth::state::AccessorProvider;
use crate::features::auth::SessionListener;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use shipdesk::access::PageRegistry;
use shipdesk::paths;
use tracing::error;

#[component]
pub fn App() -> impl IntoView {
    let registry = PageRegistry::builtin()
        .and_then(|registry| registry.validate(paths::PROTECTED).map(|()| registry));

    match registry {
        Ok(registry) => {
            provide_registry(registry);
            view! {
                <AccessorProvider>
                    <Router>
                        <SessionListener />
                        <AppRoutes />
                    </Router>
                </AccessorProvider>
            }
            .into_any()
        }
        Err(err) => {
            error!(error = %err, "page registry does not match the route table");
            let message = AppError::from(err).to_string();
            view! {
                <div class="container mx-auto p-4 mt-6">
                    <Alert kind=AlertKind::Error message=message />
                </div>
            }
            .into_any()
        }
    }
}
