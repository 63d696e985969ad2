use crate::app_lib::config::AppConfig;
use crate::features::auth::client::ConfiguredProfileSource;
use crate::features::auth::firebase::FirebaseIdentity;
use crate::features::auth::state::use_accessor;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use shipdesk::session::{CurrentLocation, IdentityProvider, SessionListener as Listener};
use std::rc::Rc;

/// Subscribes to the identity provider for the lifetime of the router and
/// applies each outcome: publish state, navigate, and force a sign-out when
/// the accessor lookup failed. Renders nothing.
#[component]
pub fn SessionListener() -> impl IntoView {
    let access = use_accessor();
    let navigate = use_navigate();
    let location = use_location();
    let config = AppConfig::load();
    let listener = Rc::new(
        Listener::new(ConfiguredProfileSource::from(&config)).with_policy(config.retry_policy()),
    );
    let identity = FirebaseIdentity;

    let subscription = identity.subscribe(Box::new(move |event| {
        let listener = Rc::clone(&listener);
        let navigate = navigate.clone();
        let current = CurrentLocation::new(
            location.pathname.get_untracked(),
            location.search.get_untracked(),
        );

        spawn_local(async move {
            let Some(outcome) = listener.handle(event, &current).await else {
                return;
            };
            if outcome.sign_out {
                identity.sign_out();
            }
            access.publish(outcome.state);
            if let Some(target) = outcome.navigate {
                navigate(&target, NavigateOptions::default());
            }
        });
    }));

    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        subscription.update_value(|subscription| {
            subscription.take();
        });
    });
}
