//! Bindings to the namespaced Firebase Auth SDK loaded by `index.html`
//! (`firebase.auth()`). The ID token is handed to the listener and must never
//! be logged.

use leptos::task::spawn_local;
use shipdesk::session::{IdentityProvider, SessionCallback, SessionEvent, Subscription};
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    type Auth;

    #[wasm_bindgen(js_namespace = firebase, js_name = auth)]
    fn auth() -> Auth;

    #[wasm_bindgen(method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(
        this: &Auth,
        observer: &Closure<dyn FnMut(JsValue)>,
    ) -> js_sys::Function;

    #[wasm_bindgen(method, js_name = signInWithRedirect)]
    fn sign_in_with_redirect(this: &Auth, provider: &GoogleAuthProvider) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &Auth) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    type GoogleAuthProvider;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"])]
    fn new() -> GoogleAuthProvider;

    type User;

    #[wasm_bindgen(method, getter, js_name = photoURL)]
    fn photo_url(this: &User) -> Option<String>;

    #[wasm_bindgen(method, js_name = getIdToken)]
    fn get_id_token(this: &User) -> js_sys::Promise;
}

/// Firebase Auth as the console's identity provider.
#[derive(Clone, Copy, Default)]
pub struct FirebaseIdentity;

impl IdentityProvider for FirebaseIdentity {
    fn subscribe(&self, on_change: SessionCallback) -> Subscription {
        let on_change: Rc<dyn Fn(SessionEvent)> = Rc::from(on_change);
        let observer = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
            if user.is_null() || user.is_undefined() {
                on_change(SessionEvent::SignedOut);
                return;
            }

            let user: User = user.unchecked_into();
            let on_change = Rc::clone(&on_change);
            spawn_local(async move {
                let token = JsFuture::from(user.get_id_token())
                    .await
                    .ok()
                    .and_then(|token| token.as_string());
                let event = SessionEvent::from_id_token(token, user.photo_url());
                if event == SessionEvent::SignedOut {
                    warn!("identity token unavailable, treating as signed out");
                }
                on_change(event);
            });
        });

        let unsubscribe = auth().on_auth_state_changed(&observer);
        debug!("subscribed to firebase auth state");

        Subscription::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            drop(observer);
            debug!("unsubscribed from firebase auth state");
        })
    }

    fn sign_in(&self) {
        let promise = auth().sign_in_with_redirect(&GoogleAuthProvider::new());
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                warn!("firebase sign-in failed");
            }
        });
    }

    fn sign_out(&self) {
        let promise = auth().sign_out();
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                warn!("firebase sign-out failed");
            }
        });
    }
}
