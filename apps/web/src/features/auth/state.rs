//! Accessor state shared through Leptos context. The session listener is the
//! only writer; guards and layout read it. Only profile metadata lives here,
//! never provider tokens.

use leptos::prelude::*;
use shipdesk::session::{Accessor, SessionState};

#[derive(Clone, Copy)]
/// Accessor context shared through Leptos.
pub struct AccessorContext {
    pub state: RwSignal<SessionState>,
    pub accessor: Signal<Option<Accessor>>,
    pub notice: RwSignal<Option<String>>,
}

impl AccessorContext {
    fn new(state: RwSignal<SessionState>) -> Self {
        let accessor = Signal::derive(move || state.with(|state| state.accessor().cloned()));
        Self {
            state,
            accessor,
            notice: RwSignal::new(None),
        }
    }

    /// Replaces the session state; called from the session listener.
    pub fn publish(&self, state: SessionState) {
        if matches!(state, SessionState::SignedOut) {
            self.notice.set(None);
        }
        self.state.set(state);
    }

    /// Shows a notice above the page content until dismissed.
    pub fn show_notice(&self, message: &str) {
        self.notice.set(Some(message.to_string()));
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

/// Provides accessor context, starting in the pending state.
#[component]
pub fn AccessorProvider(children: Children) -> impl IntoView {
    provide_context(AccessorContext::new(RwSignal::new(SessionState::Pending)));

    view! { {children()} }
}

/// Returns the current accessor context or a fallback pending context.
pub fn use_accessor() -> AccessorContext {
    use_context::<AccessorContext>()
        .unwrap_or_else(|| AccessorContext::new(RwSignal::new(SessionState::Pending)))
}
