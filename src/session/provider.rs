//! Identity provider seam. The browser build binds the hosted auth SDK;
//! [`ManualIdentity`] drives tests and offline development.

use super::types::{Session, SessionEvent};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

pub type SessionCallback = Box<dyn Fn(SessionEvent)>;

/// Auth SDK operations the console relies on.
pub trait IdentityProvider {
    /// Registers `on_change` for every auth state change. The provider reports
    /// the current state once shortly after subscribing. Dropping the returned
    /// [`Subscription`] unregisters the callback.
    fn subscribe(&self, on_change: SessionCallback) -> Subscription;

    /// Starts the provider's interactive sign-in.
    fn sign_in(&self);

    /// Ends the provider session; subscribers receive `SignedOut`.
    fn sign_out(&self);
}

/// Live registration with an identity provider; unregisters on drop.
#[must_use = "dropping a subscription unregisters the callback"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

type Subscribers = Rc<RefCell<Vec<(u64, Rc<dyn Fn(SessionEvent)>)>>>;

/// In-memory provider whose state changes are pushed by hand.
#[derive(Clone, Default)]
pub struct ManualIdentity {
    current: Rc<RefCell<Option<Session>>>,
    subscribers: Subscribers,
    next_id: Rc<RefCell<u64>>,
    sign_in_session: Rc<RefCell<Option<Session>>>,
}

impl ManualIdentity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that [`IdentityProvider::sign_in`] will deliver.
    #[must_use]
    pub fn with_sign_in_session(self, session: Session) -> Self {
        *self.sign_in_session.borrow_mut() = Some(session);
        self
    }

    /// Replaces the current session and notifies every subscriber.
    pub fn set_session(&self, session: Option<Session>) {
        self.current.borrow_mut().clone_from(&session);
        let event = match session {
            Some(session) => SessionEvent::SignedIn(session),
            None => SessionEvent::SignedOut,
        };
        self.emit(&event);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn emit(&self, event: &SessionEvent) {
        // Clone the list so callbacks may subscribe or drop subscriptions.
        let callbacks: Vec<_> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(event.clone());
        }
    }
}

impl IdentityProvider for ManualIdentity {
    fn subscribe(&self, on_change: SessionCallback) -> Subscription {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            *next_id
        };
        let on_change: Rc<dyn Fn(SessionEvent)> = Rc::from(on_change);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::clone(&on_change)));
        debug!(id, "identity subscriber registered");

        let initial = match self.current.borrow().clone() {
            Some(session) => SessionEvent::SignedIn(session),
            None => SessionEvent::SignedOut,
        };
        on_change(initial);

        let subscribers = Rc::clone(&self.subscribers);
        Subscription::new(move || {
            subscribers.borrow_mut().retain(|(entry, _)| *entry != id);
            debug!(id, "identity subscriber removed");
        })
    }

    fn sign_in(&self) {
        let session = self.sign_in_session.borrow().clone();
        if let Some(session) = session {
            self.set_session(Some(session));
        }
    }

    fn sign_out(&self) {
        self.set_session(None);
    }
}
