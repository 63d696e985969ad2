//! Bridge from identity provider notifications to application state.
//!
//! For every [`SessionEvent`] the listener works out the state to publish and
//! where, if anywhere, to navigate. Publishing and navigating are left to the
//! caller so the transition itself stays testable without a browser.

use super::redirect::{parse_query, LoginRedirect};
use super::types::{Accessor, Session, SessionEvent, SessionState};
use crate::paths;
use std::cell::Cell;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("profile lookup timed out")]
    Timeout,
    #[error("profile lookup failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("invalid profile response: {0}")]
    Parse(String),
}

impl SessionError {
    /// Transport failures and server errors are worth another attempt; a
    /// rejected token or a malformed profile is not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            SessionError::Network(_) | SessionError::Timeout => true,
            SessionError::Http { status, .. } => *status >= 500,
            SessionError::Parse(_) => false,
        }
    }
}

/// Resolves a verified session into the user's accessor.
#[allow(async_fn_in_trait)]
pub trait ProfileSource {
    async fn fetch_accessor(&self, session: &Session) -> Result<Accessor, SessionError>;
}

/// Profile used until the console talks to the accessor API: a fixed
/// developer-admin identity with the provider's avatar.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoProfileSource;

#[must_use]
pub fn demo_accessor(session: &Session) -> Accessor {
    Accessor {
        id: "1".to_string(),
        email: "Jayaram Kasi".to_string(),
        groups: ["Developer admin".to_string()].into_iter().collect(),
        img_url: session.photo_url.clone(),
        deactivated_at: None,
    }
}

impl ProfileSource for DemoProfileSource {
    async fn fetch_accessor(&self, session: &Session) -> Result<Accessor, SessionError> {
        Ok(demo_accessor(session))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total lookups per sign-in, including the first one.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// Looks up the accessor for `session`, retrying retryable failures.
///
/// # Errors
/// Returns the last error once attempts run out, or the first non-retryable one.
pub async fn resolve_accessor<P: ProfileSource>(
    source: &P,
    session: &Session,
    policy: RetryPolicy,
) -> Result<Accessor, SessionError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match source.fetch_accessor(session).await {
            Ok(accessor) => return Ok(accessor),
            Err(err) if err.is_retryable() && attempt < max_attempts => {
                warn!(attempt, max_attempts, error = %err, "profile lookup failed, retrying");
            }
            Err(err) => return Err(err),
        }
    }
}

/// Location at the time the notification arrived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentLocation {
    pub pathname: String,
    pub search: String,
}

impl CurrentLocation {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }
}

/// What the caller must do after a session change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    pub state: SessionState,
    pub navigate: Option<String>,
    /// End the provider session too; set when the accessor lookup failed.
    pub sign_out: bool,
}

/// A session became active: publish the accessor and, when sitting on the
/// login page, go back to the destination encoded in its query string.
#[must_use]
pub fn signed_in(accessor: Accessor, location: &CurrentLocation) -> SessionOutcome {
    let navigate = paths::is_login(&location.pathname)
        .then(|| LoginRedirect::from_query(&location.search).destination_url());

    SessionOutcome {
        state: SessionState::SignedIn(accessor),
        navigate,
        sign_out: false,
    }
}

/// No session: publish `SignedOut` and leave for the login page, carrying
/// the current location as the destination to restore.
#[must_use]
pub fn signed_out(location: &CurrentLocation) -> SessionOutcome {
    SessionOutcome {
        state: SessionState::SignedOut,
        navigate: login_unless_there(location),
        sign_out: false,
    }
}

/// Same URL the route guard redirects to, so both navigations agree.
fn login_unless_there(location: &CurrentLocation) -> Option<String> {
    (!paths::is_login(&location.pathname)).then(|| {
        LoginRedirect::new(&location.pathname, parse_query(&location.search)).to_login_url()
    })
}

/// Turns provider notifications into outcomes. Notifications may overlap
/// while a profile lookup is in flight; only the latest one yields an outcome.
pub struct SessionListener<P> {
    source: P,
    policy: RetryPolicy,
    generation: Cell<u64>,
}

impl<P: ProfileSource> SessionListener<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            policy: RetryPolicy::default(),
            generation: Cell::new(0),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Computes the outcome of one provider notification. A failed accessor
    /// lookup falls back to a forced sign-out. Returns `None` when a later
    /// notification arrived before this one finished; its outcome is stale.
    pub async fn handle(
        &self,
        event: SessionEvent,
        location: &CurrentLocation,
    ) -> Option<SessionOutcome> {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let outcome = self.outcome(event, location).await;
        if self.generation.get() == generation {
            Some(outcome)
        } else {
            debug!(generation, "dropping superseded session outcome");
            None
        }
    }

    async fn outcome(&self, event: SessionEvent, location: &CurrentLocation) -> SessionOutcome {
        match event {
            SessionEvent::SignedIn(session) => {
                match resolve_accessor(&self.source, &session, self.policy).await {
                    Ok(accessor) => {
                        info!(accessor = %accessor.id, "session active");
                        signed_in(accessor, location)
                    }
                    Err(err) => {
                        error!(error = %err, "accessor lookup failed, signing out");
                        SessionOutcome {
                            state: SessionState::SignedOut,
                            navigate: login_unless_there(location),
                            sign_out: true,
                        }
                    }
                }
            }
            SessionEvent::SignedOut => {
                info!("session ended");
                signed_out(location)
            }
        }
    }
}
