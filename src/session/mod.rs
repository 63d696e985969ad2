//! Session state, the identity provider seam, and the login redirect round trip.

mod listener;
mod provider;
mod redirect;
mod types;

pub use listener::{
    demo_accessor, resolve_accessor, signed_in, signed_out, CurrentLocation, DemoProfileSource,
    ProfileSource, RetryPolicy, SessionError, SessionListener, SessionOutcome,
};
pub use provider::{IdentityProvider, ManualIdentity, SessionCallback, Subscription};
pub use redirect::{parse_query, LoginRedirect, MAX_DESTINATION_CHARS, REDIRECT_PARAM};
pub use types::{Accessor, Session, SessionEvent, SessionState};
