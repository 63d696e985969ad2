//! Auth feature module: the identity provider binding, the session listener
//! that bridges it into accessor state, and the accessor lookup. It touches
//! security boundaries and must avoid logging tokens.

pub(crate) mod client;
pub(crate) mod firebase;
mod listener;
pub(crate) mod state;

pub(crate) use listener::SessionListener;
