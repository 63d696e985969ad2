//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Sign-in round trip
//!
//! 1. **Guard:** a protected route without a session redirects to
//!    `/login?redirect=<path>&<query>`.
//! 2. **Provider:** the hosted identity SDK signs the user in and reports the
//!    session to the listener.
//! 3. **Accessor:** the listener resolves the accessor (groups, deactivation)
//!    through the configured profile source and publishes it.
//! 4. **Return:** still on `/login`, the listener navigates to the decoded
//!    destination.
//!
//! These helpers never see provider credentials beyond the bearer token passed
//! to the accessor API; callers must not log it.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use errors::AppError;
