//! Domain-level frontend features (access, auth) and their shared logic. Routes
//! import these modules to keep view code focused while keeping security
//! handling in dedicated feature areas.

pub(crate) mod access;
pub(crate) mod auth;
