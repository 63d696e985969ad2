//! Group-based access control for protected routes.
//!
//! The registry maps the first segment of a route to the groups allowed to
//! view it. [`has_access`] answers the membership question for one path and
//! [`decide`] runs the full route guard against the current session state.
//! Decisions are client-side UX only; the API must enforce the same groups.

mod decision;
mod evaluator;
mod registry;

pub use decision::{decide, GuardDecision, NavigationRequest, ACCESS_DENIED_NOTICE};
pub use evaluator::has_access;
pub use registry::{PageDescriptor, PageRegistry, RegistryError, BUILTIN_PAGES};
