//! Route protection: the page registry context and the guard component.
//! The registry is validated against the route table before it is provided.

mod guard;

pub(crate) use guard::ProtectedRoute;

use leptos::prelude::*;
use shipdesk::access::PageRegistry;
use std::sync::Arc;

pub fn provide_registry(registry: PageRegistry) {
    provide_context(Arc::new(registry));
}

/// Returns the validated registry, or an empty one outside the app root.
pub fn use_registry() -> Arc<PageRegistry> {
    use_context::<Arc<PageRegistry>>().unwrap_or_default()
}
