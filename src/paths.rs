//! Route table for the console. Route patterns use the router's `:param`
//! syntax; the first segment of each protected pattern must have a page
//! descriptor in the registry.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const SHIPMENTS: &str = "/shipments";
pub const SHIPMENT: &str = "/shipment/:waybill_number";
pub const SHIPMENT_TRACKING: &str = "/shipment/:waybill_number/track";

/// Routes wrapped by the route guard.
pub const PROTECTED: &[&str] = &[SHIPMENT, SHIPMENTS, ROOT];

/// Routes reachable without a session.
pub const PUBLIC: &[&str] = &[LOGIN, SHIPMENT_TRACKING];

/// Returns the registry key of a path: its first `/`-delimited segment.
#[must_use]
pub fn page_key(path: &str) -> &str {
    path.trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
}

/// Root needs no descriptor; every signed-in, active accessor may view it.
#[must_use]
pub fn is_root(path: &str) -> bool {
    page_key(path).is_empty()
}

#[must_use]
pub fn is_login(pathname: &str) -> bool {
    pathname == LOGIN
}
