use super::registry::{PageRegistry, RegistryError};
use crate::paths;
use crate::session::{parse_query, LoginRedirect, SessionState};
use serde::Serialize;
use tracing::trace;

/// Shown on the home page after a denied navigation.
pub const ACCESS_DENIED_NOTICE: &str = "You don't have access to this page";

/// A navigation attempt on a protected route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Route pattern, used for the registry lookup.
    pub route: String,
    /// Concrete pathname the user asked for, preserved across login.
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl NavigationRequest {
    pub fn new(route: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Request whose pattern and pathname are the same.
    pub fn at(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(path.clone(), path)
    }

    #[must_use]
    pub fn with_query(mut self, search: &str) -> Self {
        self.query = parse_query(search);
        self
    }
}

/// What a protected route renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Provider has not reported yet.
    Waiting,
    /// Render the page inside the shared layout.
    Render,
    /// Account revoked; render the error page.
    Deactivated,
    /// Signed in without the required group; go home and show
    /// [`ACCESS_DENIED_NOTICE`].
    Denied { redirect: String },
    /// No session; go to login and come back afterwards.
    Login { redirect: String },
}

impl GuardDecision {
    /// Target of a redirecting decision.
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            GuardDecision::Denied { redirect } | GuardDecision::Login { redirect } => {
                Some(redirect)
            }
            GuardDecision::Waiting | GuardDecision::Render | GuardDecision::Deactivated => None,
        }
    }
}

/// Decides what a protected route renders for `state`. Pure: the same inputs
/// always give the same decision, so it is safe to run on every render.
///
/// # Errors
/// Returns [`RegistryError::UnknownPage`] when a signed-in, active accessor
/// requests a route with no descriptor.
pub fn decide(
    registry: &PageRegistry,
    request: &NavigationRequest,
    state: &SessionState,
) -> Result<GuardDecision, RegistryError> {
    let decision = match state {
        SessionState::Pending => GuardDecision::Waiting,
        SessionState::SignedOut => GuardDecision::Login {
            redirect: LoginRedirect::new(&request.path, request.query.clone()).to_login_url(),
        },
        SessionState::SignedIn(accessor) if accessor.is_deactivated() => {
            GuardDecision::Deactivated
        }
        SessionState::SignedIn(accessor) => {
            if paths::is_root(&request.route)
                || registry.has_access(&request.route, &accessor.groups)?
            {
                GuardDecision::Render
            } else {
                GuardDecision::Denied {
                    redirect: paths::ROOT.to_string(),
                }
            }
        }
    };

    trace!(route = %request.route, ?decision, "route guard");
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::PageDescriptor;
    use crate::session::Accessor;

    fn registry() -> PageRegistry {
        PageRegistry::new(vec![
            PageDescriptor::new("shipments", ["Developer admin"]),
            PageDescriptor::new("shipment", ["Developer admin", "Ops"]),
        ])
    }

    fn accessor(groups: &[&str], deactivated_at: Option<&str>) -> SessionState {
        SessionState::SignedIn(Accessor {
            id: "7".to_string(),
            email: "ops@shipdesk.dev".to_string(),
            groups: groups.iter().map(ToString::to_string).collect(),
            img_url: None,
            deactivated_at: deactivated_at.map(ToString::to_string),
        })
    }

    #[test]
    fn test_pending_waits() {
        let decision = decide(
            &registry(),
            &NavigationRequest::at("/shipments"),
            &SessionState::Pending,
        );
        assert_eq!(decision, Ok(GuardDecision::Waiting));
    }

    #[test]
    fn test_signed_out_redirects_to_login() {
        let decision = decide(
            &registry(),
            &NavigationRequest::at("/shipments"),
            &SessionState::SignedOut,
        );
        assert_eq!(
            decision,
            Ok(GuardDecision::Login {
                redirect: "/login?redirect=shipments".to_string()
            })
        );
    }

    #[test]
    fn test_signed_out_preserves_concrete_path_and_query() {
        let request = NavigationRequest::new(paths::SHIPMENT, "/shipment/WB-42")
            .with_query("?tab=events");
        let decision = decide(&registry(), &request, &SessionState::SignedOut).expect("decision");
        assert_eq!(
            decision.redirect(),
            Some("/login?redirect=shipment%2FWB-42&tab=events")
        );
    }

    #[test]
    fn test_signed_out_never_consults_registry() {
        let decision = decide(
            &PageRegistry::default(),
            &NavigationRequest::at("/unregistered"),
            &SessionState::SignedOut,
        );
        assert!(matches!(decision, Ok(GuardDecision::Login { .. })));
    }

    #[test]
    fn test_missing_group_redirects_home() {
        let decision = decide(
            &registry(),
            &NavigationRequest::at("/shipments"),
            &accessor(&["Ops"], None),
        );
        assert_eq!(
            decision,
            Ok(GuardDecision::Denied {
                redirect: "/".to_string()
            })
        );
    }

    #[test]
    fn test_matching_group_renders() {
        let decision = decide(
            &registry(),
            &NavigationRequest::at("/shipments"),
            &accessor(&["Developer admin"], None),
        );
        assert_eq!(decision, Ok(GuardDecision::Render));
    }

    #[test]
    fn test_root_renders_for_any_active_accessor() {
        let decision = decide(
            &PageRegistry::default(),
            &NavigationRequest::at("/"),
            &accessor(&[], None),
        );
        assert_eq!(decision, Ok(GuardDecision::Render));
    }

    #[test]
    fn test_deactivated_always_errors() {
        let deactivated = accessor(&["Developer admin", "Ops"], Some("2024-01-01T00:00:00Z"));
        for path in ["/", "/shipments", "/shipment/WB-1", "/unregistered"] {
            let decision = decide(&registry(), &NavigationRequest::at(path), &deactivated);
            assert_eq!(decision, Ok(GuardDecision::Deactivated), "{path}");
        }
    }

    #[test]
    fn test_unknown_route_is_a_configuration_error() {
        let decision = decide(
            &registry(),
            &NavigationRequest::at("/invoices"),
            &accessor(&["Developer admin"], None),
        );
        assert_eq!(
            decision,
            Err(RegistryError::UnknownPage("invoices".to_string()))
        );
    }

    #[test]
    fn test_decision_is_idempotent() {
        let registry = registry();
        let request = NavigationRequest::at("/shipment/:waybill_number").with_query("a=1");
        for state in [
            SessionState::Pending,
            SessionState::SignedOut,
            accessor(&["Ops"], None),
            accessor(&["Viewer"], None),
            accessor(&["Ops"], Some("2024-01-01T00:00:00Z")),
        ] {
            assert_eq!(
                decide(&registry, &request, &state),
                decide(&registry, &request, &state)
            );
        }
    }

    #[test]
    fn test_decision_serializes_with_tag() {
        let json = serde_json::to_value(GuardDecision::Denied {
            redirect: "/".to_string(),
        })
        .expect("Failed to serialize");
        assert_eq!(json["decision"], "denied");
        assert_eq!(json["redirect"], "/");
    }
}
