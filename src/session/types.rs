//! Accessor and session types. Session tokens are bearer credentials and must
//! never be logged; `Session` implements `Debug` without the token.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Authorization profile of the signed-in user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub groups: BTreeSet<String>,
    #[serde(default)]
    pub img_url: Option<String>,
    /// RFC 3339 timestamp; present means the account is revoked.
    #[serde(default)]
    pub deactivated_at: Option<String>,
}

impl Accessor {
    #[must_use]
    pub fn is_deactivated(&self) -> bool {
        self.deactivated_at.is_some()
    }
}

/// What the UI knows about the current user.
///
/// `Pending` covers the window before the identity provider reports for the
/// first time. `SignedOut` is only entered after it reported no session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Pending,
    SignedOut,
    SignedIn(Accessor),
}

impl SessionState {
    #[must_use]
    pub fn accessor(&self) -> Option<&Accessor> {
        match self {
            SessionState::SignedIn(accessor) => Some(accessor),
            SessionState::Pending | SessionState::SignedOut => None,
        }
    }
}

/// Session delivered by the identity provider on sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub photo_url: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("token", &"<redacted>")
            .field("photo_url", &self.photo_url)
            .finish()
    }
}

/// Auth state change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Session),
    SignedOut,
}

impl SessionEvent {
    /// A provider user without a usable identity token is treated as signed
    /// out; an empty bearer token would only be rejected later.
    #[must_use]
    pub fn from_id_token(token: Option<String>, photo_url: Option<String>) -> Self {
        match token.filter(|token| !token.trim().is_empty()) {
            Some(token) => Self::SignedIn(Session { token, photo_url }),
            None => Self::SignedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_deserializes_camel_case() {
        let accessor: Accessor = serde_json::from_str(
            r#"{
                "id": "42",
                "email": "ops@shipdesk.dev",
                "groups": ["Ops", "Ops"],
                "imgUrl": "https://cdn.shipdesk.dev/a.png",
                "deactivatedAt": "2024-03-01T10:00:00Z"
            }"#,
        )
        .expect("Failed to deserialize");

        assert_eq!(accessor.groups.len(), 1);
        assert_eq!(
            accessor.img_url.as_deref(),
            Some("https://cdn.shipdesk.dev/a.png")
        );
        assert!(accessor.is_deactivated());
    }

    #[test]
    fn test_accessor_optional_fields_default() {
        let accessor: Accessor =
            serde_json::from_str(r#"{"id": "1", "email": "a@b.c", "deactivatedAt": null}"#)
                .expect("Failed to deserialize");
        assert!(accessor.groups.is_empty());
        assert!(!accessor.is_deactivated());
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session {
            token: "secret-id-token".to_string(),
            photo_url: None,
        };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-id-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_event_from_id_token() {
        assert_eq!(
            SessionEvent::from_id_token(Some("id-token".to_string()), None),
            SessionEvent::SignedIn(Session {
                token: "id-token".to_string(),
                photo_url: None,
            })
        );
        assert_eq!(SessionEvent::from_id_token(None, None), SessionEvent::SignedOut);
        assert_eq!(
            SessionEvent::from_id_token(Some("  ".to_string()), Some("p.png".to_string())),
            SessionEvent::SignedOut
        );
    }

    #[test]
    fn test_state_accessor() {
        assert!(SessionState::Pending.accessor().is_none());
        assert!(SessionState::SignedOut.accessor().is_none());
    }
}
