//! Encoding of "where the user tried to go" into the login URL and back.
//!
//! The destination travels as the `redirect` query parameter; the requested
//! query parameters follow it unchanged. Everything is
//! `application/x-www-form-urlencoded`, so keys and values may contain `&`,
//! `=` or non-ASCII text.

use crate::paths;
use serde::Serialize;
use url::form_urlencoded;

/// Query parameter carrying the destination path.
pub const REDIRECT_PARAM: &str = "redirect";
/// Destinations are cut to this many characters, never inside a code point.
pub const MAX_DESTINATION_CHARS: usize = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRedirect {
    destination: String,
    params: Vec<(String, String)>,
}

impl LoginRedirect {
    /// Builds a redirect for `path`. Tabs and line breaks are removed the way
    /// URL parsers remove them, then leading slashes, backslashes, control
    /// characters and whitespace are stripped so the restored URL is always a
    /// local path.
    #[must_use]
    pub fn new(path: &str, params: Vec<(String, String)>) -> Self {
        let path: String = path
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect();
        let destination = path
            .trim_start_matches(|c: char| {
                matches!(c, '/' | '\\') || c.is_control() || c.is_whitespace()
            })
            .chars()
            .take(MAX_DESTINATION_CHARS)
            .collect();
        let params = params
            .into_iter()
            .filter(|(key, _)| key != REDIRECT_PARAM)
            .collect();

        Self {
            destination,
            params,
        }
    }

    /// Decodes the query string of a login URL (with or without `?`). A
    /// missing `redirect` parameter means the root destination.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut destination = None;
        let mut params = Vec::new();
        for (key, value) in parse_query(query) {
            if key == REDIRECT_PARAM {
                destination.get_or_insert(value);
            } else {
                params.push((key, value));
            }
        }

        Self::new(destination.as_deref().unwrap_or_default(), params)
    }

    /// Destination path without its leading slash.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// `/login?redirect=<destination>&<params>`
    #[must_use]
    pub fn to_login_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(REDIRECT_PARAM, &self.destination);
        query.extend_pairs(self.params.iter());
        format!("{}?{}", paths::LOGIN, query.finish())
    }

    /// URL to navigate to once signed in: `/<destination>` plus the original
    /// query parameters, if any.
    #[must_use]
    pub fn destination_url(&self) -> String {
        let mut url = format!("/{}", self.destination);
        if !self.params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.params.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

/// Splits a query string (leading `?` optional) into decoded pairs, in order.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_login_url_for_plain_path() {
        let redirect = LoginRedirect::new("/shipments", Vec::new());
        assert_eq!(redirect.to_login_url(), "/login?redirect=shipments");
    }

    #[test]
    fn test_login_url_keeps_query_params_in_order() {
        let redirect = LoginRedirect::new(
            "/shipments",
            vec![pair("status", "in transit"), pair("page", "2")],
        );
        assert_eq!(
            redirect.to_login_url(),
            "/login?redirect=shipments&status=in+transit&page=2"
        );
    }

    #[test]
    fn test_destination_is_truncated_on_char_boundary() {
        let long = format!("/{}", "é".repeat(150));
        let redirect = LoginRedirect::new(&long, Vec::new());
        assert_eq!(redirect.destination().chars().count(), MAX_DESTINATION_CHARS);
        assert!(redirect.destination().chars().all(|c| c == 'é'));

        let ascii = format!("/{}", "a".repeat(120));
        assert_eq!(
            LoginRedirect::new(&ascii, Vec::new()).destination(),
            "a".repeat(100)
        );
    }

    #[test]
    fn test_from_query_restores_destination_and_params() {
        let redirect =
            LoginRedirect::from_query("?redirect=shipment%2FWB-77&tab=events&q=a%26b");
        assert_eq!(redirect.destination(), "shipment/WB-77");
        assert_eq!(
            redirect.params(),
            &[pair("tab", "events"), pair("q", "a&b")][..]
        );
        assert_eq!(redirect.destination_url(), "/shipment/WB-77?tab=events&q=a%26b");
    }

    #[test]
    fn test_from_query_without_redirect_targets_root() {
        assert_eq!(LoginRedirect::from_query("").destination_url(), "/");
        assert_eq!(LoginRedirect::from_query("?lang=en").destination_url(), "/?lang=en");
    }

    #[test]
    fn test_first_redirect_param_wins() {
        let redirect = LoginRedirect::from_query("redirect=shipments&redirect=admin");
        assert_eq!(redirect.destination(), "shipments");
        assert!(redirect.params().is_empty());
    }

    #[test]
    fn test_destination_url_is_always_local() {
        for hostile in ["//evil.example", "/\\evil.example", "\\\\evil.example"] {
            let query = format!("redirect={}", hostile.replace('\\', "%5C"));
            let url = LoginRedirect::from_query(&query).destination_url();
            assert!(url.starts_with('/'), "{url}");
            assert!(!url.starts_with("//"), "{url}");
            assert!(!url.starts_with("/\\"), "{url}");
        }
    }

    #[test]
    fn test_destination_url_ignores_tabs_and_line_breaks() {
        let base = url::Url::parse("https://console.shipdesk.dev/login").expect("base");
        for hostile in [
            "%09/evil.example",
            "%0A/evil.example",
            "%0D/evil.example",
            "/%09/evil.example",
            "%2F%0D%0A%2Fevil.example",
            "%20//evil.example",
            "%00//evil.example",
        ] {
            let url = LoginRedirect::from_query(&format!("redirect={hostile}")).destination_url();
            assert_eq!(url, "/evil.example", "{hostile}");
            let joined = base.join(&url).expect("join");
            assert_eq!(joined.host_str(), Some("console.shipdesk.dev"), "{hostile}");
        }
    }

    #[test]
    fn test_inner_line_breaks_are_dropped() {
        let redirect = LoginRedirect::from_query("redirect=shipment%2FWB%0A-77");
        assert_eq!(redirect.destination(), "shipment/WB-77");
    }

    #[test]
    fn test_login_url_decodes_back() {
        let redirect = LoginRedirect::new(
            "/shipment/WB 1/track",
            vec![pair("from", "münchen"), pair("x", "1=2")],
        );
        let url = redirect.to_login_url();
        let query = url.split_once('?').map(|(_, query)| query).unwrap_or_default();
        assert_eq!(LoginRedirect::from_query(query), redirect);
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_query("?a=1&b"), vec![pair("a", "1"), pair("b", "")]);
        assert!(parse_query("").is_empty());
    }
}
