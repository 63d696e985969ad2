use crate::cli::actions::Action;
use crate::session::{
    CurrentLocation, DemoProfileSource, Session, SessionEvent, SessionListener,
};
use anyhow::{anyhow, Result};
use url::Url;

/// Handle the resume action: replay a demo sign-in on a login URL.
pub async fn handle(action: Action) -> Result<()> {
    if let Action::Resume { url } = action {
        let location = location(&url)?;
        let listener = SessionListener::new(DemoProfileSource);
        let session = Session {
            token: String::new(),
            photo_url: None,
        };
        let navigate = listener
            .handle(SessionEvent::SignedIn(session), &location)
            .await
            .and_then(|outcome| outcome.navigate);

        match navigate {
            Some(target) => println!("{target}"),
            None => println!("stays on {}", location.pathname),
        }
    }

    Ok(())
}

/// Accepts absolute URLs and bare `path?query` strings.
fn location(input: &str) -> Result<CurrentLocation> {
    let base = Url::parse("http://shipdesk.invalid/")?;
    let url = base
        .join(input)
        .map_err(|err| anyhow!("Error parsing URL {input}: {err}"))?;

    Ok(CurrentLocation::new(
        url.path(),
        url.query().map(|query| format!("?{query}")).unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_relative_url() {
        let location = location("/login?redirect=shipments&tab=events").unwrap();
        assert_eq!(location.pathname, "/login");
        assert_eq!(location.search, "?redirect=shipments&tab=events");
    }

    #[test]
    fn test_location_from_absolute_url() {
        let location = location("https://console.shipdesk.dev/shipments").unwrap();
        assert_eq!(location.pathname, "/shipments");
        assert_eq!(location.search, "");
    }

    #[tokio::test]
    async fn test_handle_prints_without_error() {
        let action = Action::Resume {
            url: "/login?redirect=shipments".to_string(),
        };
        assert!(handle(action).await.is_ok());
    }
}
