use crate::cli::actions::{Action, StateInput};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let pages = matches.get_one::<String>("pages").map(PathBuf::from);

    match matches.subcommand() {
        Some(("routes", _)) => Ok(Action::Routes { pages }),
        Some(("decide", sub_m)) => {
            let path = sub_m
                .get_one::<String>("path")
                .cloned()
                .context("missing required argument: <path>")?;
            let route = sub_m
                .get_one::<String>("route")
                .cloned()
                .unwrap_or_else(|| path.clone());

            let state = if let Some(file) = sub_m.get_one::<String>("accessor") {
                StateInput::Accessor(PathBuf::from(file))
            } else if sub_m.get_flag("pending") {
                StateInput::Pending
            } else {
                StateInput::SignedOut
            };

            Ok(Action::Decide {
                pages,
                route,
                path,
                query: sub_m.get_one::<String>("query").cloned().unwrap_or_default(),
                state,
            })
        }
        Some(("resume", sub_m)) => Ok(Action::Resume {
            url: sub_m
                .get_one::<String>("url")
                .cloned()
                .context("missing required argument: <url>")?,
        }),
        _ => Err(anyhow::anyhow!("unknown subcommand")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_decide_defaults_route_and_state() {
        temp_env::with_vars([("SHIPDESK_PAGES", None::<String>)], || {
            let matches = commands::new().get_matches_from(vec!["shipdesk", "decide", "/shipments"]);
            assert_eq!(
                handler(&matches).unwrap(),
                Action::Decide {
                    pages: None,
                    route: "/shipments".to_string(),
                    path: "/shipments".to_string(),
                    query: String::new(),
                    state: StateInput::SignedOut,
                }
            );
        });
    }

    #[test]
    fn test_decide_with_accessor_and_pages() {
        temp_env::with_vars([("SHIPDESK_PAGES", None::<String>)], || {
            let matches = commands::new().get_matches_from(vec![
                "shipdesk",
                "--pages",
                "pages.json",
                "decide",
                "/shipment/WB-1",
                "--route",
                "/shipment/:waybill_number",
                "-a",
                "-",
            ]);
            assert_eq!(
                handler(&matches).unwrap(),
                Action::Decide {
                    pages: Some(PathBuf::from("pages.json")),
                    route: "/shipment/:waybill_number".to_string(),
                    path: "/shipment/WB-1".to_string(),
                    query: String::new(),
                    state: StateInput::Accessor(PathBuf::from("-")),
                }
            );
        });
    }

    #[test]
    fn test_resume() {
        let matches = commands::new().get_matches_from(vec![
            "shipdesk",
            "resume",
            "/login?redirect=shipments",
        ]);
        assert_eq!(
            handler(&matches).unwrap(),
            Action::Resume {
                url: "/login?redirect=shipments".to_string()
            }
        );
    }
}
