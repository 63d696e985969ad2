use crate::access::{decide, GuardDecision, NavigationRequest};
use crate::cli::actions::{load_registry, Action, StateInput};
use crate::session::{Accessor, SessionState};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Handle the decide action
pub fn handle(action: Action) -> Result<()> {
    if let Action::Decide {
        pages,
        route,
        path,
        query,
        state,
    } = action
    {
        let registry = load_registry(pages.as_ref())?;
        let state = session_state(&state)?;
        let request = NavigationRequest::new(route, path).with_query(&query);
        let decision = decide(&registry, &request, &state)?;
        println!("{}", render(&decision)?);
    }

    Ok(())
}

fn session_state(input: &StateInput) -> Result<SessionState> {
    Ok(match input {
        StateInput::Pending => SessionState::Pending,
        StateInput::SignedOut => SessionState::SignedOut,
        StateInput::Accessor(file) => SessionState::SignedIn(read_accessor(file)?),
    })
}

fn read_accessor(file: &Path) -> Result<Accessor> {
    let mut document = String::new();
    if file == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut document)
            .context("Error reading accessor from stdin")?;
    } else {
        document = std::fs::read_to_string(file)
            .with_context(|| format!("Error reading accessor {}", file.display()))?;
    }

    let accessor: Accessor =
        serde_json::from_str(&document).context("Error parsing accessor JSON")?;
    debug!(accessor = %accessor.id, groups = accessor.groups.len(), "accessor loaded");
    Ok(accessor)
}

fn render(decision: &GuardDecision) -> Result<String> {
    Ok(serde_json::to_string_pretty(decision)?)
}
