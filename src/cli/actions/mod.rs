pub mod decide;
pub mod resume;
pub mod routes;

use crate::access::PageRegistry;
use crate::paths;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Session state requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateInput {
    Pending,
    SignedOut,
    /// Accessor JSON read from a file, or stdin for `-`.
    Accessor(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Routes {
        pages: Option<PathBuf>,
    },
    Decide {
        pages: Option<PathBuf>,
        route: String,
        path: String,
        query: String,
        state: StateInput,
    },
    Resume {
        url: String,
    },
}

/// Loads the page registry and fails unless it covers every protected route.
pub fn load_registry(pages: Option<&PathBuf>) -> Result<PageRegistry> {
    let registry = match pages {
        Some(file) => {
            let document = std::fs::read_to_string(file)
                .with_context(|| format!("Error reading page registry {}", file.display()))?;
            PageRegistry::from_json(&document)?
        }
        None => PageRegistry::builtin()?,
    };

    registry
        .validate(paths::PROTECTED)
        .context("Page registry does not match the route table")?;

    info!(pages = registry.pages().len(), "page registry valid");
    Ok(registry)
}
