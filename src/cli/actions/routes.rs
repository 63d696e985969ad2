use crate::cli::actions::{load_registry, Action};
use crate::paths;
use anyhow::Result;

/// Handle the routes action
pub fn handle(action: Action) -> Result<()> {
    if let Action::Routes { pages } = action {
        let registry = load_registry(pages.as_ref())?;
        for line in table(&registry) {
            println!("{line}");
        }
    }

    Ok(())
}

fn table(registry: &crate::access::PageRegistry) -> Vec<String> {
    let mut lines = Vec::new();
    for route in paths::PROTECTED {
        let groups = if paths::is_root(route) {
            "any signed-in user".to_string()
        } else {
            registry
                .lookup(route)
                .map(|page| page.groups.iter().cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_default()
        };
        lines.push(format!("{route:<34} protected  {groups}"));
    }
    for route in paths::PUBLIC {
        lines.push(format!("{route:<34} public"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::PageRegistry;

    #[test]
    fn test_table_lists_every_route() {
        let registry = PageRegistry::builtin().unwrap();
        let lines = table(&registry);

        assert_eq!(lines.len(), paths::PROTECTED.len() + paths::PUBLIC.len());
        assert!(lines
            .iter()
            .any(|line| line.starts_with("/shipments ") && line.ends_with("Developer admin")));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("/login ") && line.ends_with("public")));
    }
}
