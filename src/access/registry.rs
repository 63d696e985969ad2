use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::debug;

/// Page registry compiled into the binary.
pub const BUILTIN_PAGES: &str = include_str!("../../config/pages.json");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no page descriptor registered for `{0}`")]
    UnknownPage(String),
    #[error("page descriptor `{0}` is registered more than once")]
    DuplicatePage(String),
    #[error("page descriptor with an empty path")]
    EmptyPath,
    #[error("invalid page registry: {0}")]
    Parse(String),
}

/// Maps a route's first path segment to the groups permitted to view it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageDescriptor {
    pub path: String,
    #[serde(default)]
    pub groups: BTreeSet<String>,
}

impl PageDescriptor {
    pub fn new<I, S>(path: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered, immutable list of page descriptors. Lookups return the first
/// descriptor whose path matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
}

impl PageRegistry {
    #[must_use]
    pub fn new(pages: Vec<PageDescriptor>) -> Self {
        Self { pages }
    }

    /// Parses a JSON array of descriptors.
    ///
    /// # Errors
    /// Returns [`RegistryError::Parse`] when the document is not a descriptor list.
    pub fn from_json(document: &str) -> Result<Self, RegistryError> {
        let pages: Vec<PageDescriptor> =
            serde_json::from_str(document).map_err(|err| RegistryError::Parse(err.to_string()))?;
        debug!(pages = pages.len(), "loaded page registry");
        Ok(Self::new(pages))
    }

    /// The registry shipped in `config/pages.json`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Parse`] if the embedded document is malformed.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_PAGES)
    }

    #[must_use]
    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// Finds the descriptor for the first segment of `path`.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownPage`] when nothing is registered for it.
    pub fn lookup(&self, path: &str) -> Result<&PageDescriptor, RegistryError> {
        let key = paths::page_key(path);
        self.pages
            .iter()
            .find(|page| page.path == key)
            .ok_or_else(|| RegistryError::UnknownPage(key.to_string()))
    }

    /// Checks the registry against a route table: every non-root protected
    /// route needs a descriptor, and descriptor keys must be unique and
    /// non-empty. Run this at startup so a missing descriptor never surfaces
    /// as a render-time failure.
    ///
    /// # Errors
    /// Returns the first configuration defect found.
    pub fn validate(&self, protected: &[&str]) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.path.is_empty() {
                return Err(RegistryError::EmptyPath);
            }
            if !seen.insert(page.path.as_str()) {
                return Err(RegistryError::DuplicatePage(page.path.clone()));
            }
        }

        for route in protected.iter().filter(|route| !paths::is_root(route)) {
            self.lookup(route)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_covers_protected_routes() {
        let registry = PageRegistry::builtin().expect("builtin registry parses");
        assert!(registry.validate(paths::PROTECTED).is_ok());
        assert_eq!(
            registry.lookup(paths::SHIPMENTS).map(|page| page.path.as_str()),
            Ok("shipments")
        );
    }

    #[test]
    fn test_lookup_uses_first_segment() {
        let registry = PageRegistry::new(vec![PageDescriptor::new("shipment", ["Ops"])]);
        let page = registry
            .lookup("/shipment/:waybill_number/track")
            .expect("descriptor");
        assert!(page.groups.contains("Ops"));
    }

    #[test]
    fn test_lookup_unknown_page() {
        let registry = PageRegistry::default();
        assert_eq!(
            registry.lookup("/invoices"),
            Err(RegistryError::UnknownPage("invoices".to_string()))
        );
    }

    #[test]
    fn test_validate_reports_missing_descriptor() {
        let registry = PageRegistry::new(vec![PageDescriptor::new("shipments", ["Ops"])]);
        assert_eq!(
            registry.validate(paths::PROTECTED),
            Err(RegistryError::UnknownPage("shipment".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_duplicates_and_empty_paths() {
        let duplicated = PageRegistry::new(vec![
            PageDescriptor::new("shipments", ["Ops"]),
            PageDescriptor::new("shipments", ["Developer admin"]),
        ]);
        assert_eq!(
            duplicated.validate(&[]),
            Err(RegistryError::DuplicatePage("shipments".to_string()))
        );

        let empty = PageRegistry::new(vec![PageDescriptor::new("", ["Ops"])]);
        assert_eq!(empty.validate(&[]), Err(RegistryError::EmptyPath));
    }

    #[test]
    fn test_from_json_defaults_missing_groups() {
        let registry = PageRegistry::from_json(r#"[{"path": "reports"}]"#).expect("parses");
        assert!(registry.pages()[0].groups.is_empty());

        assert!(matches!(
            PageRegistry::from_json("{\"path\": \"reports\"}"),
            Err(RegistryError::Parse(_))
        ));
    }
}
