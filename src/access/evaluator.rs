use super::registry::{PageRegistry, RegistryError};
use crate::paths;
use std::collections::BTreeSet;

/// Returns whether any of `user_groups` may view `path`.
///
/// Only the first segment of `path` is used as the registry key. The root
/// path is open to every group set, including an empty one.
///
/// # Errors
/// Returns [`RegistryError::UnknownPage`] when `path` has no descriptor. That
/// is a configuration defect; [`PageRegistry::validate`] catches it at startup.
pub fn has_access(
    registry: &PageRegistry,
    path: &str,
    user_groups: &BTreeSet<String>,
) -> Result<bool, RegistryError> {
    if paths::is_root(path) {
        return Ok(true);
    }

    let page = registry.lookup(path)?;
    Ok(!page.groups.is_disjoint(user_groups))
}

impl PageRegistry {
    /// See [`has_access`].
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownPage`] for unregistered paths.
    pub fn has_access(
        &self,
        path: &str,
        user_groups: &BTreeSet<String>,
    ) -> Result<bool, RegistryError> {
        has_access(self, path, user_groups)
    }
}
