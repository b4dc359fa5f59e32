//! Parser and loader for module `.routes.toml` manifests.
//!
//! Each module lives in its own directory under the modules directory and
//! ships exactly one `{name}.routes.toml` file declaring:
//! - name and weight (aggregation order, lower first)
//! - routes, in the same shape modules use for JSON contributions

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};
use waymark_sdk::types::RouteDescriptor;

use crate::error::ManifestError;

/// Suffix identifying a module manifest file.
pub const MANIFEST_SUFFIX: &str = ".routes.toml";

/// A module's route contribution parsed from `.routes.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleManifest {
    /// Module machine name.
    pub name: String,

    /// Weight for aggregation ordering (lower = earlier, default 0).
    #[serde(default)]
    pub weight: i32,

    /// Routes contributed by this module, in registration order.
    #[serde(default)]
    pub routes: Vec<RouteDescriptor>,
}

impl ModuleManifest {
    /// Parse a manifest file from the given path.
    pub fn parse(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ManifestError::io(path.display().to_string(), e))?;

        Self::parse_str(&content, path)
    }

    /// Parse a manifest from a TOML string.
    pub fn parse_str(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let manifest: ModuleManifest =
            toml::from_str(content).map_err(|e| ManifestError::Parse {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;

        manifest.validate(path)?;
        Ok(manifest)
    }

    fn validate(&self, path: &Path) -> Result<(), ManifestError> {
        if self.name.trim().is_empty() {
            return Err(ManifestError::EmptyName {
                path: path.display().to_string(),
            });
        }

        for route in &self.routes {
            if !route.path.starts_with('/') {
                return Err(ManifestError::InvalidPath {
                    module: self.name.clone(),
                    route: route.name.clone(),
                    path: route.path.clone(),
                });
            }

            if let Some(nav) = &route.nav
                && nav.section.trim().is_empty()
            {
                return Err(ManifestError::EmptySection {
                    module: self.name.clone(),
                    route: route.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Load a single module from its directory.
pub fn load_module(module_dir: &Path) -> Result<ModuleManifest, ManifestError> {
    let manifests: Vec<_> = std::fs::read_dir(module_dir)
        .map_err(|e| ManifestError::io(module_dir.display().to_string(), e))?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(MANIFEST_SUFFIX))
        })
        .collect();

    match manifests.as_slice() {
        [] => Err(ManifestError::missing_manifest(
            module_dir.display().to_string(),
        )),
        [manifest] => ModuleManifest::parse(&manifest.path()),
        _ => Err(ManifestError::MultipleManifests {
            path: module_dir.display().to_string(),
        }),
    }
}

/// Load every module under `modules_dir`.
///
/// Modules that fail to load are logged and skipped. The result is ordered
/// by (weight, name) so aggregation order does not depend on the
/// filesystem.
pub fn load_modules(modules_dir: &Path) -> Result<Vec<ModuleManifest>, ManifestError> {
    if !modules_dir.exists() {
        warn!(?modules_dir, "modules directory does not exist, skipping");
        return Ok(Vec::new());
    }

    let mut entries: Vec<_> = std::fs::read_dir(modules_dir)
        .map_err(|e| ManifestError::io(modules_dir.display().to_string(), e))?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .collect();

    // Sort for deterministic scan order
    entries.sort_by_key(|e| e.file_name());

    let mut modules = Vec::new();
    for entry in entries {
        let module_dir = entry.path();
        match load_module(&module_dir) {
            Ok(manifest) => modules.push(manifest),
            Err(e) => {
                warn!(
                    module_dir = %module_dir.display(),
                    error = %e,
                    "failed to load module, skipping"
                );
            }
        }
    }

    modules.sort_by(|a, b| (a.weight, &a.name).cmp(&(b.weight, &b.name)));

    info!(count = modules.len(), "loaded modules");
    Ok(modules)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let toml = r#"
name = "security"
weight = -5

[[routes]]
path = "/login"
name = "Login"
view = "Login"

[[routes]]
path = "/users"
name = "Users"
view = "UserList"

[routes.nav]
section = "Security"
section_index = 1
section_icon_class = "fa fa-lock"
caption = "Users"
permission = "users.read"
any_required = ["users.read", "users.admin"]
"#;

        let manifest = ModuleManifest::parse_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(manifest.name, "security");
        assert_eq!(manifest.weight, -5);
        assert_eq!(manifest.routes.len(), 2);
        assert!(manifest.routes[0].nav.is_none());

        let nav = manifest.routes[1].nav.as_ref().unwrap();
        assert_eq!(nav.section, "Security");
        assert_eq!(nav.section_index, Some(1));
        assert_eq!(nav.any_required.len(), 2);
        assert!(nav.index.is_none());
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest =
            ModuleManifest::parse_str(r#"name = "empty""#, Path::new("test.toml")).unwrap();
        assert_eq!(manifest.weight, 0);
        assert!(manifest.routes.is_empty());
    }

    #[test]
    fn reject_empty_name() {
        let result = ModuleManifest::parse_str(r#"name = """#, Path::new("test.toml"));
        assert!(matches!(result, Err(ManifestError::EmptyName { .. })));
    }

    #[test]
    fn reject_relative_path() {
        let toml = r#"
name = "reports"

[[routes]]
path = "reports"
name = "Reports"
"#;
        let result = ModuleManifest::parse_str(toml, Path::new("test.toml"));
        assert!(matches!(result, Err(ManifestError::InvalidPath { .. })));
    }

    #[test]
    fn reject_empty_section() {
        let toml = r#"
name = "reports"

[[routes]]
path = "/reports"
name = "Reports"

[routes.nav]
section = ""
"#;
        let result = ModuleManifest::parse_str(toml, Path::new("test.toml"));
        assert!(matches!(result, Err(ManifestError::EmptySection { .. })));
    }

    #[test]
    fn reject_invalid_toml() {
        let result = ModuleManifest::parse_str("name = ", Path::new("bad.toml"));
        let err = result.unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_modules_dir_yields_nothing() {
        let modules = load_modules(Path::new("/nonexistent/waymark/modules")).unwrap();
        assert!(modules.is_empty());
    }
}
