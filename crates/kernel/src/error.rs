//! Module manifest error types with clear, actionable messages.
//!
//! All errors include the module name or manifest path to help developers
//! quickly find the offending file.

use thiserror::Error;

/// Errors that can occur while loading module route manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A manifest file or module directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Module directory is missing the .routes.toml manifest file.
    #[error("module '{module}': no .routes.toml manifest found in {path}")]
    MissingManifest { module: String, path: String },

    /// Multiple .routes.toml files found in module directory.
    #[error("module directory '{path}': multiple .routes.toml files found, expected exactly one")]
    MultipleManifests { path: String },

    /// The manifest is not valid TOML or does not have the expected shape.
    #[error("manifest {path}: failed to parse: {details}")]
    Parse { path: String, details: String },

    /// The manifest has an empty `name`.
    #[error("manifest {path}: empty 'name' field")]
    EmptyName { path: String },

    /// A route path is not absolute.
    #[error("module '{module}': route '{route}' has path '{path}', which must start with '/'")]
    InvalidPath {
        module: String,
        route: String,
        path: String,
    },

    /// A nav block names no section.
    #[error("module '{module}': route '{route}' has a nav block with an empty 'section'")]
    EmptySection { module: String, route: String },
}

impl ManifestError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing manifest error, naming the module after its directory.
    pub fn missing_manifest(path: impl Into<String>) -> Self {
        let path = path.into();
        let module = std::path::Path::new(&path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self::MissingManifest { module, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manifest_names_module_directory() {
        let err = ManifestError::missing_manifest("/srv/modules/security");
        let msg = err.to_string();
        assert!(msg.contains("'security'"));
        assert!(msg.contains(".routes.toml"));
    }

    #[test]
    fn invalid_path_shows_offending_value() {
        let err = ManifestError::InvalidPath {
            module: "reports".to_string(),
            route: "Daily".to_string(),
            path: "reports/daily".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("reports/daily"));
        assert!(msg.contains("must start with '/'"));
    }
}
