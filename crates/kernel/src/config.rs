//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::landing::{DEFAULT_HOME_PATH, DEFAULT_LOGIN_PATH, LandingConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to module manifests directory (default: ./modules).
    pub modules_dir: PathBuf,

    /// Landing routes for the default route decision.
    pub landing: LandingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let modules_dir = env::var("WAYMARK_MODULES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./modules"));

        let login_path =
            env::var("WAYMARK_LOGIN_PATH").unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_string());

        let home_path =
            env::var("WAYMARK_HOME_PATH").unwrap_or_else(|_| DEFAULT_HOME_PATH.to_string());

        Self {
            modules_dir,
            landing: LandingConfig {
                login_path,
                home_path,
            },
        }
    }
}
