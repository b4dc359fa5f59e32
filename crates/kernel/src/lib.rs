//! Waymark Kernel Library
//!
//! Navigation registry and authorization filtering for an administrative
//! application. Modules contribute route descriptors; the kernel aggregates
//! them into sections and answers per-session visibility queries.
//! The `waymark` binary inspects a modules directory from the command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod landing;
pub mod manifest;
pub mod menu;
pub mod session;
pub mod sort;

pub use config::Config;
pub use error::ManifestError;
pub use landing::{LandingConfig, default_route_path};
pub use manifest::{ModuleManifest, load_modules};
pub use menu::{NavItem, NavRegistry, RouteMatch, Section, is_authorized};
pub use session::SessionView;
pub use sort::{Indexed, sort_by_index};
pub use waymark_sdk::types::{NavMetadata, RouteDescriptor};
