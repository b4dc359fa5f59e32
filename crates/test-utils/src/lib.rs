//! Waymark test utilities.
//!
//! Helpers for integration testing: module fixtures mirroring a small
//! admin application, JSON contribution helpers, and the path of the
//! sample modules directory.

use std::path::PathBuf;

use waymark_sdk::types::{NavMetadata, RouteDescriptor};

/// Permission to list users.
pub const USERS_READ: &str = "users.read";
/// Permission to list roles.
pub const ROLES_READ: &str = "roles.read";
/// Permission to read reports.
pub const REPORTS_READ: &str = "reports.read";

/// Create a test navigation route in `section` with default values.
pub fn test_route(path: &str, name: &str, section: &str) -> TestRoute {
    TestRoute {
        route: RouteDescriptor::new(path, name).view(name),
        nav: NavMetadata::new(section),
    }
}

/// A navigation route builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestRoute {
    route: RouteDescriptor,
    nav: NavMetadata,
}

impl TestRoute {
    /// Set an explicit in-section index.
    pub fn with_index(mut self, index: i32) -> Self {
        self.nav.index = Some(index);
        self
    }

    /// Set the owning section's index.
    pub fn with_section_index(mut self, index: i32) -> Self {
        self.nav.section_index = Some(index);
        self
    }

    /// Set the owning section's icon.
    pub fn with_icon(mut self, icon_class: &str) -> Self {
        self.nav.section_icon_class = Some(icon_class.to_string());
        self
    }

    /// Require a single permission.
    pub fn requiring(mut self, permission: &str) -> Self {
        self.nav.permission = Some(permission.to_string());
        self
    }

    /// Require every listed permission.
    pub fn requiring_all(mut self, permissions: &[&str]) -> Self {
        self.nav.all_required = permissions.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Require at least one listed permission.
    pub fn requiring_any(mut self, permissions: &[&str]) -> Self {
        self.nav.any_required = permissions.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Finish the descriptor.
    pub fn build(self) -> RouteDescriptor {
        self.route.nav(self.nav)
    }
}

/// Routes of a security module: two nav routes and two plain ones.
///
/// "Security" gets section index 1. Users requires `users.read`, Roles
/// requires `roles.read`.
pub fn security_module() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("/login", "Login").view("Login"),
        test_route("/users", "Users", "Security")
            .with_index(0)
            .with_section_index(1)
            .with_icon("fa fa-lock")
            .requiring(USERS_READ)
            .build(),
        test_route("/roles", "Roles", "Security")
            .with_index(1)
            .requiring(ROLES_READ)
            .build(),
        RouteDescriptor::new("/users/:id", "EditUser").view("UserForm"),
    ]
}

/// Routes of a reports module: one nav route in "Reports" (index 2).
pub fn reports_module() -> Vec<RouteDescriptor> {
    vec![
        test_route("/reports", "Reports", "Reports")
            .with_section_index(2)
            .with_icon("fa fa-chart-bar")
            .requiring(REPORTS_READ)
            .build(),
    ]
}

/// Serialize routes the way a module hands its contribution to the kernel.
pub fn module_json(routes: &[RouteDescriptor]) -> String {
    serde_json::to_string(routes).unwrap_or_else(|_| "[]".to_string())
}

/// Path of the sample modules directory shipped with the workspace.
pub fn modules_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("modules")
}

/// Owned permission list from string literals.
pub fn permissions(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
