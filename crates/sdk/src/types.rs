//! Route descriptor types shared between modules and the kernel.

use serde::{Deserialize, Serialize};

/// A navigable path contributed by a module.
///
/// Descriptors without [`NavMetadata`] are routable but never appear in the
/// navigation tree (login screens, edit forms reached by direct link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// URL pattern, may contain `:name` placeholders (e.g. "/users/:id").
    pub path: String,
    /// Identifier for the route. Not required to be unique.
    pub name: String,
    /// Opaque reference to whatever the view layer renders for this route.
    #[serde(default)]
    pub view: String,
    /// Navigation metadata; absent for non-menu routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<NavMetadata>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: String::new(),
            nav: None,
        }
    }

    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = view.into();
        self
    }

    pub fn nav(mut self, nav: NavMetadata) -> Self {
        self.nav = Some(nav);
        self
    }

    /// Whether this route takes part in the navigation tree.
    pub fn is_navigable(&self) -> bool {
        self.nav.is_some()
    }
}

/// Navigation metadata attached to a [`RouteDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMetadata {
    /// Key of the section this route is grouped under.
    pub section: String,
    /// Overrides the owning section's display order when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_index: Option<i32>,
    /// Overrides the owning section's icon when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_icon_class: Option<String>,
    /// Display label, possibly a template resolved by the view layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Display order within the section. Assigned at registration if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    /// Single permission the session must hold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// Every listed permission must be held (ignored when empty).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_required: Vec<String>,
    /// At least one listed permission must be held (ignored when empty).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_required: Vec<String>,
}

impl NavMetadata {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            ..Self::default()
        }
    }

    pub fn section_index(mut self, index: i32) -> Self {
        self.section_index = Some(index);
        self
    }

    pub fn section_icon_class(mut self, icon_class: impl Into<String>) -> Self {
        self.section_icon_class = Some(icon_class.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn index(mut self, index: i32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn all_required<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all_required = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn any_required<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.any_required = permissions.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_nav_fields() {
        let route = RouteDescriptor::new("/users", "Users").view("UserList").nav(
            NavMetadata::new("Security")
                .section_index(1)
                .caption("Users")
                .permission("users.read")
                .any_required(["a", "b"]),
        );

        assert!(route.is_navigable());
        let nav = route.nav.unwrap();
        assert_eq!(nav.section, "Security");
        assert_eq!(nav.section_index, Some(1));
        assert_eq!(nav.permission.as_deref(), Some("users.read"));
        assert_eq!(nav.any_required, vec!["a", "b"]);
        assert!(nav.all_required.is_empty());
        assert!(nav.index.is_none());
    }

    #[test]
    fn json_without_nav_is_plain_route() {
        let json = r#"{"path": "/login", "name": "Login"}"#;
        let route: RouteDescriptor = serde_json::from_str(json).unwrap();
        assert!(!route.is_navigable());
        assert!(route.view.is_empty());
    }

    #[test]
    fn json_nav_defaults_optional_fields() {
        let json = r#"{
            "path": "/reports",
            "name": "Reports",
            "view": "ReportList",
            "nav": {"section": "Reports", "all_required": ["reports.read"]}
        }"#;
        let route: RouteDescriptor = serde_json::from_str(json).unwrap();
        let nav = route.nav.unwrap();
        assert_eq!(nav.all_required, vec!["reports.read"]);
        assert!(nav.any_required.is_empty());
        assert!(nav.section_icon_class.is_none());
    }

    #[test]
    fn serialized_form_omits_absent_fields() {
        let route = RouteDescriptor::new("/hello", "HelloWorld").nav(NavMetadata::new("Home"));
        let json = serde_json::to_string(&route).unwrap();
        assert!(!json.contains("permission"));
        assert!(!json.contains("any_required"));
        assert!(json.contains(r#""section":"Home""#));
    }
}
