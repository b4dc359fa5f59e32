//! Session view consumed by authorization and landing decisions.
//!
//! The kernel never authenticates anyone. It receives an already-resolved
//! set of permission strings and only evaluates predicates against it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The part of a user session the navigation core cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Resolved permissions; `None` means no permission set was resolved.
    #[serde(default)]
    pub effective_permissions: Option<HashSet<String>>,
}

impl SessionView {
    /// Session with no permission set (unauthenticated).
    pub fn anonymous() -> Self {
        Self {
            effective_permissions: None,
        }
    }

    /// Session holding the given permissions.
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            effective_permissions: Some(permissions.into_iter().map(Into::into).collect()),
        }
    }

    /// Whether a permission set was resolved at all (it may still be empty).
    pub fn has_permission_set(&self) -> bool {
        self.effective_permissions.is_some()
    }

    /// Check if the session holds `permission`. A missing set holds nothing.
    pub fn holds(&self, permission: &str) -> bool {
        self.effective_permissions
            .as_ref()
            .is_some_and(|set| set.contains(permission))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_holds_nothing() {
        let session = SessionView::anonymous();
        assert!(!session.has_permission_set());
        assert!(!session.holds("a"));
    }

    #[test]
    fn empty_set_is_still_a_set() {
        let session = SessionView::with_permissions(Vec::<String>::new());
        assert!(session.has_permission_set());
        assert!(!session.holds("a"));
    }

    #[test]
    fn holds_listed_permissions() {
        let session = SessionView::with_permissions(["a", "b"]);
        assert!(session.holds("a"));
        assert!(session.holds("b"));
        assert!(!session.holds("c"));
    }

    #[test]
    fn deserializes_without_permissions_field() {
        let session: SessionView = serde_json::from_str("{}").unwrap();
        assert_eq!(session, SessionView::anonymous());
    }
}
