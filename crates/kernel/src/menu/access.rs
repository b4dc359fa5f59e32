//! Authorization predicate for navigation routes.
//!
//! Decision table for a route carrying nav metadata:
//!
//! | `any_required` | outcome                                         |
//! |----------------|-------------------------------------------------|
//! | empty          | `permission` held AND every `all_required` held |
//! | non-empty      | at least one `any_required` held                |
//!
//! Absent `permission` and empty `all_required` count as satisfied. A
//! non-empty `any_required` is the final word and overrides a failed
//! `permission` or `all_required` check.

use tracing::warn;
use waymark_sdk::types::{NavMetadata, RouteDescriptor};

use crate::session::SessionView;

/// Check whether `session` may see `route` in the navigation tree.
///
/// Routes without nav metadata are always authorized. A session without a
/// permission set holds nothing, so any declared requirement denies in
/// release builds and panics in debug builds.
pub fn is_authorized(route: &RouteDescriptor, session: &SessionView) -> bool {
    let Some(nav) = route.nav.as_ref() else {
        return true;
    };

    if declares_requirements(nav) && !session.has_permission_set() {
        warn!(
            route = %route.name,
            path = %route.path,
            "authorization queried without a permission set, denying"
        );
        debug_assert!(
            session.has_permission_set(),
            "route '{}' checked against a session without a permission set",
            route.name
        );
        return false;
    }

    let permission_ok = nav
        .permission
        .as_deref()
        .is_none_or(|permission| session.holds(permission));
    let all_ok = nav.all_required.iter().all(|p| session.holds(p));

    if nav.any_required.is_empty() {
        return permission_ok && all_ok;
    }

    nav.any_required.iter().any(|p| session.holds(p))
}

fn declares_requirements(nav: &NavMetadata) -> bool {
    nav.permission.is_some() || !nav.all_required.is_empty() || !nav.any_required.is_empty()
}
