//! Default landing route decision.

use crate::session::SessionView;

/// Default login route path.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default authenticated entry route path.
pub const DEFAULT_HOME_PATH: &str = "/hello";

/// Entry routes for unauthenticated and authenticated sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingConfig {
    pub login_path: String,
    pub home_path: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
        }
    }
}

/// Pick the route a session lands on.
///
/// Only the presence of a permission set matters: an empty set still lands
/// on the home route.
pub fn default_route_path<'a>(session: &SessionView, config: &'a LandingConfig) -> &'a str {
    if session.has_permission_set() {
        &config.home_path
    } else {
        &config.login_path
    }
}
