//! CLI command implementations for inspecting module navigation.
//!
//! Commands operate on a registry built from the modules directory and
//! print JSON to stdout for the view layer or for humans with `jq`.

use anyhow::{Context, Result, bail};

use crate::landing::{LandingConfig, default_route_path};
use crate::menu::NavRegistry;
use crate::session::SessionView;

/// Print the navigation tree visible to `session`.
pub fn cmd_tree(registry: &NavRegistry, session: &SessionView) -> Result<()> {
    let tree = registry.visible_tree(Some(session));
    let json = serde_json::to_string_pretty(&tree).context("failed to serialize tree")?;
    println!("{json}");
    Ok(())
}

/// Print the flat route list, nav or not, in registration order.
pub fn cmd_routes(registry: &NavRegistry) -> Result<()> {
    let json =
        serde_json::to_string_pretty(registry.routes()).context("failed to serialize routes")?;
    println!("{json}");
    Ok(())
}

/// Print the route matching `path` with its parameters.
pub fn cmd_match(registry: &NavRegistry, path: &str) -> Result<()> {
    let Some(route_match) = registry.match_path(path) else {
        bail!("no route matches '{path}'");
    };
    let json =
        serde_json::to_string_pretty(&route_match).context("failed to serialize route match")?;
    println!("{json}");
    Ok(())
}

/// Print the landing route for `session`.
pub fn cmd_landing(session: &SessionView, landing: &LandingConfig) -> Result<()> {
    println!("{}", default_route_path(session, landing));
    Ok(())
}

/// Build the session described by command-line flags.
pub fn session_from_args(permissions: Vec<String>, anonymous: bool) -> SessionView {
    if anonymous {
        SessionView::anonymous()
    } else {
        SessionView::with_permissions(permissions)
    }
}
