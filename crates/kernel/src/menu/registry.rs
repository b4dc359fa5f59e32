//! Navigation registry - aggregates route descriptors from modules.
//!
//! Modules contribute arrays of [`RouteDescriptor`]s, one aggregation call
//! per module, during startup. The registry keeps the flat route list for
//! the router and a section index for the navigation menu. Aggregation is
//! additive and order-sensitive: contributing the same module twice
//! duplicates its entries.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};
use waymark_sdk::types::{NavMetadata, RouteDescriptor};

use super::access::is_authorized;
use crate::manifest::ModuleManifest;
use crate::session::SessionView;
use crate::sort::{Indexed, sort_by_index};

/// A navigation route with its resolved display-order key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Order within the section, fixed at registration.
    pub index: i32,
    #[serde(flatten)]
    pub route: RouteDescriptor,
}

impl Indexed for NavItem {
    fn index(&self) -> i32 {
        self.index
    }
}

/// A named group of navigation routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section key, as named by `nav.section`.
    pub id: String,
    /// Display order among sections (last write wins).
    pub index: i32,
    /// Icon identifier (last write wins).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    /// Routes in registration order; sorted only when queried.
    pub routes: Vec<NavItem>,
}

impl Section {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            index: 0,
            icon_class: None,
            routes: Vec::new(),
        }
    }
}

impl Indexed for Section {
    fn index(&self) -> i32 {
        self.index
    }
}

/// Result of matching a path against registered routes.
#[derive(Debug, Clone, Serialize)]
pub struct RouteMatch {
    /// The matched route descriptor.
    pub route: RouteDescriptor,
    /// Path parameters extracted (e.g., {"id": "42"})
    pub params: HashMap<String, String>,
}

/// Registry of all route descriptors contributed by modules.
#[derive(Debug, Default)]
pub struct NavRegistry {
    /// Every registered route, nav or not, in registration order.
    routes: Vec<RouteDescriptor>,
    /// Sections in first-seen order.
    sections: Vec<Section>,
    /// Section id -> position in `sections`.
    section_map: HashMap<String, usize>,
    /// Positions in `routes`, most specific pattern first.
    route_table: Vec<usize>,
}

impl NavRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from JSON arrays contributed by modules.
    ///
    /// Each element in `module_jsons` is a (module_name, json_array) tuple,
    /// aggregated in the order given. A module whose JSON does not parse is
    /// skipped.
    pub fn from_module_results(module_jsons: Vec<(String, String)>) -> Self {
        let mut registry = Self::new();

        for (module_name, json) in module_jsons {
            match serde_json::from_str::<Vec<RouteDescriptor>>(&json) {
                Ok(routes) => {
                    registry.aggregate(routes);
                }
                Err(e) => {
                    warn!(
                        module = %module_name,
                        error = %e,
                        "failed to parse module routes"
                    );
                }
            }
        }

        registry
    }

    /// Create a registry from module manifests, aggregated in the order given.
    pub fn from_manifests(manifests: Vec<ModuleManifest>) -> Self {
        let mut registry = Self::new();

        for manifest in manifests {
            debug!(module = %manifest.name, weight = manifest.weight, "aggregating module");
            registry.aggregate(manifest.routes);
        }

        registry
    }

    /// Aggregate one module's contribution.
    ///
    /// Nav routes are attached to their section; a route without an explicit
    /// `nav.index` receives the section's current route count. Returns the
    /// full flat route list.
    pub fn aggregate<I>(&mut self, module_routes: I) -> &[RouteDescriptor]
    where
        I: IntoIterator<Item = RouteDescriptor>,
    {
        let before = self.routes.len();

        for mut route in module_routes {
            if let Some(nav) = route.nav.as_mut() {
                let position = self.section_position(&nav.section);
                let section = &mut self.sections[position];
                merge_section_meta(section, nav);
                let index = *nav.index.get_or_insert(section.routes.len() as i32);
                section.routes.push(NavItem {
                    index,
                    route: route.clone(),
                });
            }
            self.routes.push(route);
        }

        self.build_routes();
        debug!(
            added = self.routes.len() - before,
            routes = self.routes.len(),
            sections = self.sections.len(),
            "aggregated module routes"
        );

        &self.routes
    }

    /// Position of section `id`, creating it on first sight.
    fn section_position(&mut self, id: &str) -> usize {
        if let Some(&position) = self.section_map.get(id) {
            return position;
        }
        let position = self.sections.len();
        self.sections.push(Section::new(id));
        self.section_map.insert(id.to_string(), position);
        position
    }

    /// Navigation tree visible to `session`.
    ///
    /// Sections and their routes are both sorted by index. Sections whose
    /// routes are all filtered out are kept. Without a session, or with a
    /// session that carries no permission set, the tree is empty.
    pub fn visible_tree(&self, session: Option<&SessionView>) -> Vec<Section> {
        let Some(session) = session.filter(|s| s.has_permission_set()) else {
            return Vec::new();
        };

        let mut tree: Vec<Section> = self
            .sections
            .iter()
            .map(|section| {
                let mut routes: Vec<NavItem> = section
                    .routes
                    .iter()
                    .filter(|item| is_authorized(&item.route, session))
                    .cloned()
                    .collect();
                sort_by_index(&mut routes);

                Section {
                    id: section.id.clone(),
                    index: section.index,
                    icon_class: section.icon_class.clone(),
                    routes,
                }
            })
            .collect();

        sort_by_index(&mut tree);
        tree
    }

    /// Rebuild route patterns for path matching.
    fn build_routes(&mut self) {
        self.route_table = (0..self.routes.len()).collect();

        // Fewer params = more specific = first; stable, so earlier
        // registrations win among equals.
        let routes = &self.routes;
        self.route_table.sort_by_key(|&position| {
            let path = &routes[position].path;
            let param_count = path.matches(':').count();
            let segment_count = path.matches('/').count();
            (param_count, -(segment_count as i32))
        });

        debug!(routes = self.route_table.len(), "built route table");
    }

    /// Match a request path against registered routes.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        self.route_table.iter().find_map(|&position| {
            let route = self.routes.get(position)?;
            match_pattern(&route.path, path).map(|params| RouteMatch {
                route: route.clone(),
                params,
            })
        })
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// All sections in first-seen order, routes unsorted and unfiltered.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.section_map.get(id).and_then(|&p| self.sections.get(p))
    }

    /// Get route count.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Fold a route's section metadata into its section.
///
/// Last write wins: any later route naming the section overwrites `index`
/// and `icon_class` set by earlier ones, whichever module they came from.
fn merge_section_meta(section: &mut Section, nav: &NavMetadata) {
    if let Some(index) = nav.section_index {
        section.index = index;
    }
    if let Some(icon_class) = &nav.section_icon_class {
        section.icon_class = Some(icon_class.clone());
    }
}

/// Match a route pattern against a path, extracting parameters.
///
/// Pattern: "/users/:id/edit"
/// Path: "/users/42/edit"
/// Result: Some({"id": "42"})
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (pat, actual) in pattern_parts.iter().zip(path_parts.iter()) {
        if let Some(param_name) = pat.strip_prefix(':') {
            params.insert(param_name.to_string(), actual.to_string());
        } else if pat != actual {
            return None;
        }
    }

    Some(params)
}
