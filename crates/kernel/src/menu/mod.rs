//! Navigation system for route aggregation and menu visibility.
//!
//! Route descriptors are collected from modules and provide:
//! - The flat route list for the URL router
//! - Sections of navigation routes, ordered by index
//! - Permission requirements per navigation route

mod access;
mod registry;

pub use access::is_authorized;
pub use registry::{NavItem, NavRegistry, RouteMatch, Section};
