//! Waymark Module SDK
//!
//! Types that application modules use to contribute routes to the
//! navigation registry. Modules build [`types::RouteDescriptor`] values
//! (directly, through the builder API, or from JSON/TOML) and hand them to
//! the kernel, which aggregates them into the navigation tree.

pub mod types;
