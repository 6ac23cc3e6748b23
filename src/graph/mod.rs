//! Dependency graph construction and ordering.
//!
//! The core of the service: starting from a root application, recursively
//! discover bound service instances and the applications hidden behind
//! user-provided service URLs, assemble them into a directed graph, reject
//! cycles, and produce a dependency-first ordering.

pub mod builder;
pub mod component;
pub mod cycles;
pub mod discover;
pub mod model;
pub mod order;

pub use builder::{GraphBuilder, MAX_DISCOVERY_DEPTH};
pub use component::{Component, ComponentKind};
pub use discover::{discover, DiscoveryError};
pub use model::DependencyGraph;
