//! stackgraph - dependency discovery for application stacks
//!
//! This library discovers the transitive set of deployable components
//! (applications, managed service instances, user-provided service
//! instances) a root application depends on in a multi-tenant platform, and
//! orders them so dependencies can be recreated before the components that
//! consume them.
//!
//! # Core Concepts
//!
//! - **Component**: one node of the dependency graph - an application, a
//!   managed service instance, or a user-provided service instance
//! - **Reverse resolution**: a user-provided service carrying a `url`
//!   credential may hide an application-to-application dependency; the
//!   builder resolves the URL back to an application through route lookups
//!   and confirms the match against the candidate's own routes
//! - **Dependency-first order**: every component precedes everything that
//!   (transitively) depends on it
//!
//! # Example Usage
//!
//! ```ignore
//! use stackgraph::cloud::CfRestClient;
//! use stackgraph::graph;
//!
//! async fn print_stack(client: &CfRestClient, root_id: &str) -> anyhow::Result<()> {
//!     let components = graph::discover(client, root_id).await?;
//!     for component in components {
//!         println!("{} ({:?})", component.name, component.kind);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`graph`]: graph construction, cycle detection and ordering (the core)
//! - [`cloud`]: platform API contract, REST client, deletion utilities
//! - [`server`]: HTTP surface exposing discovery behind basic auth
//! - [`config`]: environment-driven configuration

// Public modules
pub mod cli;
pub mod cloud;
pub mod config;
pub mod graph;
pub mod server;

// Re-export key types for convenient access
pub use cloud::{CfRestClient, CloudClient, CloudError};
pub use config::{AppConfig, CloudConfig, ConfigError, HttpConfig};
pub use graph::{discover, Component, ComponentKind, DiscoveryError};
pub use server::{build_router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
