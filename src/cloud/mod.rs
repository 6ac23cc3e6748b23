//! Platform API access: client contract, wire types, REST implementation,
//! and the standalone deletion utilities.

pub mod cleanup;
pub mod client;
pub mod http;
pub mod types;

pub use client::{CloudClient, CloudError};
pub use http::CfRestClient;
pub use types::{AppRef, AppSummary, Credentials, RouteRef, SummaryRoute, SummaryService};
