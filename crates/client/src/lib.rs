//! # Portal Client
//!
//! HTTP acquisition of the staff-portal JSON resources. Everything here is
//! collaborator plumbing: the resolver core only ever sees the materialized,
//! typed results.

pub mod api;
pub mod http;

pub use api::{DashboardData, PortalApi, PortalClient};
pub use http::{build_client, HttpConfig};
