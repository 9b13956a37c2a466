//! Typed client for the Wargaming public API.
//!
//! [`api::ApiClient`] is the entry point; method blocks such as
//! [`api::blocks::Accounts`] expose the individual endpoints.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;

pub use api::region::{Cluster, Region};
pub use api::{ApiClient, ApiClientBuilder};
pub use error::{Result, WgApiError};
