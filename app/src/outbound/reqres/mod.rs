//! People service outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `DirectoryClient`
//! and `LoginGateway` ports.

mod dto;
mod http_client;

pub use http_client::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ReqresClientError, ReqresHttpClient, ReqresHttpIdentity,
};
