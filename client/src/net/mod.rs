//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns transport and the auth interceptors, `api` names the
//! endpoints, and `types` defines the JSON schema.

pub mod api;
pub mod client;
pub mod types;
