//! Networking modules for the external REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP endpoints, `error` defines the failure taxonomy, and
//! `types` defines the shared JSON schema.

pub mod api;
pub mod error;
pub mod types;
