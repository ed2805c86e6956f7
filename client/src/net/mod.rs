//! Networking modules for the resume backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `types` defines the wire schema and `error`
//! the failure taxonomy every call shares.

pub mod api;
pub mod error;
pub mod types;
