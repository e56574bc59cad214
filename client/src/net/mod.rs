//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema and `error`
//! maps failures onto the messages pages show.

pub mod api;
pub mod error;
pub mod types;
