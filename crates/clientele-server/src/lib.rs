//! HTTP server crate for the client registry
//!
//! Hosts the actix-web API over the registry service layer: routing,
//! request/response envelopes, configuration, and startup plumbing.

pub mod api;
pub mod model;
pub mod startup;
