//! Clientele Persistence - Database entities and schema bootstrap
//!
//! This crate maps the three registry tables (`clients`, `activity_log`,
//! `settings`) to sea-orm entities and provides the idempotent schema
//! initializer run at server startup.

pub mod entity;
pub mod schema;

pub use schema::init_schema;
