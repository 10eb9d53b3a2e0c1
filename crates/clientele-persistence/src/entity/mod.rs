//! Entity definitions for the registry tables

pub mod activity_log;
pub mod client;
pub mod setting;
