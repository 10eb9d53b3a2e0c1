//! HTTP API endpoints

pub mod calendar;
pub mod client;
pub mod dashboard;
pub mod export;
pub mod renewal;
pub mod report;
pub mod route;
