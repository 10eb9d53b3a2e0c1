//! Typed request and response models for the registry service

mod calendar;
mod client;
mod dashboard;
mod renewal;
mod report;

pub use calendar::CalendarEvent;
pub use client::{ClientDetail, ClientForm, NoteForm};
pub use dashboard::{ActivityView, DashboardSummary};
pub use renewal::RenewalFilter;
pub use report::{MonthlyNewClients, PolicyTypeBreakdown, ReportSummary, StatusBreakdown};
