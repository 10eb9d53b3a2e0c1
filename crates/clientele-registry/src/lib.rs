//! Clientele Registry - Client registry service layer
//!
//! Implements every data operation of the registry: client CRUD, activity
//! notes, free-text search, renewal windows, the dashboard summary, the
//! three report aggregations, the calendar feed, and the CSV export.
//!
//! All functions take the database connection explicitly, and every
//! date-relative computation takes `today` as an injected parameter so
//! the logic stays deterministic under test.

pub mod model;
pub mod service;

pub use model::{
    ActivityView, CalendarEvent, ClientDetail, ClientForm, DashboardSummary, NoteForm,
    RenewalFilter, ReportSummary,
};
