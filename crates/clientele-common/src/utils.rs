//! Utility functions for Clientele
//!
//! Date and timestamp helpers shared by the service layer and seed data.

use chrono::{NaiveDate, Utc};

use crate::{DATE_FORMAT, TIMESTAMP_FORMAT};

/// Format a calendar date in the storage format (`YYYY-MM-DD`)
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use clientele_common::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
/// assert_eq!(format_date(date), "2024-12-20");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Current UTC time in the storage format (`YYYY-MM-DD HH:MM:SS`)
///
/// Matches the representation SQLite produces for CURRENT_TIMESTAMP so
/// explicitly written rows sort together with defaulted ones.
pub fn timestamp_now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
