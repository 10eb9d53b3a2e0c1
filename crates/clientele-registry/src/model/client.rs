//! Client form and detail models

use serde::{Deserialize, Serialize};

use clientele_persistence::entity::{activity_log, client};

/// Full replacement attribute set accepted by create and update.
///
/// Only `name` is validated; everything else is stored as supplied.
/// Dates are expected as ISO `YYYY-MM-DD` text but not format-checked.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub wechat: Option<String>,
    pub policy_type: Option<String>,
    pub coverage_amount: Option<f64>,
    pub policy_start_date: Option<String>,
    pub policy_end_date: Option<String>,
    pub status: Option<String>,
}

/// User-submitted activity note
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteForm {
    pub activity_type: String,
    pub description: String,
}

/// A client together with its activity history, newest first
#[derive(Clone, Debug, Serialize)]
pub struct ClientDetail {
    pub client: client::Model,
    pub activities: Vec<activity_log::Model>,
}
