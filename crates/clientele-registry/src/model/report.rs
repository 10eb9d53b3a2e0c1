//! Report aggregation models

use serde::Serialize;

/// Count and total coverage per policy type
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyTypeBreakdown {
    pub policy_type: String,
    pub count: i64,
    pub total_coverage: f64,
}

/// Client count per status value
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub status: String,
    pub count: i64,
}

/// New-client count for one calendar month (`YYYY-MM`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyNewClients {
    pub month: String,
    pub count: i64,
}

/// The three independent report aggregations
#[derive(Clone, Debug, Serialize)]
pub struct ReportSummary {
    pub policy_breakdown: Vec<PolicyTypeBreakdown>,
    pub status_breakdown: Vec<StatusBreakdown>,
    /// Trailing six months, most recent month first
    pub monthly_new: Vec<MonthlyNewClients>,
}
