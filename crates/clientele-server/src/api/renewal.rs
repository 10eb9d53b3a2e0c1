//! Renewal window endpoint

use actix_web::{Responder, Scope, get, web};
use serde::Deserialize;

use clientele_registry::model::RenewalFilter;
use clientele_registry::service;

use crate::model::common::AppState;
use crate::model::response::{ApiResult, http_error};

#[derive(Debug, Deserialize)]
pub struct FilterParam {
    pub filter: Option<String>,
}

#[get("")]
pub async fn list_renewals(
    state: web::Data<AppState>,
    params: web::Query<FilterParam>,
) -> impl Responder {
    // Unknown filter tokens fall back to "all"
    let filter = params
        .filter
        .as_deref()
        .and_then(|v| v.parse::<RenewalFilter>().ok())
        .unwrap_or_default();
    let today = chrono::Local::now().date_naive();

    match service::renewal::find_by_filter(&state.database_connection, filter, today).await {
        Ok(clients) => ApiResult::http_success(clients),
        Err(err) => http_error(err),
    }
}

pub fn routes() -> Scope {
    web::scope("/renewals").service(list_renewals)
}
