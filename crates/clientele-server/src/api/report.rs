//! Report endpoint

use actix_web::{Responder, Scope, get, web};

use clientele_registry::model::ReportSummary;
use clientele_registry::service;

use crate::model::common::AppState;
use crate::model::response::{ApiResult, http_error};

#[get("")]
pub async fn get_reports(state: web::Data<AppState>) -> impl Responder {
    let today = chrono::Local::now().date_naive();
    match service::report::summarize(&state.database_connection, today).await {
        Ok(summary) => ApiResult::<ReportSummary>::http_success(summary),
        Err(err) => http_error(err),
    }
}

pub fn routes() -> Scope {
    web::scope("/reports").service(get_reports)
}
