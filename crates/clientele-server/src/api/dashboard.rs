//! Dashboard summary endpoint

use actix_web::{Responder, Scope, get, web};

use clientele_registry::model::DashboardSummary;
use clientele_registry::service;

use crate::model::common::AppState;
use crate::model::response::{ApiResult, http_error};

#[get("")]
pub async fn get_dashboard(state: web::Data<AppState>) -> impl Responder {
    let today = chrono::Local::now().date_naive();
    match service::dashboard::summary(&state.database_connection, today).await {
        Ok(summary) => ApiResult::<DashboardSummary>::http_success(summary),
        Err(err) => http_error(err),
    }
}

pub fn routes() -> Scope {
    web::scope("/dashboard").service(get_dashboard)
}
