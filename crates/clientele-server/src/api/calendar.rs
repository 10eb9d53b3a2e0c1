//! Calendar feed endpoint
//!
//! Returns a bare JSON array rather than the `ApiResult` envelope so the
//! feed can be consumed directly by calendar widgets.

use actix_web::{HttpResponse, Responder, Scope, get, web};

use clientele_registry::service;

use crate::model::common::AppState;
use crate::model::response::http_error;

#[get("/events")]
pub async fn list_events(state: web::Data<AppState>) -> impl Responder {
    match service::export::calendar_events(&state.database_connection).await {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(err) => http_error(err),
    }
}

pub fn routes() -> Scope {
    web::scope("/calendar").service(list_events)
}
