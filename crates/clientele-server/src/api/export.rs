//! CSV export endpoint

use actix_web::{
    HttpResponse, Responder, Scope, get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web,
};

use clientele_registry::service;

use crate::model::common::AppState;
use crate::model::response::http_error;

const EXPORT_FILE_NAME: &str = "clients_export.csv";

#[get("")]
pub async fn export_clients(state: web::Data<AppState>) -> impl Responder {
    match service::export::export_csv(&state.database_connection).await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
            })
            .body(csv),
        Err(err) => http_error(err),
    }
}

pub fn routes() -> Scope {
    web::scope("/export").service(export_clients)
}
