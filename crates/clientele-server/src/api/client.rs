//! Client management endpoints

use actix_web::{Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use clientele_registry::model::{ClientDetail, ClientForm, NoteForm};
use clientele_registry::service;

use crate::model::common::AppState;
use crate::model::response::{ApiResult, http_error};

#[derive(Debug, Deserialize)]
pub struct ListParam {
    pub q: Option<String>,
}

#[get("")]
pub async fn list_clients(
    state: web::Data<AppState>,
    params: web::Query<ListParam>,
) -> impl Responder {
    let db = &state.database_connection;
    let result = match params.q.as_deref() {
        Some(q) => service::client::search(db, q).await,
        None => service::client::find_all(db).await,
    };

    match result {
        Ok(clients) => ApiResult::http_success(clients),
        Err(err) => http_error(err),
    }
}

#[post("")]
pub async fn create_client(
    state: web::Data<AppState>,
    form: web::Json<ClientForm>,
) -> impl Responder {
    match service::client::create(&state.database_connection, &form).await {
        Ok(id) => ApiResult::http_success(id),
        Err(err) => http_error(err),
    }
}

#[get("/{id}")]
pub async fn get_client(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match service::client::detail(&state.database_connection, id).await {
        Ok(detail) => ApiResult::<ClientDetail>::http_success(detail),
        Err(err) => http_error(err),
    }
}

#[put("/{id}")]
pub async fn update_client(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Json<ClientForm>,
) -> impl Responder {
    let id = path.into_inner();
    match service::client::update(&state.database_connection, id, &form).await {
        Ok(()) => ApiResult::http_success(id),
        Err(err) => http_error(err),
    }
}

#[delete("/{id}")]
pub async fn delete_client(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match service::client::delete(&state.database_connection, id).await {
        Ok(deleted) => ApiResult::http_success(deleted),
        Err(err) => http_error(err),
    }
}

#[post("/{id}/notes")]
pub async fn add_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Json<NoteForm>,
) -> impl Responder {
    let id = path.into_inner();
    match service::activity::add_note(
        &state.database_connection,
        id,
        &form.activity_type,
        &form.description,
    )
    .await
    {
        Ok(note_id) => ApiResult::http_success(note_id),
        Err(err) => http_error(err),
    }
}

pub fn routes() -> Scope {
    web::scope("/clients")
        .service(list_clients)
        .service(create_client)
        .service(get_client)
        .service(update_client)
        .service(delete_client)
        .service(add_note)
}
