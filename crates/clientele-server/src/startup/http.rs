//! HTTP server setup module

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, model::common::AppState};

/// Creates and binds the registry HTTP server.
pub fn api_server(
    app_state: Arc<AppState>,
    context_path: String,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(web::scope(&context_path).service(api::route::routes()))
    })
    .bind((address, port))?
    .run())
}
