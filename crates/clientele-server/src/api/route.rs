//! API routing configuration

use actix_web::{Scope, web};

use super::{calendar, client, dashboard, export, renewal, report};

/// Create the API routes
pub fn routes() -> Scope {
    web::scope("")
        .service(dashboard::routes())
        .service(client::routes())
        .service(renewal::routes())
        .service(calendar::routes())
        .service(export::routes())
        .service(report::routes())
}
