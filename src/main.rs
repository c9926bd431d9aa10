use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::from_fn, web};
use dotenvy::dotenv;
use tracing::info;

mod audit;
mod config;
mod errors;
mod services;
mod storages;
mod system;
mod utils;

use crate::audit::{ArchiveSinkFactory, AuditLogBuffer, AuditMiddleware};
use crate::config::Config;
use crate::services::{FrontendService, ListingService, RedirectService, ShortenService};
use crate::storages::StorageFactory;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let _log_guard = system::init_logging();

    let config = Config::from_env();

    let storage = StorageFactory::create()
        .map_err(|e| std::io::Error::other(e.format_simple()))?;
    info!("Using storage backend: {}", storage.backend_name().await);

    let sink = ArchiveSinkFactory::create()
        .map_err(|e| std::io::Error::other(e.format_simple()))?;
    let audit_buffer = Arc::new(AuditLogBuffer::with_timeout(
        sink,
        config.buffer_capacity,
        config.flush_threshold,
        config.archive_timeout,
    ));

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(audit_buffer.clone()))
            .wrap(from_fn(AuditMiddleware::observe))
            .route("/", web::get().to(FrontendService::handle_index))
            .route("/api/criar", web::post().to(ShortenService::handle_create))
            .route("/api/ultimos", web::get().to(ListingService::handle_recent))
            .route("/api/aleatorio", web::get().to(ListingService::handle_random))
            .route("/{code}", web::get().to(RedirectService::handle_redirect))
    })
    .bind(bind_address)?
    .run()
    .await
}
