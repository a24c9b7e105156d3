mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::{Config, StorageBackend};
use database::{DocumentStore, InMemoryStore, MongoDB};
use utils::PasswordHasher;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    log::info!("🚀 Starting Storefront Admin API...");

    let store: Arc<dyn DocumentStore> = match config.storage_backend {
        StorageBackend::MongoDB => {
            log::info!("📊 Database: {}", config.mongodb_database);
            let db = MongoDB::new(&config.mongodb_uri, &config.mongodb_database)
                .await
                .map_err(io::Error::other)?;
            Arc::new(db)
        }
        StorageBackend::Memory => {
            log::warn!("⚠️  In-memory storage selected, data is lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    store.ping().await.map_err(io::Error::other)?;
    log::info!("✅ Storage connected successfully");

    let store_data: web::Data<dyn DocumentStore> = web::Data::from(store.clone());
    let hasher = web::Data::new(PasswordHasher::new(config.bcrypt_cost));
    let max_payload_bytes = config.max_payload_bytes;
    let cors_origins = config.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    let server = HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .app_data(store_data.clone())
            .app_data(hasher.clone())
            .configure(api::extractor_config(max_payload_bytes))
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::swagger::ApiDoc::openapi()),
            )
            .route("/health", web::get().to(api::health::health_check))
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    store.shutdown().await;
    log::info!("👋 Server stopped");

    server
}
