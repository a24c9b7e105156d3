pub mod auth;
pub mod health;
pub mod products;
pub mod swagger;

use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::utils::AppError;

/// Mounts every API route under `/api`, as the frontend calls them.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/signup/", web::post().to(auth::signup))
            .route("/login/", web::post().to(auth::login))
            .route("/check-email/", web::get().to(auth::check_email))
            .route("/add-product/", web::post().to(products::add_product))
            .route("/products/", web::get().to(products::list_products)),
    );
}

/// Body limits and `{"detail"}` rejections for the JSON, form and multipart extractors.
pub fn extractor_config(max_payload_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::PayloadConfig::new(max_payload_bytes))
            .app_data(
                web::JsonConfig::default()
                    .limit(max_payload_bytes)
                    .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
            )
            .app_data(
                web::FormConfig::default()
                    .limit(max_payload_bytes)
                    .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
            )
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(max_payload_bytes)
                    .memory_limit(max_payload_bytes)
                    .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
            );
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::{web, App};
    use std::sync::Arc;

    use crate::database::{DocumentStore, InMemoryStore};
    use crate::utils::PasswordHasher;

    pub const TEST_PAYLOAD_LIMIT: usize = 1024 * 1024;

    /// App wired like `main`, over the given store and a minimum-cost hasher.
    pub fn test_app(
        store: InMemoryStore,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let store: Arc<dyn DocumentStore> = Arc::new(store);
        App::new()
            .app_data(web::Data::from(store))
            .app_data(web::Data::new(PasswordHasher::new(4)))
            .configure(super::extractor_config(TEST_PAYLOAD_LIMIT))
            .route("/health", web::get().to(super::health::health_check))
            .configure(super::configure)
    }
}
