use actix_multipart::form::MultipartForm;
use actix_web::{web, Either, HttpResponse, ResponseError};

use crate::{
    database::DocumentStore,
    models::{AddProductForm, AddProductRequest},
    services::product_service,
    utils::ErrorBody,
};

/// Accepts the product as JSON, a URL-encoded form or `multipart/form-data`.
#[utoipa::path(
    post,
    path = "/api/add-product/",
    tag = "Products",
    request_body = AddProductRequest,
    responses(
        (status = 201, description = "Product created; image returned as base64"),
        (status = 400, description = "Missing field or invalid image", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
pub async fn add_product(
    store: web::Data<dyn DocumentStore>,
    payload: Either<
        web::Json<AddProductRequest>,
        Either<web::Form<AddProductRequest>, MultipartForm<AddProductForm>>,
    >,
) -> HttpResponse {
    let request = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(Either::Left(form)) => form.into_inner(),
        Either::Right(Either::Right(multipart)) => multipart.into_inner().into(),
    };
    log::info!("📦 POST /add-product");

    match product_service::add_product(store.get_ref(), request).await {
        Ok(product) => HttpResponse::Created().json(product),
        Err(e) => {
            log::warn!("❌ Add product failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/products/",
    tag = "Products",
    responses(
        (status = 200, description = "Every product, images as base64 strings")
    )
)]
pub async fn list_products(store: web::Data<dyn DocumentStore>) -> HttpResponse {
    match product_service::list_products(store.get_ref()).await {
        Ok(products) => {
            log::info!("✅ Listed {} products", products.len());
            HttpResponse::Ok().json(products)
        }
        Err(e) => {
            log::error!("❌ Error listing products: {}", e);
            e.error_response()
        }
    }
}
