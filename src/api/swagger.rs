use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront Admin API",
        version = "1.0.0",
        description = "Signup, login and product catalogue endpoints backing the storefront and its admin page.\n\n**Note:** no endpoint issues or checks tokens; `role` is stored and returned only."
    ),
    paths(
        // Auth
        crate::api::auth::signup,
        crate::api::auth::login,
        crate::api::auth::check_email,

        // Products
        crate::api::products::add_product,
        crate::api::products::list_products,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::SignupRequest,
            crate::models::LoginRequest,
            crate::models::LoginResponse,
            crate::models::CheckEmailResponse,
            crate::models::AddProductRequest,
            crate::utils::ErrorBody,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "User signup, login and email availability."),
        (name = "Products", description = "Product creation and listing. Images travel as base64."),
        (name = "Health", description = "Service and storage health."),
    )
)]
pub struct ApiDoc;
