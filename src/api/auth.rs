use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::{
    database::DocumentStore,
    models::{CheckEmailResponse, EmailQuery, LoginRequest, LoginResponse, SignupRequest},
    services::auth_service,
    utils::{ErrorBody, PasswordHasher},
};

#[utoipa::path(
    post,
    path = "/api/signup/",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created; the stored document, including the password digest"),
        (status = 400, description = "Email already exists or a required field is missing", body = ErrorBody)
    )
)]
pub async fn signup(
    store: web::Data<dyn DocumentStore>,
    hasher: web::Data<PasswordHasher>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let email = request.email.clone().unwrap_or_default();
    log::info!("📝 POST /signup - email: {}", email);

    match auth_service::signup(store.get_ref(), &hasher, request).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => {
            log::warn!("❌ Signup failed: {} - {}", email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/login/",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn login(
    store: web::Data<dyn DocumentStore>,
    hasher: web::Data<PasswordHasher>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let email = request.email.clone().unwrap_or_default();
    log::info!("🔐 POST /login - email: {}", email);

    match auth_service::login(store.get_ref(), &hasher, request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/check-email/",
    tag = "Auth",
    params(EmailQuery),
    responses(
        (status = 200, description = "Whether a user with this email exists", body = CheckEmailResponse)
    )
)]
pub async fn check_email(store: web::Data<dyn DocumentStore>, req: HttpRequest) -> HttpResponse {
    let query = EmailQuery {
        email: first_email(req.query_string()),
    };

    match auth_service::check_email(store.get_ref(), query.email.as_deref()).await {
        Ok(exists) => HttpResponse::Ok().json(CheckEmailResponse { exists }),
        Err(e) => {
            log::error!("❌ Email lookup failed: {}", e);
            e.error_response()
        }
    }
}

/// First `email` parameter; repeats and undecodable pairs never fail the lookup.
fn first_email(query_string: &str) -> Option<String> {
    web::Query::<Vec<(String, String)>>::from_query(query_string)
        .ok()?
        .into_inner()
        .into_iter()
        .find_map(|(key, value)| (key == "email").then_some(value))
}
