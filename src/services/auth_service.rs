use mongodb::bson::{doc, from_document, to_document};
use serde_json::Value;

use super::document_to_json;
use crate::{
    database::{Collection, DocumentStore},
    models::{LoginRequest, LoginResponse, NewUser, SignupRequest, StoredUser, DEFAULT_ROLE},
    utils::{AppError, AppResult, PasswordHasher},
};

/// Present and not blank.
fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::MissingField(field.to_string()))
}

async fn email_exists(store: &dyn DocumentStore, email: &str) -> AppResult<bool> {
    let found = store
        .find_one(Collection::Users, doc! { "email": email })
        .await?;
    Ok(found.is_some())
}

/// Creates a user and returns the stored document.
///
/// The duplicate check and the insert are two separate round trips, so two
/// concurrent signups with one email can both succeed. The response carries
/// the bcrypt digest under `password`.
pub async fn signup(
    store: &dyn DocumentStore,
    hasher: &PasswordHasher,
    request: SignupRequest,
) -> AppResult<Value> {
    let email = required(request.email, "email")?;
    let password = required(request.password, "password")?;

    if email_exists(store, &email).await? {
        return Err(AppError::DuplicateEmail);
    }

    let mut extra = request.extra;
    extra.remove("_id");

    let new_user = NewUser {
        email,
        password: hasher.hash(&password)?,
        role: request.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        extra,
    };

    let mut document =
        to_document(&new_user).map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let id = store.insert(Collection::Users, document.clone()).await?;
    document.insert("_id", id);

    log::info!("✅ User registered: {} (role: {})", new_user.email, new_user.role);

    Ok(document_to_json(document))
}

pub async fn login(
    store: &dyn DocumentStore,
    hasher: &PasswordHasher,
    request: LoginRequest,
) -> AppResult<LoginResponse> {
    let email = required(request.email, "email")?;
    let password = required(request.password, "password")?;

    let document = store
        .find_one(Collection::Users, doc! { "email": &email })
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let user: StoredUser =
        from_document(document).map_err(|e| AppError::StorageError(e.to_string()))?;

    let verified = user
        .password
        .as_deref()
        .is_some_and(|digest| hasher.verify(&password, digest));

    if !verified {
        return Err(AppError::InvalidCredentials);
    }

    Ok(LoginResponse {
        id: user.id,
        email: user.email,
        role: user.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
    })
}

/// A missing email never matches; the store is not queried.
pub async fn check_email(store: &dyn DocumentStore, email: Option<&str>) -> AppResult<bool> {
    match email {
        Some(email) => email_exists(store, email).await,
        None => Ok(false),
    }
}
