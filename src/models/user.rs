use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_ROLE: &str = "user";

/// Signup body. Unknown fields are kept and stored with the user.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// User document as written to the `users` collection.
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,  // bcrypt digest
    pub role: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The subset of a stored user that login needs.
#[derive(Debug, Deserialize)]
pub struct StoredUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CheckEmailResponse {
    pub exists: bool,
}
