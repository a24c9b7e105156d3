use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DuplicateEmail,
    InvalidCredentials,
    MissingField(String),
    InvalidImage,
    StorageError(String),
    PasswordHash(String),
    InvalidRequest(String),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateEmail => write!(f, "Email already exists"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::MissingField(name) => write!(f, "{} is required.", name),
            AppError::InvalidImage => write!(f, "Invalid image data."),
            AppError::StorageError(msg) => write!(f, "Database error: {}", msg),
            AppError::PasswordHash(msg) => write!(f, "Password hashing error: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail
            | AppError::MissingField(_)
            | AppError::InvalidImage
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::StorageError(_) | AppError::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StorageError(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::MissingField("discount".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidImage.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::StorageError("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = AppError::MissingField("product_name".to_string());
        assert_eq!(err.to_string(), "product_name is required.");
    }
}
