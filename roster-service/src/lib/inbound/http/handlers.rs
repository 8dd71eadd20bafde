use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::auth::errors::AuthError;
use crate::auth::errors::FieldError;
use crate::domain::user::models::User;
use crate::session::errors::SessionError;
use crate::user::errors::UserError;

pub mod check_auth;
pub mod index;
pub mod list_users;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Validation(Vec<FieldError>),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(errors) => {
                // Field-level detail so the caller can render per-field
                // feedback; all other failures carry one message.
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponseBody::new(
                        StatusCode::BAD_REQUEST,
                        ValidationErrorData { errors },
                    )),
                )
                    .into_response();
            }
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(errors) => ApiError::Validation(errors),
            // One message for unknown username and wrong password alike
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid username or password".to_string())
            }
            AuthError::User(UserError::EmailAlreadyExists(_)) => {
                ApiError::Conflict("A user with this email already exists".to_string())
            }
            AuthError::User(UserError::UsernameAlreadyExists(_)) => {
                ApiError::Conflict("A user with this username already exists".to_string())
            }
            AuthError::User(
                err @ (UserError::InvalidUsername(_) | UserError::InvalidEmail(_)),
            ) => ApiError::BadRequest(err.to_string()),
            // Server-side failures stay opaque; detail goes to the log only
            AuthError::Hashing(detail)
            | AuthError::User(UserError::StoreFailure(detail))
            | AuthError::Session(SessionError::StoreFailure(detail)) => {
                tracing::error!(error = %detail, "Request failed with a server-side error");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorData {
    pub errors: Vec<FieldError>,
}

/// Public user view: the subset of a user record safe to put on the wire.
/// The password digest never leaves the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            is_online: user.is_online,
            created_at: user.created_at,
        }
    }
}
