use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::register::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::auth::errors::FieldError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .auth_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| ApiSuccess::new(StatusCode::OK, authenticated.into()))
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

impl LoginRequestBody {
    /// Login validates presence only; everything beyond non-emptiness is
    /// answered by the credential check itself.
    fn try_into_command(self) -> Result<LoginCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let username = self.username.trim().to_string();
        if username.is_empty() {
            errors.push(FieldError::new("username", "Username is required"));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        if errors.is_empty() {
            Ok(LoginCommand {
                username,
                password: self.password,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_required() {
        let errors = LoginRequestBody {
            username: "   ".to_string(),
            password: "".to_string(),
        }
        .try_into_command()
        .unwrap_err();

        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_short_username_is_not_a_validation_error() {
        // "ab" would fail registration, but login lets it through to the
        // credential check so probing yields invalid-credentials, not a
        // different error shape
        let command = LoginRequestBody {
            username: "ab".to_string(),
            password: "whatever".to_string(),
        }
        .try_into_command()
        .unwrap();

        assert_eq!(command.username, "ab");
    }
}
