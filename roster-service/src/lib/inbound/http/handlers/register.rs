use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::auth::errors::FieldError;
use crate::domain::auth::models::AuthenticatedSession;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| ApiSuccess::new(StatusCode::CREATED, authenticated.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    email: String,
    password: String,
}

impl RegisterRequestBody {
    /// Validate all three fields and report every failure at once, one
    /// entry per field, rather than stopping at the first.
    fn try_into_command(self) -> Result<RegisterCommand, Vec<FieldError>> {
        let mut errors = Vec::new();

        let username = Username::new(self.username)
            .map_err(|e| errors.push(FieldError::new("username", e.to_string())));
        let email = EmailAddress::new(self.email)
            .map_err(|e| errors.push(FieldError::new("email", e.to_string())));
        let password = Password::new(self.password)
            .map_err(|e| errors.push(FieldError::new("password", e.to_string())));

        match (username, email, password) {
            (Ok(username), Ok(email), Ok(password)) => {
                Ok(RegisterCommand::new(username, email, password))
            }
            _ => Err(errors),
        }
    }
}

/// Response for any operation that opens a session: the public user view
/// plus the token the transport layer will carry from here on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub user: UserData,
    pub token: String,
}

impl From<&AuthenticatedSession> for SessionResponseData {
    fn from(authenticated: &AuthenticatedSession) -> Self {
        Self {
            user: UserData::from(&authenticated.user),
            token: authenticated.token.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(username: &str, email: &str, password: &str) -> RegisterRequestBody {
        RegisterRequestBody {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_body_converts() {
        let command = body("Алексей", "alexey@example.com", "password123")
            .try_into_command()
            .unwrap();
        assert_eq!(command.username.as_str(), "Алексей");
        assert_eq!(command.email.as_str(), "alexey@example.com");
    }

    #[test]
    fn test_all_field_failures_reported_together() {
        let errors = body("ab", "not-an-email", "12345")
            .try_into_command()
            .unwrap_err();

        assert_eq!(errors.len(), 3);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["username", "email", "password"]);
    }

    #[test]
    fn test_single_failure_reports_one_field() {
        let errors = body("Алексей", "alexey@example.com", "12345")
            .try_into_command()
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }
}
