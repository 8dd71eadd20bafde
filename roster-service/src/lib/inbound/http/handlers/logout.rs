use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::middleware::extract_bearer_token;
use crate::inbound::http::router::AppState;

/// Logout never fails from the caller's point of view: no token, an
/// unknown token, and an expired token all produce 200.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<LogoutResponseData>, ApiError> {
    let Some(token) = extract_bearer_token(&headers) else {
        return Ok(ApiSuccess::new(
            StatusCode::OK,
            LogoutResponseData {
                message: "No active session".to_string(),
            },
        ));
    };

    state
        .auth_service
        .logout(&token)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LogoutResponseData {
            message: "Logged out".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
