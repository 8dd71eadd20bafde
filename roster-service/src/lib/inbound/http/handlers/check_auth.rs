use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::auth::models::AuthStatus;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::middleware::extract_bearer_token;
use crate::inbound::http::router::AppState;

/// Report whether the presented token authenticates anyone.
///
/// Always 200: an anonymous caller is a normal outcome here, and the
/// response never says why a token did not resolve.
pub async fn check_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<CheckAuthResponseData>, ApiError> {
    let Some(token) = extract_bearer_token(&headers) else {
        return Ok(ApiSuccess::new(
            StatusCode::OK,
            CheckAuthResponseData::anonymous(),
        ));
    };

    let status = state
        .auth_service
        .check_auth(&token)
        .await
        .map_err(ApiError::from)?;

    let data = match status {
        AuthStatus::Authenticated(user) => CheckAuthResponseData {
            authenticated: true,
            user: Some(UserData::from(&user)),
        },
        AuthStatus::Anonymous => CheckAuthResponseData::anonymous(),
    };

    Ok(ApiSuccess::new(StatusCode::OK, data))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckAuthResponseData {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserData>,
}

impl CheckAuthResponseData {
    fn anonymous() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}
