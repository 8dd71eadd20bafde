use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use credentials::SessionToken;

use crate::domain::auth::models::AuthStatus;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved user into protected handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Authorization gate for protected routes.
///
/// Resolves the bearer token through the session store and either admits
/// the request with the user attached, or rejects it. Fails closed: a
/// missing token, an expired session, and an orphaned session all get the
/// same 401 with no hint of which case applied.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(req.headers()).ok_or_else(unauthorized)?;

    let status = state
        .auth_service
        .check_auth(&token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    match status {
        AuthStatus::Authenticated(user) => {
            req.extensions_mut().insert(AuthenticatedUser { user });
            Ok(next.run(req).await)
        }
        AuthStatus::Anonymous => {
            // Expected outcome for anonymous callers, so not an error log
            tracing::debug!("Rejected unauthenticated request");
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Authentication required".to_string()).into_response()
}

/// Pull the session token out of the Authorization header.
///
/// The token value is opaque here; anything after "Bearer " is handed to
/// the session store as-is, and an unknown value simply fails lookup.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let value = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(SessionToken::from_string(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::AUTHORIZATION;

    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_extracts_bearer_token() {
        let token = extract_bearer_token(&headers_with("Bearer abc-123")).unwrap();
        assert_eq!(token.as_str(), "abc-123");
    }

    #[test]
    fn test_missing_header_is_none() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_wrong_scheme_is_none() {
        assert!(extract_bearer_token(&headers_with("Basic abc-123")).is_none());
    }

    #[test]
    fn test_empty_bearer_value_is_none() {
        assert!(extract_bearer_token(&headers_with("Bearer ")).is_none());
        assert!(extract_bearer_token(&headers_with("Bearer    ")).is_none());
    }
}
