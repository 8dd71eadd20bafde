use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Service index: a human-friendly endpoint directory plus the current
/// user count, handy when poking the service with curl.
pub async fn index(State(state): State<AppState>) -> Result<ApiSuccess<IndexResponseData>, ApiError> {
    let users = state
        .auth_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        IndexResponseData {
            message: "Roster authentication API",
            users_count: users.len(),
            endpoints: vec![
                EndpointData {
                    method: "POST",
                    path: "/register",
                    description: "create an account and open a session",
                },
                EndpointData {
                    method: "POST",
                    path: "/login",
                    description: "verify credentials and open a session",
                },
                EndpointData {
                    method: "POST",
                    path: "/logout",
                    description: "close the current session",
                },
                EndpointData {
                    method: "GET",
                    path: "/check-auth",
                    description: "resolve the current session token",
                },
                EndpointData {
                    method: "GET",
                    path: "/table",
                    description: "list all users with presence",
                },
                EndpointData {
                    method: "GET",
                    path: "/profile",
                    description: "own profile (requires a session)",
                },
            ],
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexResponseData {
    pub message: &'static str,
    pub users_count: usize,
    pub endpoints: Vec<EndpointData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointData {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
