use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// The roster table: every registered user with their presence flag.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    let users = state
        .auth_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponseData {
            count: users.len(),
            users: users.iter().map(RosterEntryData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub count: usize,
    pub users: Vec<RosterEntryData>,
}

/// Roster rows omit the email: the table is shown to anyone, while the
/// email belongs to the account owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntryData {
    pub id: String,
    pub username: String,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RosterEntryData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            is_online: user.is_online,
            created_at: user.created_at,
        }
    }
}
