use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// The authenticated caller's own public view.
///
/// Sits behind the authorization gate; by the time this runs the gate has
/// already resolved the token and stashed the user in request extensions.
pub async fn profile(
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        UserData::from(&authenticated.user),
    ))
}
