use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ApiResponse;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is present in the session.
    #[error("Request made without an authenticated session")]
    UserNotInSession,

    /// The session references a user id that no longer exists, e.g. the
    /// account was deleted while the session was still live.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks a required role for the route.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Context describing the denied action, logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Sign-in failed: unknown email or wrong password. Collapsed into one
    /// variant so responses do not reveal which accounts exist.
    #[error("Email or password is incorrect")]
    InvalidCredentials,

    /// Password hashing or hash parsing failed.
    #[error("credential hashing failure: {0}")]
    Crypto(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Session and credential failures return 401 with a generic message; role
/// denials return 403. Crypto failures are server faults and return 500.
/// Details are logged at debug level while client-facing messages stay
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing/stale session, bad credentials
/// - 403 Forbidden - Role requirement not met
/// - 500 Internal Server Error - Hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ApiResponse::failure("Unauthorized Access".to_string())),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::failure(self.to_string())),
            )
                .into_response(),
            Self::AccessDenied(user_id, context) => {
                tracing::debug!("User {} denied access: {}", user_id, context);
                (
                    StatusCode::FORBIDDEN,
                    Json(ApiResponse::failure(
                        "You have no access to this route".to_string(),
                    )),
                )
                    .into_response()
            }
            Self::Crypto(detail) => {
                tracing::error!("credential hashing failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::failure("Internal server error".to_string())),
                )
                    .into_response()
            }
        }
    }
}
