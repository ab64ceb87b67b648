use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord rejected the OAuth2 authorization code exchange.
    ///
    /// Usually a stale or already used code. Results in a 400 Bad Request
    /// response asking the user to retry the login.
    ///
    /// # Fields
    /// - Description of the exchange failure
    #[error("OAuth2 code exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// No authenticated user in the session.
    ///
    /// The request requires a logged-in user but the session carries none.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response so the client re-authenticates.
    ///
    /// # Fields
    /// - The stale user ID from the session
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the required role for this operation.
    ///
    /// Results in a 403 Forbidden response with a generic message; the detailed
    /// reason is logged server-side.
    ///
    /// # Fields
    /// - The denied user's ID
    /// - Internal description of what was attempted
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly
/// error messages:
/// - `CsrfValidationFailed` / `TokenExchangeFailed` → 400 Bad Request with
///   "There was an issue logging you in"
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with a generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures
/// - 401 Unauthorized - For missing or stale session users
/// - 403 Forbidden - For insufficient permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to do that.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
