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

    /// Discord rejected the authorization code exchange.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchange(String),

    /// No live login token in the session.
    ///
    /// Either the user never logged in, logged out, the token expired, or a newer
    /// login for the same Discord account replaced it.
    #[error("User not found in session")]
    UserNotInSession,

    /// Login token resolved to a Discord ID that has no user record.
    #[error("User {0} not found in database")]
    UserNotInDatabase(u64),

    /// User lacks a required permission.
    ///
    /// # Fields
    /// - Discord ID of the user
    /// - Description of the denied operation, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(u64, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `CsrfValidationFailed` / `TokenExchange` → 400 Bad Request with "There was an issue logging you in"
/// - `UserNotInSession` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
