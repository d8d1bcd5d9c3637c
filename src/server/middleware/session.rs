//! Type-safe wrappers around the tower-sessions cookie session.
//!
//! - `AuthSession` - opaque login token issued by `LoginSessionStore`
//! - `CsrfSession` - CSRF token for the OAuth round trip
//!
//! The cookie session never holds the Discord ID itself; the login token has to be
//! resolved through the login store, so revoking a token logs the browser out even
//! while its cookie is still valid.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_LOGIN_TOKEN: &str = "auth:login_token";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the login token issued after a successful OAuth callback.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_login_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_LOGIN_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves the login token, if any.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Browser has logged in at some point
    /// - `Ok(None)` - No login token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_login_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_LOGIN_TOKEN).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the login redirect is issued and consumed by the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// Each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
