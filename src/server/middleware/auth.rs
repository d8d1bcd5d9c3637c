use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    session::LoginSessionStore,
};

pub enum Permission {
    Admin,
}

/// Resolves the request's login token to a user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    login_sessions: &'a LoginSessionStore,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        login_sessions: &'a LoginSessionStore,
        session: &'a Session,
    ) -> Self {
        Self {
            db,
            login_sessions,
            session,
        }
    }

    /// Returns the logged-in user if every permission is satisfied.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must hold; empty for any logged-in user
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated and authorized user
    /// - `Err(AuthError::UserNotInSession)` - No token, or the token expired or was revoked
    /// - `Err(AuthError::UserNotInDatabase)` - Token resolved to an unknown user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = AuthSession::new(self.session).get_login_token().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(discord_id) = self.login_sessions.resolve(&token).await else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(discord_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            discord_id,
                            "User attempted an admin operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
