use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    session::LoginSessionStore,
    state::OAuth2Client,
};

const DISCORD_CURRENT_USER_URL: &str = "https://discord.com/api/users/@me";

/// Service for Discord OAuth2 login and dashboard login sessions.
///
/// Orchestrates the OAuth2 client, Discord's user endpoint, the user repository and the
/// login session store.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    login_sessions: &'a LoginSessionStore,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    /// - `login_sessions` - Store issuing dashboard login tokens
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        login_sessions: &'a LoginSessionStore,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            login_sessions,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Only the `identify` scope is requested; the dashboard needs nothing beyond the
    /// user's ID and name.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Completes the OAuth2 flow and opens a login session.
    ///
    /// Exchanges the authorization code, fetches the Discord user, upserts the user record
    /// and issues a login token. Listed admin IDs are promoted to admin; for everyone
    /// else the stored admin flag is left untouched. Issuing the token revokes any token
    /// the same account held before.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from Discord callback
    /// - `admin_discord_ids` - Discord IDs promoted to admin on login
    ///
    /// # Returns
    /// - `Ok((User, String))` - Logged-in user and the new login token
    /// - `Err(AuthError::TokenExchange)` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch user data from Discord API
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(
        &self,
        authorization_code: String,
        admin_discord_ids: &[u64],
    ) -> Result<(User, String), AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;
        let discord_id = discord_user.id.get();
        let is_admin = admin_grant(discord_id, admin_discord_ids);

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id,
                name: discord_user.name,
                is_admin,
            })
            .await?;

        if is_admin.is_some() {
            tracing::info!("User {} has been set as admin", user.name);
        }

        let login_token = self.login_sessions.create(discord_id).await;

        Ok((user, login_token))
    }

    /// Revokes a login token. Unknown tokens are ignored.
    pub async fn logout(&self, login_token: &str) {
        self.login_sessions.revoke(login_token).await;
    }

    /// Retrieves the Discord user the access token belongs to.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(DISCORD_CURRENT_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}

/// Admin update applied on login: promote listed IDs, otherwise keep the stored flag.
fn admin_grant(discord_id: u64, admin_discord_ids: &[u64]) -> Option<bool> {
    admin_discord_ids.contains(&discord_id).then_some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_id_is_promoted() {
        assert_eq!(admin_grant(42, &[1, 42]), Some(true));
    }

    /// Unlisted users keep whatever admin flag they already have.
    #[test]
    fn unlisted_id_keeps_stored_flag() {
        assert_eq!(admin_grant(42, &[1, 2]), None);
        assert_eq!(admin_grant(42, &[]), None);
    }
}
