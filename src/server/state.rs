//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each request handler
//! through Axum's state extraction. The session stores and the translation cache are the
//! same handles the Discord bot holds, so the admin panel sees live numbers.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    bot::correlator::ReplySessions,
    session::LoginSessionStore,
    translation::{HttpTranslator, TranslationCache},
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database pool, reqwest client, session stores and
/// translation cache share their internals through `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests during login.
    ///
    /// Configured without redirects so OAuth token exchange cannot be bounced elsewhere.
    pub http_client: reqwest::Client,

    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Dashboard login tokens.
    pub login_sessions: LoginSessionStore,

    /// Bot commands waiting for a sticker reply. Read here only for statistics.
    pub reply_sessions: ReplySessions,

    /// Translation cache shared with the bot. Read here only for statistics.
    pub translation: TranslationCache<HttpTranslator>,

    /// Dashboard URL users are redirected to after login and logout.
    pub app_url: String,

    /// Discord IDs promoted to admin when they log in.
    pub admin_discord_ids: Arc<[u64]>,

    /// Lifetime of a verification in days.
    pub verification_days: i64,
}
