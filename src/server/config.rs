use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub app_url: String,

    pub discord_bot_token: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Discord IDs promoted to admin when they log into the dashboard.
    pub admin_discord_ids: Vec<u64>,

    pub default_language: String,
    pub translate_api_url: String,
    pub translation_timeout: Duration,
    pub translation_cache_ceiling: usize,
    pub translation_eviction_batch: usize,

    pub reply_session_ttl: Duration,
    pub login_session_ttl: Duration,
    pub session_sweep_interval: Duration,
    pub verification_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR", "0.0.0.0:8080".to_string())?,
            app_url: required("APP_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            admin_discord_ids: parse_id_list(
                "ADMIN_DISCORD_IDS",
                &std::env::var("ADMIN_DISCORD_IDS").unwrap_or_default(),
            )?,
            default_language: optional("DEFAULT_LANGUAGE", "en".to_string())?,
            translate_api_url: optional(
                "TRANSLATE_API_URL",
                DEFAULT_TRANSLATE_API_URL.to_string(),
            )?,
            translation_timeout: Duration::from_secs(optional("TRANSLATION_TIMEOUT_SECS", 5)?),
            translation_cache_ceiling: positive("TRANSLATION_CACHE_CEILING", 10_000)?,
            translation_eviction_batch: positive("TRANSLATION_EVICTION_BATCH", 2_000)?,
            reply_session_ttl: Duration::from_secs(optional("REPLY_SESSION_TTL_SECS", 60)?),
            login_session_ttl: Duration::from_secs(optional(
                "LOGIN_SESSION_TTL_SECS",
                7 * 24 * 60 * 60,
            )?),
            session_sweep_interval: Duration::from_secs(positive(
                "SESSION_SWEEP_INTERVAL_SECS",
                600,
            )?),
            verification_days: optional("VERIFICATION_DAYS", 30)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn optional<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Like `optional`, but zero is rejected.
fn positive<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq + ToString,
{
    let value = optional(name, default)?;
    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}
