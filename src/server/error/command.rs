use thiserror::Error;

use crate::server::{bot::messages, error::directory::DirectoryError};

/// Failure of a slash command or a correlated reply action.
///
/// Every variant is reported back to the invoking user through `user_message`; none
/// of them stop the event loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Member lacks the guild permission the command requires.
    #[error("Member is missing the required permission")]
    PermissionDenied,

    /// Member lacks Manage Server, required to change the bot language.
    #[error("Member is missing the Manage Server permission")]
    ManageGuildRequired,

    /// Command requires a verified dashboard account.
    #[error("User is not verified")]
    NotVerified,

    /// Command is only usable inside a guild.
    #[error("Command used outside of a guild")]
    GuildOnly,

    /// Malformed input. Holds the user-facing message.
    #[error("Invalid input: {0}")]
    Validation(&'static str),

    /// Discord rejected the emoji or sticker operation.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Settings or verification lookup failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl CommandError {
    /// Returns the English message shown to the user for this error.
    ///
    /// The caller translates it into the guild's language.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => messages::MISSING_PERMISSION,
            Self::ManageGuildRequired => messages::MISSING_MANAGE_GUILD,
            Self::NotVerified => messages::NOT_VERIFIED,
            Self::GuildOnly => messages::GUILD_ONLY,
            Self::Validation(message) => message,
            Self::Directory(err) => match err {
                DirectoryError::PermissionDenied => messages::BOT_MISSING_PERMISSION,
                DirectoryError::PayloadTooLarge => messages::FILE_TOO_LARGE,
                DirectoryError::InvalidRequest => messages::INVALID_REQUEST,
                DirectoryError::NotFound => messages::NOT_FOUND,
                DirectoryError::LimitReached => messages::LIMIT_REACHED,
                DirectoryError::RateLimited => messages::RATE_LIMITED,
                DirectoryError::Unavailable(_) => messages::DISCORD_UNAVAILABLE,
            },
            Self::Database(_) => messages::INTERNAL_ERROR,
        }
    }
}
