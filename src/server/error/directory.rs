use serenity::http::HttpError;
use thiserror::Error;

/// Discord JSON error codes that the bot distinguishes.
mod code {
    pub const UNKNOWN_EMOJI: isize = 10014;
    pub const UNKNOWN_STICKER: isize = 10060;
    pub const MAX_EMOJIS: isize = 30008;
    pub const MAX_ANIMATED_EMOJIS: isize = 30018;
    pub const MAX_STICKERS: isize = 30039;
    pub const REQUEST_TOO_LARGE: isize = 40005;
    pub const MISSING_PERMISSIONS: isize = 50013;
    pub const INVALID_FORM_BODY: isize = 50035;
    pub const FILE_TOO_LARGE: isize = 50045;
    pub const INVALID_FILE: isize = 50046;
    pub const ASSET_RESIZE_FAILED: isize = 50138;
}

/// Classified failure of an emoji or sticker operation against Discord.
///
/// Built from a raw `serenity::Error` so command handlers can report a readable reason
/// instead of the REST payload. None of these are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The bot lacks Manage Expressions in the guild.
    #[error("Bot is missing permissions for this operation")]
    PermissionDenied,

    /// Uploaded image exceeds Discord's size limits.
    #[error("Uploaded asset is too large")]
    PayloadTooLarge,

    /// Discord rejected the name, tags or image format.
    #[error("Discord rejected the request as invalid")]
    InvalidRequest,

    /// Emoji or sticker no longer exists.
    #[error("Emoji or sticker not found")]
    NotFound,

    /// Guild has no free emoji or sticker slots left.
    #[error("Guild emoji or sticker limit reached")]
    LimitReached,

    /// Discord rate limited the request.
    #[error("Rate limited by Discord")]
    RateLimited,

    /// Any other failure, including transport errors.
    #[error("Discord request failed: {0}")]
    Unavailable(String),
}

impl DirectoryError {
    /// Classifies a failed Discord response by HTTP status and JSON error code.
    ///
    /// The JSON code is checked first since Discord reuses 400 for several distinct
    /// failures; the status is the fallback when the code is unknown or absent.
    pub fn from_response(status: u16, code: Option<isize>) -> Self {
        match code {
            Some(code::MISSING_PERMISSIONS) => return Self::PermissionDenied,
            Some(code::FILE_TOO_LARGE | code::ASSET_RESIZE_FAILED | code::REQUEST_TOO_LARGE) => {
                return Self::PayloadTooLarge
            }
            Some(code::UNKNOWN_EMOJI | code::UNKNOWN_STICKER) => return Self::NotFound,
            Some(code::MAX_EMOJIS | code::MAX_ANIMATED_EMOJIS | code::MAX_STICKERS) => {
                return Self::LimitReached
            }
            Some(code::INVALID_FORM_BODY | code::INVALID_FILE) => return Self::InvalidRequest,
            _ => {}
        }

        match status {
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            413 => Self::PayloadTooLarge,
            429 => Self::RateLimited,
            400 => Self::InvalidRequest,
            other => Self::Unavailable(format!("HTTP {}", other)),
        }
    }
}

impl From<serenity::Error> for DirectoryError {
    fn from(err: serenity::Error) -> Self {
        match err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                Self::from_response(response.status_code.as_u16(), Some(response.error.code))
            }
            other => Self::Unavailable(other.to_string()),
        }
    }
}
