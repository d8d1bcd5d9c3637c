//! Resolution of "reply to this message with a sticker" follow-ups.
//!
//! Commands that need a sticker (Discord offers no sticker option for slash commands)
//! answer with a prompt and open a `ReplySession` keyed by the prompt's message id. A
//! later guild message replying to that prompt resolves the session, provided it comes
//! from the same member in the same guild and carries a sticker.

use chrono::{DateTime, Utc};
use serenity::all::{GuildId, Message, MessageId, StickerId, UserId};

use crate::server::{
    bot::{directory::ExpressionDirectory, messages, reply::Reply},
    error::command::CommandError,
    session::SessionStore,
};

/// Reply sessions keyed by the id of the bot message that asked for the reply.
pub type ReplySessions = SessionStore<MessageId, ReplySession>;

/// Work deferred until the user replies with a sticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteSticker,
    RenameSticker { new_name: String },
    StickerToImage,
    StickerToEmoji { name: String },
}

/// Command waiting for a sticker reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplySession {
    pub guild_id: GuildId,
    pub user_id: UserId,
    /// Guild language when the command ran; the resolution reply uses it.
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub action: PendingAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplySticker {
    pub id: StickerId,
    pub name: String,
    /// `None` for Lottie stickers, which have no raster image.
    pub image_url: Option<String>,
}

/// The parts of a guild message the correlator looks at.
#[derive(Debug, Clone)]
pub struct ReplyEvent {
    pub reply_to: Option<MessageId>,
    pub guild_id: Option<GuildId>,
    pub user_id: UserId,
    pub stickers: Vec<ReplySticker>,
}

impl ReplyEvent {
    pub fn from_message(message: &Message) -> Self {
        Self {
            reply_to: message
                .message_reference
                .as_ref()
                .and_then(|reference| reference.message_id),
            guild_id: message.guild_id,
            user_id: message.author.id,
            stickers: message
                .sticker_items
                .iter()
                .map(|sticker| ReplySticker {
                    id: sticker.id,
                    name: sticker.name.clone(),
                    image_url: sticker.image_url(),
                })
                .collect(),
        }
    }
}

/// Outcome of a resolved session, for the caller to report back to the user.
#[derive(Debug)]
pub struct Resolution {
    pub session: ReplySession,
    pub result: Result<Reply, CommandError>,
}

pub struct ReplyCorrelator<'a, D> {
    sessions: &'a ReplySessions,
    directory: D,
}

impl<'a, D: ExpressionDirectory> ReplyCorrelator<'a, D> {
    pub fn new(sessions: &'a ReplySessions, directory: D) -> Self {
        Self {
            sessions,
            directory,
        }
    }

    /// Matches a message against the pending sessions and runs the stored action.
    ///
    /// # Arguments
    /// - `event` - Message that may be a reply to a bot prompt
    ///
    /// # Returns
    /// - `Some(Resolution)` - The message resolved a session; the session is gone and its
    ///   action ran exactly once
    /// - `None` - Ordinary message: not a reply, no live session, wrong author or guild,
    ///   or no sticker attached. A matching session stays pending until it expires.
    pub async fn on_reply(&self, event: &ReplyEvent) -> Option<Resolution> {
        let reply_to = event.reply_to?;
        let guild_id = event.guild_id?;
        let sticker = event.stickers.first()?;

        let session = self
            .sessions
            .take_if(&reply_to, |session| {
                session.user_id == event.user_id && session.guild_id == guild_id
            })
            .await?;

        let result = self.execute(&session, sticker).await;

        Some(Resolution { session, result })
    }

    async fn execute(
        &self,
        session: &ReplySession,
        sticker: &ReplySticker,
    ) -> Result<Reply, CommandError> {
        match &session.action {
            PendingAction::DeleteSticker => {
                self.directory
                    .delete_sticker(session.guild_id, sticker.id)
                    .await?;

                Ok(Reply::phrase(messages::STICKER_DELETED).with_detail(sticker.name.clone()))
            }
            PendingAction::RenameSticker { new_name } => {
                let renamed = self
                    .directory
                    .rename_sticker(session.guild_id, sticker.id, new_name)
                    .await?;

                Ok(Reply::phrase(messages::STICKER_RENAMED)
                    .with_detail(format!("{} → {}", sticker.name, renamed.name)))
            }
            PendingAction::StickerToImage => match &sticker.image_url {
                Some(url) => Ok(Reply::phrase(messages::STICKER_IMAGE).with_detail(url.clone())),
                None => Ok(Reply::phrase(messages::STICKER_NOT_IMAGE)),
            },
            PendingAction::StickerToEmoji { name } => {
                let Some(url) = &sticker.image_url else {
                    return Ok(Reply::phrase(messages::STICKER_NOT_IMAGE));
                };

                let emoji = self
                    .directory
                    .create_emoji(session.guild_id, name, url)
                    .await?;

                Ok(Reply::phrase(messages::EMOJI_CREATED).with_detail(emoji.mention()))
            }
        }
    }
}
