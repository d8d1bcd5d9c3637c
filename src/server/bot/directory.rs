//! Emoji and sticker operations against a guild.
//!
//! `ExpressionDirectory` is the seam between command logic and Discord's REST API;
//! command and reply handlers are generic over it so they can be exercised with an
//! in-memory directory in tests.

use std::sync::Arc;

use serenity::all::{
    CreateAttachment, CreateSticker, EditSticker, EmojiId, GuildId, Http, StickerId,
};
use serenity::async_trait;

use crate::server::error::directory::DirectoryError;

/// A custom emoji as returned after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRef {
    pub id: EmojiId,
    pub name: String,
    pub animated: bool,
}

impl EmojiRef {
    /// Chat markup rendering the emoji inline.
    pub fn mention(&self) -> String {
        let prefix = if self.animated { "a" } else { "" };
        format!("<{}:{}:{}>", prefix, self.name, self.id)
    }
}

/// A guild sticker as returned after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerRef {
    pub id: StickerId,
    pub name: String,
}

/// CDN URL of a custom emoji image.
pub fn emoji_image_url(id: EmojiId, animated: bool) -> String {
    let extension = if animated { "gif" } else { "png" };
    format!("https://cdn.discordapp.com/emojis/{}.{}", id, extension)
}

/// Guild emoji and sticker management.
///
/// Images are passed as URLs; implementations download them. Every failure is
/// classified into a `DirectoryError` and is never retried.
#[async_trait]
pub trait ExpressionDirectory: Send + Sync {
    async fn create_emoji(
        &self,
        guild_id: GuildId,
        name: &str,
        image_url: &str,
    ) -> Result<EmojiRef, DirectoryError>;

    async fn rename_emoji(
        &self,
        guild_id: GuildId,
        emoji_id: EmojiId,
        name: &str,
    ) -> Result<EmojiRef, DirectoryError>;

    async fn delete_emoji(&self, guild_id: GuildId, emoji_id: EmojiId)
        -> Result<(), DirectoryError>;

    async fn create_sticker(
        &self,
        guild_id: GuildId,
        name: &str,
        tag: &str,
        image_url: &str,
    ) -> Result<StickerRef, DirectoryError>;

    async fn rename_sticker(
        &self,
        guild_id: GuildId,
        sticker_id: StickerId,
        name: &str,
    ) -> Result<StickerRef, DirectoryError>;

    async fn delete_sticker(
        &self,
        guild_id: GuildId,
        sticker_id: StickerId,
    ) -> Result<(), DirectoryError>;
}

/// `ExpressionDirectory` backed by the bot's serenity HTTP client.
pub struct DiscordDirectory {
    http: Arc<Http>,
}

impl DiscordDirectory {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Downloads an image through serenity so it can be uploaded again.
    async fn fetch_image(&self, image_url: &str) -> Result<CreateAttachment, DirectoryError> {
        let http: &Http = &self.http;
        Ok(CreateAttachment::url(http, image_url).await?)
    }
}

#[async_trait]
impl ExpressionDirectory for DiscordDirectory {
    async fn create_emoji(
        &self,
        guild_id: GuildId,
        name: &str,
        image_url: &str,
    ) -> Result<EmojiRef, DirectoryError> {
        let http: &Http = &self.http;
        let image = self.fetch_image(image_url).await?;

        let emoji = guild_id
            .create_emoji(http, name, &image.to_base64())
            .await?;

        Ok(EmojiRef {
            id: emoji.id,
            name: emoji.name,
            animated: emoji.animated,
        })
    }

    async fn rename_emoji(
        &self,
        guild_id: GuildId,
        emoji_id: EmojiId,
        name: &str,
    ) -> Result<EmojiRef, DirectoryError> {
        let http: &Http = &self.http;
        let emoji = guild_id.edit_emoji(http, emoji_id, name).await?;

        Ok(EmojiRef {
            id: emoji.id,
            name: emoji.name,
            animated: emoji.animated,
        })
    }

    async fn delete_emoji(
        &self,
        guild_id: GuildId,
        emoji_id: EmojiId,
    ) -> Result<(), DirectoryError> {
        let http: &Http = &self.http;
        guild_id.delete_emoji(http, emoji_id).await?;

        Ok(())
    }

    async fn create_sticker(
        &self,
        guild_id: GuildId,
        name: &str,
        tag: &str,
        image_url: &str,
    ) -> Result<StickerRef, DirectoryError> {
        let http: &Http = &self.http;
        let image = self.fetch_image(image_url).await?;

        let sticker = guild_id
            .create_sticker(http, CreateSticker::new(name, image).tags(tag))
            .await?;

        Ok(StickerRef {
            id: sticker.id,
            name: sticker.name,
        })
    }

    async fn rename_sticker(
        &self,
        guild_id: GuildId,
        sticker_id: StickerId,
        name: &str,
    ) -> Result<StickerRef, DirectoryError> {
        let http: &Http = &self.http;
        let sticker = guild_id
            .edit_sticker(http, sticker_id, EditSticker::new().name(name))
            .await?;

        Ok(StickerRef {
            id: sticker.id,
            name: sticker.name,
        })
    }

    async fn delete_sticker(
        &self,
        guild_id: GuildId,
        sticker_id: StickerId,
    ) -> Result<(), DirectoryError> {
        let http: &Http = &self.http;
        guild_id.delete_sticker(http, sticker_id).await?;

        Ok(())
    }
}
