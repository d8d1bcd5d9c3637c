use std::time::Duration;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, GuildId, Interaction, Message, Ready};
use serenity::async_trait;
use tracing::error;

use crate::server::{
    bot::correlator::ReplySessions,
    data::guild_setting::GuildSettingRepository,
    translation::{HttpTranslator, TranslationCache},
};

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub reply_sessions: ReplySessions,
    pub translation: TranslationCache<HttpTranslator>,
    pub reply_session_ttl: Duration,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        reply_sessions: ReplySessions,
        translation: TranslationCache<HttpTranslator>,
        reply_session_ttl: Duration,
    ) -> Self {
        Self {
            db,
            reply_sessions,
            translation,
            reply_session_ttl,
        }
    }

    /// Language replies should be rendered in.
    ///
    /// Falls back to the source language outside guilds or when the lookup fails.
    async fn guild_language(&self, guild_id: Option<GuildId>) -> String {
        let default = self.translation.source_language();
        let Some(guild_id) = guild_id else {
            return default.to_string();
        };

        match GuildSettingRepository::new(&self.db)
            .get_language(guild_id.get(), default)
            .await
        {
            Ok(language) => language,
            Err(e) => {
                error!("Failed to load language for guild {}: {:?}", guild_id, e);
                default.to_string()
            }
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for slash commands and other interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
