//! Per-guild bot settings.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository for the language each guild has chosen for bot replies.
pub struct GuildSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the language configured for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `default` - Language returned when the guild never set one
    ///
    /// # Returns
    /// - `Ok(String)` - Stored language code, or `default`
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_language(&self, guild_id: u64, default: &str) -> Result<String, DbErr> {
        let setting = entity::prelude::GuildSetting::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(setting
            .map(|setting| setting.language)
            .unwrap_or_else(|| default.to_string()))
    }

    /// Stores the language for a guild, replacing any previous choice.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `language` - Language code, already validated by the caller
    ///
    /// # Returns
    /// - `Ok(())` - Setting stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_language(&self, guild_id: u64, language: &str) -> Result<(), DbErr> {
        entity::prelude::GuildSetting::insert(entity::guild_setting::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            language: ActiveValue::Set(language.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::guild_setting::Column::GuildId)
                .update_columns([
                    entity::guild_setting::Column::Language,
                    entity::guild_setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
