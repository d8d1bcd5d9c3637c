//! Guild setting factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a language setting for a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `language` - Language code to store
///
/// # Returns
/// - `Ok(entity::guild_setting::Model)` - Created setting
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_setting(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    language: impl Into<String>,
) -> Result<entity::guild_setting::Model, DbErr> {
    entity::guild_setting::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        language: ActiveValue::Set(language.into()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
