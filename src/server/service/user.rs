//! User service for business logic.
//!
//! Looks up dashboard users and extends their verification, which the bot checks before
//! running privileged commands.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await
    }

    /// Verifies a user for `days` days from now.
    ///
    /// Re-verifying replaces the previous deadline rather than extending it.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - New verification deadline
    /// - `Err(AppError::NotFound)` - No user with that Discord ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn verify(&self, discord_id: u64, days: i64) -> Result<DateTime<Utc>, AppError> {
        let until = Utc::now() + Duration::days(days);

        let updated = UserRepository::new(self.db).verify(discord_id, until).await?;
        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} verified until {}", discord_id, until);

        Ok(until)
    }
}
