//! User data repository for database operations.
//!
//! Handles dashboard user records: login upserts, admin management and the
//! verification deadline checked by the bot before privileged commands.

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};
use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new user or updates an existing user's name and optionally their admin status.
    /// The admin status is only updated if explicitly provided (Some value), preventing
    /// accidental removal of admin privileges during regular login operations. Verification
    /// and creation time are never touched by an update.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including discord_id, name, and optional admin status
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let mut update_columns = vec![entity::user::Column::Name];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            verified_until: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets all admin users ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every admin (empty if none exist)
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn get_admins(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Sets admin status for a user.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user as u64
    /// - `is_admin` - Whether the user should have admin privileges
    ///
    /// # Returns
    /// - `Ok(true)` - Admin status updated
    /// - `Ok(false)` - No user with that Discord ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_admin(&self, discord_id: u64, is_admin: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a user's verification is live.
    ///
    /// Users that never logged in to the dashboard are not verified.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user as u64
    ///
    /// # Returns
    /// - `Ok(true)` - `verified_until` lies in the future
    /// - `Ok(false)` - Unknown user, never verified, or verification lapsed
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_verified(&self, discord_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::user::Column::VerifiedUntil.gt(Utc::now()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets a user's verification deadline.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user as u64
    /// - `until` - Instant the verification lapses
    ///
    /// # Returns
    /// - `Ok(true)` - Deadline stored
    /// - `Ok(false)` - No user with that Discord ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn verify(&self, discord_id: u64, until: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .col_expr(
                entity::user::Column::VerifiedUntil,
                sea_orm::sea_query::Expr::value(until),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
