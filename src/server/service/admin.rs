//! Admin panel operations: the admin roster and live runtime statistics.

use sea_orm::DatabaseConnection;

use crate::{
    model::admin::AdminStatsDto,
    server::{
        bot::correlator::ReplySessions,
        data::user::UserRepository,
        error::AppError,
        model::user::User,
        session::LoginSessionStore,
        translation::{TranslationCache, Translator},
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every admin user, ordered by name.
    pub async fn get_admins(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_admins().await
    }

    /// Grants or revokes admin status.
    ///
    /// # Arguments
    /// - `actor_id` - Discord ID of the admin making the change
    /// - `discord_id` - Discord ID of the target user
    /// - `admin` - New admin flag
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated
    /// - `Err(AppError::BadRequest)` - Admin tried to revoke their own admin status
    /// - `Err(AppError::NotFound)` - No user with that Discord ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_admin(
        &self,
        actor_id: u64,
        discord_id: u64,
        admin: bool,
    ) -> Result<(), AppError> {
        if actor_id == discord_id && !admin {
            return Err(AppError::BadRequest(
                "You cannot revoke your own admin status".to_string(),
            ));
        }

        let updated = UserRepository::new(self.db).set_admin(discord_id, admin).await?;
        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!(
            "Admin status of user {} set to {} by {}",
            discord_id,
            admin,
            actor_id
        );

        Ok(())
    }
}

/// Collects live counts from the in-memory stores.
pub async fn collect_stats<T: Translator>(
    reply_sessions: &ReplySessions,
    login_sessions: &LoginSessionStore,
    translation: &TranslationCache<T>,
) -> AdminStatsDto {
    AdminStatsDto {
        reply_sessions: reply_sessions.len().await,
        login_sessions: login_sessions.len().await,
        cached_translations: translation.len().await,
    }
}
