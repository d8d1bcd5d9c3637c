//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Dashboard user with Discord identity, admin flag and verification deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// End of the current verification, if the user ever verified.
    pub verified_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Checks whether verification is live at `now`.
    pub fn is_verified_at(&self, now: DateTime<Utc>) -> bool {
        self.verified_until.is_some_and(|until| until > now)
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            verified: self.is_verified_at(Utc::now()),
            discord_id: self.discord_id,
            name: self.name,
            admin: self.admin,
            verified_until: self.verified_until,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            admin: entity.admin,
            verified_until: entity.verified_until,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for upserting a user at login.
///
/// `is_admin` of `None` preserves the stored admin flag, so a regular login never
/// revokes admin status granted from the panel.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: u64,
    pub name: String,
    pub is_admin: Option<bool>,
}
