use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_discord_id;
mod get_admins;
mod is_verified;
mod set_admin;
mod upsert;
mod verify;
