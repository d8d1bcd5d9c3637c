use crate::server::data::guild_setting::GuildSettingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_language;
mod set_language;
