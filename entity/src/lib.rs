//! SeaORM entity models for the ProEmoji database.

pub mod prelude;

pub mod guild_setting;
pub mod user;
