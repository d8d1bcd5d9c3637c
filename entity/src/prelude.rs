pub use super::guild_setting::Entity as GuildSetting;
pub use super::user::Entity as User;
