mod guild_setting;
mod user;
