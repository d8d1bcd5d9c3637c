//! Discord bot: slash commands and sticker reply follow-ups.
//!
//! - `command` - command set, validation and dispatch
//! - `correlator` - matches sticker replies to the command that asked for them
//! - `directory` - emoji and sticker operations against Discord's REST API
//! - `messages` / `reply` - English reply phrases and their translated rendering
//! - `handler` - serenity event handlers wiring the above together
//!
//! The bot runs in its own tokio task next to the HTTP server and shares the database
//! connection and the translation cache with it.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability
//! - `GUILD_MESSAGES` - Replies carrying stickers

pub mod command;
pub mod correlator;
pub mod directory;
pub mod handler;
pub mod messages;
pub mod reply;
pub mod start;
