//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Registers the global slash
//! commands so the command list Discord shows always matches `SlashCommand::ALL`.

use serenity::all::{
    ActivityData, Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, Ready,
};
use tracing::{error, info};

use crate::server::bot::command::SlashCommand;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands and setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("/help")));

    match Command::set_global_commands(&ctx.http, build_commands()).await {
        Ok(commands) => info!("Registered {} slash commands", commands.len()),
        Err(e) => error!("Failed to register slash commands: {:?}", e),
    }
}

/// Builds the registration payload for every slash command.
pub fn build_commands() -> Vec<CreateCommand> {
    SlashCommand::ALL
        .into_iter()
        .map(|command| {
            let mut builder = CreateCommand::new(command.name()).description(command.description());

            if let Some(permission) = command.required_permission() {
                builder = builder.default_member_permissions(permission);
            }

            command.options().iter().fold(builder, |builder, option| {
                builder.add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        option.name,
                        option.description,
                    )
                    .required(true),
                )
            })
        })
        .collect()
}
