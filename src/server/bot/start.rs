use serenity::all::{Client, GatewayIntents};
use tracing::info;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting.
///
/// The client's HTTP handle can be cloned out before `start_bot` takes ownership.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `handler` - Event handler with the stores and caches it needs
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError::DiscordErr)` - Token rejected or client setup failed
pub async fn init_bot(config: &Config, handler: Handler) -> Result<Client, AppError> {
    // GUILD_MESSAGES delivers the sticker replies; no privileged intents are needed.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the gateway connection until it shuts down.
///
/// Call from within a `tokio::spawn` task; this only returns when the bot stops.
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
