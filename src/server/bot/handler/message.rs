use serenity::all::{Context, Message};
use tracing::{debug, error};

use crate::server::bot::{
    correlator::{ReplyCorrelator, ReplyEvent},
    directory::DiscordDirectory,
    handler::{interaction::log_command_error, Handler},
    reply::Reply,
};

/// Handle message creation in a channel
///
/// Only replies to a bot prompt that carry a sticker can resolve a reply session;
/// everything else is ignored.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    if message.author.bot || message.guild_id.is_none() || message.message_reference.is_none() {
        return;
    }

    let event = ReplyEvent::from_message(&message);
    let correlator = ReplyCorrelator::new(
        &handler.reply_sessions,
        DiscordDirectory::new(ctx.http.clone()),
    );

    let Some(resolution) = correlator.on_reply(&event).await else {
        return;
    };

    debug!(
        "Resolved reply session {:?} with {:?}",
        event.reply_to, resolution.session.action
    );

    let reply = match resolution.result {
        Ok(reply) => reply,
        Err(e) => {
            log_command_error("sticker reply", &e);
            Reply::phrase(e.user_message())
        }
    };

    let content = reply
        .render(&handler.translation, &resolution.session.language)
        .await;

    if let Err(e) = message.reply(&ctx, content).await {
        error!("Failed to answer sticker reply: {:?}", e);
    }
}
