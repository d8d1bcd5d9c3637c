//! Slash command handling.

use std::time::Duration;

use chrono::Utc;
use serenity::all::{Context, EditInteractionResponse, Interaction};
use tracing::{debug, error, warn};

use crate::server::{
    bot::{
        command::{CommandDispatcher, CommandInvocation},
        correlator::ReplySession,
        directory::DiscordDirectory,
        handler::Handler,
        messages,
        reply::{Reply, Segment},
    },
    error::command::CommandError,
};

/// Runs a slash command and reports the outcome.
///
/// The response is deferred first because image downloads and uploads can exceed
/// Discord's three second acknowledgement window. When the command waits for a sticker
/// reply, a reply session is opened under the id of the message just sent.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let invocation = CommandInvocation::from_interaction(&command);
    debug!(
        "Command /{} from {} in {:?}",
        invocation.name, invocation.user_id, invocation.guild_id
    );

    if let Err(e) = command.defer(&ctx.http).await {
        error!("Failed to defer /{}: {:?}", invocation.name, e);
        return;
    }

    let dispatcher = CommandDispatcher::new(&handler.db, DiscordDirectory::new(ctx.http.clone()));

    let (reply, pending) = match dispatcher.dispatch(&invocation).await {
        Ok(outcome) => (outcome.reply, outcome.pending),
        Err(e) => {
            log_command_error(&invocation.name, &e);
            (Reply::phrase(e.user_message()), None)
        }
    };

    let reply = match pending {
        Some(_) => reply.line(expiry_line(handler.reply_session_ttl)),
        None => reply,
    };

    // Looked up after dispatch so `/language` answers in the language it just set.
    let language = handler.guild_language(invocation.guild_id).await;
    let content = reply.render(&handler.translation, &language).await;

    let message = match command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        Ok(message) => message,
        Err(e) => {
            error!("Failed to respond to /{}: {:?}", invocation.name, e);
            return;
        }
    };

    let (Some(action), Some(guild_id)) = (pending, invocation.guild_id) else {
        return;
    };

    // Keyed by the prompt's message id, which only exists once `edit_response` returns.
    // A sticker reply that lands before this point is an ordinary message.

    handler
        .reply_sessions
        .create(
            message.id,
            ReplySession {
                guild_id,
                user_id: invocation.user_id,
                language,
                created_at: Utc::now(),
                action,
            },
            handler.reply_session_ttl,
        )
        .await;

    debug!("Opened reply session {} for /{}", message.id, invocation.name);
}

/// Prompt line telling the user how long the reply session stays open.
fn expiry_line(ttl: Duration) -> Vec<Segment> {
    let secs = ttl.as_secs();
    let remaining = if secs >= 60 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    };

    vec![Segment::Phrase(messages::REQUEST_EXPIRES), Segment::Text(remaining)]
}

/// User mistakes are expected; Discord and database failures are not.
pub(super) fn log_command_error(command: &str, err: &CommandError) {
    match err {
        CommandError::Directory(_) | CommandError::Database(_) => {
            error!("/{} failed: {}", command, err)
        }
        _ => warn!("/{} rejected: {}", command, err),
    }
}
