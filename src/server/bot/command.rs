//! Slash command definitions and dispatch.
//!
//! `SlashCommand` is the single source of truth for the command set: the ready handler
//! registers it with Discord and `CommandDispatcher` routes invocations through it.
//! Dispatch checks happen in a fixed order (guild, member permission, verification,
//! input validation) so nothing reaches Discord's REST API unless all of them pass.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, EmojiIdentifier, GuildId, Permissions, UserId};
use url::Url;

use crate::server::{
    bot::{
        correlator::PendingAction,
        directory::{emoji_image_url, ExpressionDirectory},
        messages,
        reply::{Reply, Segment},
    },
    data::{guild_setting::GuildSettingRepository, user::UserRepository},
    error::command::CommandError,
    translation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    EmojiAdd,
    EmojiRename,
    EmojiDelete,
    EmojiImage,
    EmojiToSticker,
    StickerAdd,
    StickerDelete,
    StickerRename,
    StickerImage,
    StickerToEmoji,
    Language,
    Help,
}

/// A required string option of a slash command.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
}

const EMOJI_OPTION: OptionSpec = OptionSpec {
    name: "emoji",
    description: "Custom emoji from this server",
};
const EMOJI_NAME_OPTION: OptionSpec = OptionSpec {
    name: "name",
    description: "Emoji name (2-32 letters, numbers or underscores)",
};
const STICKER_NAME_OPTION: OptionSpec = OptionSpec {
    name: "name",
    description: "Sticker name (2-30 characters)",
};
const TAG_OPTION: OptionSpec = OptionSpec {
    name: "tag",
    description: "Emoji describing the sticker",
};

impl SlashCommand {
    pub const ALL: [SlashCommand; 12] = [
        Self::EmojiAdd,
        Self::EmojiRename,
        Self::EmojiDelete,
        Self::EmojiImage,
        Self::EmojiToSticker,
        Self::StickerAdd,
        Self::StickerDelete,
        Self::StickerRename,
        Self::StickerImage,
        Self::StickerToEmoji,
        Self::Language,
        Self::Help,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EmojiAdd => "emoji_add",
            Self::EmojiRename => "emoji_rename",
            Self::EmojiDelete => "emoji_delete",
            Self::EmojiImage => "emoji_image",
            Self::EmojiToSticker => "emoji_to_sticker",
            Self::StickerAdd => "sticker_add",
            Self::StickerDelete => "sticker_delete",
            Self::StickerRename => "sticker_rename",
            Self::StickerImage => "sticker_image",
            Self::StickerToEmoji => "sticker_to_emoji",
            Self::Language => "language",
            Self::Help => "help",
        }
    }

    /// Help text, also used as the registered command description.
    pub fn description(self) -> &'static str {
        match self {
            Self::EmojiAdd => messages::HELP_EMOJI_ADD,
            Self::EmojiRename => messages::HELP_EMOJI_RENAME,
            Self::EmojiDelete => messages::HELP_EMOJI_DELETE,
            Self::EmojiImage => messages::HELP_EMOJI_IMAGE,
            Self::EmojiToSticker => messages::HELP_EMOJI_TO_STICKER,
            Self::StickerAdd => messages::HELP_STICKER_ADD,
            Self::StickerDelete => messages::HELP_STICKER_DELETE,
            Self::StickerRename => messages::HELP_STICKER_RENAME,
            Self::StickerImage => messages::HELP_STICKER_IMAGE,
            Self::StickerToEmoji => messages::HELP_STICKER_TO_EMOJI,
            Self::Language => messages::HELP_LANGUAGE,
            Self::Help => messages::HELP_HELP,
        }
    }

    pub fn options(self) -> &'static [OptionSpec] {
        match self {
            Self::EmojiAdd => &[
                EMOJI_NAME_OPTION,
                OptionSpec {
                    name: "source",
                    description: "Custom emoji or image URL",
                },
            ],
            Self::EmojiRename => &[EMOJI_OPTION, EMOJI_NAME_OPTION],
            Self::StickerToEmoji => &[EMOJI_NAME_OPTION],
            Self::EmojiDelete | Self::EmojiImage => &[EMOJI_OPTION],
            Self::EmojiToSticker => &[EMOJI_OPTION, STICKER_NAME_OPTION, TAG_OPTION],
            Self::StickerAdd => &[
                STICKER_NAME_OPTION,
                TAG_OPTION,
                OptionSpec {
                    name: "url",
                    description: "PNG, APNG or GIF image URL",
                },
            ],
            Self::StickerRename => &[OptionSpec {
                name: "name",
                description: "New sticker name (2-30 characters)",
            }],
            Self::Language => &[OptionSpec {
                name: "code",
                description: "Language code, for example en, ko or ja",
            }],
            Self::StickerDelete | Self::StickerImage | Self::Help => &[],
        }
    }

    /// Guild permission the invoking member must hold.
    pub fn required_permission(self) -> Option<Permissions> {
        match self {
            Self::EmojiImage | Self::StickerImage | Self::Help => None,
            Self::Language => Some(Permissions::MANAGE_GUILD),
            _ => Some(Permissions::MANAGE_GUILD_EXPRESSIONS),
        }
    }

    /// Whether the command creates expressions and is reserved for verified users.
    pub fn requires_verification(self) -> bool {
        matches!(
            self,
            Self::EmojiAdd | Self::EmojiToSticker | Self::StickerAdd | Self::StickerToEmoji
        )
    }

    /// Whether the command works in direct messages.
    pub fn usable_outside_guild(self) -> bool {
        matches!(self, Self::EmojiImage | Self::Help)
    }
}

/// A slash command invocation, detached from the serenity interaction.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub name: String,
    pub guild_id: Option<GuildId>,
    pub user_id: UserId,
    /// Resolved member permissions; `None` outside guilds.
    pub member_permissions: Option<Permissions>,
    pub options: HashMap<String, String>,
}

impl CommandInvocation {
    pub fn from_interaction(command: &CommandInteraction) -> Self {
        Self {
            name: command.data.name.clone(),
            guild_id: command.guild_id,
            user_id: command.user.id,
            member_permissions: command.member.as_ref().and_then(|member| member.permissions),
            options: command
                .data
                .options
                .iter()
                .filter_map(|option| {
                    option
                        .value
                        .as_str()
                        .map(|value| (option.name.clone(), value.to_string()))
                })
                .collect(),
        }
    }

    fn option(&self, name: &str) -> Result<&str, CommandError> {
        self.options
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or(CommandError::Validation(messages::MISSING_OPTION))
    }
}

/// Result of a command: the reply to send and, for sticker commands, the action to
/// run once the user replies with a sticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub reply: Reply,
    pub pending: Option<PendingAction>,
}

impl CommandOutcome {
    fn reply(reply: Reply) -> Self {
        Self {
            reply,
            pending: None,
        }
    }

    fn pending(prompt: &'static str, action: PendingAction) -> Self {
        Self {
            reply: Reply::phrase(prompt),
            pending: Some(action),
        }
    }
}

/// Routes slash command invocations to their handlers.
pub struct CommandDispatcher<'a, D> {
    db: &'a DatabaseConnection,
    directory: D,
}

impl<'a, D: ExpressionDirectory> CommandDispatcher<'a, D> {
    pub fn new(db: &'a DatabaseConnection, directory: D) -> Self {
        Self { db, directory }
    }

    /// Runs a command.
    ///
    /// # Arguments
    /// - `invocation` - Command name, invoking member and options
    ///
    /// # Returns
    /// - `Ok(CommandOutcome)` - Reply to send, possibly with a pending sticker action
    /// - `Err(CommandError)` - Rejected or failed command; reported with `user_message`
    pub async fn dispatch(
        &self,
        invocation: &CommandInvocation,
    ) -> Result<CommandOutcome, CommandError> {
        let Some(command) = SlashCommand::parse(&invocation.name) else {
            return Ok(CommandOutcome::reply(Reply::phrase(messages::UNKNOWN_COMMAND)));
        };

        let guild_id = self.authorize(command, invocation).await?;

        match command {
            SlashCommand::Help => Ok(CommandOutcome::reply(help())),
            SlashCommand::EmojiImage => {
                let emoji = parse_custom_emoji(invocation.option("emoji")?)?;
                Ok(CommandOutcome::reply(
                    Reply::phrase(messages::EMOJI_IMAGE)
                        .with_detail(emoji_image_url(emoji.id, emoji.animated)),
                ))
            }
            SlashCommand::StickerImage => Ok(CommandOutcome::pending(
                messages::REPLY_FOR_IMAGE,
                PendingAction::StickerToImage,
            )),
            SlashCommand::StickerDelete => Ok(CommandOutcome::pending(
                messages::REPLY_TO_DELETE,
                PendingAction::DeleteSticker,
            )),
            SlashCommand::StickerRename => {
                let new_name = invocation.option("name")?;
                validate_sticker_name(new_name)?;
                Ok(CommandOutcome::pending(
                    messages::REPLY_TO_RENAME,
                    PendingAction::RenameSticker {
                        new_name: new_name.to_string(),
                    },
                ))
            }
            SlashCommand::StickerToEmoji => {
                let name = invocation.option("name")?;
                validate_emoji_name(name)?;
                Ok(CommandOutcome::pending(
                    messages::REPLY_FOR_EMOJI,
                    PendingAction::StickerToEmoji {
                        name: name.to_string(),
                    },
                ))
            }
            command => {
                let guild_id = guild_id.ok_or(CommandError::GuildOnly)?;
                self.run_guild_command(command, guild_id, invocation).await
            }
        }
    }

    /// Commands that change the guild right away.
    async fn run_guild_command(
        &self,
        command: SlashCommand,
        guild_id: GuildId,
        invocation: &CommandInvocation,
    ) -> Result<CommandOutcome, CommandError> {
        let reply = match command {
            SlashCommand::EmojiAdd => {
                let name = invocation.option("name")?;
                validate_emoji_name(name)?;
                let image_url = parse_emoji_source(invocation.option("source")?)?;

                let emoji = self
                    .directory
                    .create_emoji(guild_id, name, &image_url)
                    .await?;
                Reply::phrase(messages::EMOJI_CREATED).with_detail(emoji.mention())
            }
            SlashCommand::EmojiRename => {
                let emoji = parse_custom_emoji(invocation.option("emoji")?)?;
                let name = invocation.option("name")?;
                validate_emoji_name(name)?;

                let renamed = self
                    .directory
                    .rename_emoji(guild_id, emoji.id, name)
                    .await?;
                Reply::phrase(messages::EMOJI_RENAMED)
                    .with_detail(format!("{} → {}", emoji.name, renamed.mention()))
            }
            SlashCommand::EmojiDelete => {
                let emoji = parse_custom_emoji(invocation.option("emoji")?)?;

                self.directory.delete_emoji(guild_id, emoji.id).await?;
                Reply::phrase(messages::EMOJI_DELETED)
            }
            SlashCommand::EmojiToSticker => {
                let emoji = parse_custom_emoji(invocation.option("emoji")?)?;
                let name = invocation.option("name")?;
                validate_sticker_name(name)?;
                let tag = invocation.option("tag")?;
                validate_sticker_tag(tag)?;

                let sticker = self
                    .directory
                    .create_sticker(
                        guild_id,
                        name,
                        tag,
                        &emoji_image_url(emoji.id, emoji.animated),
                    )
                    .await?;
                Reply::phrase(messages::STICKER_CREATED).with_detail(sticker.name)
            }
            SlashCommand::StickerAdd => {
                let name = invocation.option("name")?;
                validate_sticker_name(name)?;
                let tag = invocation.option("tag")?;
                validate_sticker_tag(tag)?;
                let image_url = parse_image_url(invocation.option("url")?)?;

                let sticker = self
                    .directory
                    .create_sticker(guild_id, name, tag, &image_url)
                    .await?;
                Reply::phrase(messages::STICKER_CREATED).with_detail(sticker.name)
            }
            SlashCommand::Language => {
                let code = invocation.option("code")?;
                if !translation::is_supported_language(code) {
                    return Ok(CommandOutcome::reply(
                        Reply::phrase(messages::UNSUPPORTED_LANGUAGE)
                            .with_detail(translation::SUPPORTED_LANGUAGES.join(", ")),
                    ));
                }

                GuildSettingRepository::new(self.db)
                    .set_language(guild_id.get(), code)
                    .await?;
                Reply::phrase(messages::LANGUAGE_SET).with_detail(code)
            }
            _ => Reply::phrase(messages::UNKNOWN_COMMAND),
        };

        Ok(CommandOutcome::reply(reply))
    }

    /// Checks guild context, member permission and verification.
    ///
    /// # Returns
    /// - `Ok(Some(GuildId))` - Invoked inside a guild and allowed
    /// - `Ok(None)` - Invoked outside a guild by a command that allows it
    /// - `Err(CommandError)` - First failed check
    async fn authorize(
        &self,
        command: SlashCommand,
        invocation: &CommandInvocation,
    ) -> Result<Option<GuildId>, CommandError> {
        if invocation.guild_id.is_none() && !command.usable_outside_guild() {
            return Err(CommandError::GuildOnly);
        }

        if let Some(required) = command.required_permission() {
            let granted = invocation
                .member_permissions
                .unwrap_or_else(Permissions::empty);
            if !granted.contains(required) && !granted.administrator() {
                return Err(if required == Permissions::MANAGE_GUILD {
                    CommandError::ManageGuildRequired
                } else {
                    CommandError::PermissionDenied
                });
            }
        }

        if command.requires_verification()
            && !UserRepository::new(self.db)
                .is_verified(invocation.user_id.get())
                .await?
        {
            return Err(CommandError::NotVerified);
        }

        Ok(invocation.guild_id)
    }
}

fn help() -> Reply {
    SlashCommand::ALL.into_iter().fold(
        Reply::phrase(messages::HELP_TITLE),
        |reply, command| {
            reply.line(vec![
                Segment::Text(format!("`/{}`", command.name())),
                Segment::Phrase(command.description()),
            ])
        },
    )
}

/// Emoji names: 2 to 32 ASCII letters, digits or underscores.
pub fn validate_emoji_name(name: &str) -> Result<(), CommandError> {
    let valid_length = (2..=32).contains(&name.chars().count());
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_length && valid_chars {
        Ok(())
    } else {
        Err(CommandError::Validation(messages::INVALID_EMOJI_NAME))
    }
}

/// Sticker names: 2 to 30 characters.
pub fn validate_sticker_name(name: &str) -> Result<(), CommandError> {
    if (2..=30).contains(&name.chars().count()) {
        Ok(())
    } else {
        Err(CommandError::Validation(messages::INVALID_STICKER_NAME))
    }
}

fn validate_sticker_tag(tag: &str) -> Result<(), CommandError> {
    if (1..=200).contains(&tag.chars().count()) {
        Ok(())
    } else {
        Err(CommandError::Validation(messages::INVALID_STICKER_TAG))
    }
}

fn parse_custom_emoji(value: &str) -> Result<EmojiIdentifier, CommandError> {
    serenity::utils::parse_emoji(value).ok_or(CommandError::Validation(messages::INVALID_EMOJI))
}

fn parse_image_url(value: &str) -> Result<String, CommandError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url.into()),
        _ => Err(CommandError::Validation(messages::INVALID_URL)),
    }
}

/// `emoji_add` accepts either a custom emoji or an image URL.
fn parse_emoji_source(value: &str) -> Result<String, CommandError> {
    if let Some(emoji) = serenity::utils::parse_emoji(value) {
        return Ok(emoji_image_url(emoji.id, emoji.animated));
    }

    parse_image_url(value).map_err(|_| CommandError::Validation(messages::INVALID_SOURCE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        bot::directory::mock::{Call, MockDirectory},
        error::directory::DirectoryError,
    };
    use serenity::all::EmojiId;
    use test_utils::{builder::TestBuilder, factory};

    const GUILD: u64 = 1;
    const USER: u64 = 10;

    fn invocation(name: &str, options: &[(&str, &str)]) -> CommandInvocation {
        CommandInvocation {
            name: name.to_string(),
            guild_id: Some(GuildId::new(GUILD)),
            user_id: UserId::new(USER),
            member_permissions: Some(
                Permissions::MANAGE_GUILD_EXPRESSIONS | Permissions::MANAGE_GUILD,
            ),
            options: options
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Tests that every command name round-trips through `parse`.
    ///
    /// Expected: each name maps back to its command, unknown names to None
    #[test]
    fn parses_every_command_name() {
        for command in SlashCommand::ALL {
            assert_eq!(SlashCommand::parse(command.name()), Some(command));
        }
        assert_eq!(SlashCommand::parse("emoji_steal"), None);
    }

    /// Tests emoji name rules.
    ///
    /// Expected: 2-32 chars of [A-Za-z0-9_] accepted, anything else rejected
    #[test]
    fn validates_emoji_names() {
        assert!(validate_emoji_name("ok").is_ok());
        assert!(validate_emoji_name("party_blob_2").is_ok());
        assert!(validate_emoji_name(&"a".repeat(32)).is_ok());

        assert!(validate_emoji_name("a").is_err());
        assert!(validate_emoji_name(&"a".repeat(33)).is_err());
        assert!(validate_emoji_name("party-blob").is_err());
        assert!(validate_emoji_name("파티").is_err());
    }

    /// Tests sticker name rules.
    ///
    /// Expected: 2-30 characters accepted, anything else rejected
    #[test]
    fn validates_sticker_names() {
        assert!(validate_sticker_name("hi").is_ok());
        assert!(validate_sticker_name("안녕 친구").is_ok());
        assert!(validate_sticker_name(&"a".repeat(30)).is_ok());

        assert!(validate_sticker_name("a").is_err());
        assert!(validate_sticker_name(&"a".repeat(31)).is_err());
    }

    /// Tests a member without Manage Expressions.
    ///
    /// Expected: PermissionDenied before any directory call
    #[tokio::test]
    async fn rejects_member_without_permission() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let mut call = invocation("emoji_delete", &[("emoji", "<:blob:42>")]);
        call.member_permissions = Some(Permissions::SEND_MESSAGES);

        let result = dispatcher.dispatch(&call).await;

        assert!(matches!(result, Err(CommandError::PermissionDenied)));
        assert!(dispatcher.directory.calls().is_empty());
    }

    /// Tests the language command without Manage Server.
    ///
    /// Expected: ManageGuildRequired
    #[tokio::test]
    async fn language_requires_manage_guild() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let mut call = invocation("language", &[("code", "ko")]);
        call.member_permissions = Some(Permissions::MANAGE_GUILD_EXPRESSIONS);

        let result = dispatcher.dispatch(&call).await;

        assert!(matches!(result, Err(CommandError::ManageGuildRequired)));
    }

    /// Tests that administrators pass every permission check.
    ///
    /// Expected: emoji deleted
    #[tokio::test]
    async fn administrator_passes_permission_check() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let mut call = invocation("emoji_delete", &[("emoji", "<:blob:42>")]);
        call.member_permissions = Some(Permissions::ADMINISTRATOR);

        let outcome = dispatcher.dispatch(&call).await.unwrap();

        assert_eq!(outcome.reply.english(), messages::EMOJI_DELETED);
        assert_eq!(
            dispatcher.directory.calls(),
            vec![Call::DeleteEmoji {
                emoji_id: EmojiId::new(42)
            }]
        );
    }

    /// Tests creating an emoji as an unverified user.
    ///
    /// Expected: NotVerified, no directory call
    #[tokio::test]
    async fn emoji_add_requires_verification() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let call = invocation(
            "emoji_add",
            &[("name", "blob"), ("source", "https://example.com/blob.png")],
        );

        let result = dispatcher.dispatch(&call).await;

        assert!(matches!(result, Err(CommandError::NotVerified)));
        assert!(dispatcher.directory.calls().is_empty());
    }

    /// Tests creating an emoji from another emoji as a verified user.
    ///
    /// Expected: emoji created from the CDN image of the source emoji
    #[tokio::test]
    async fn emoji_add_copies_custom_emoji() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_verified_user(db, USER.to_string()).await.unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let call = invocation("emoji_add", &[("name", "blob"), ("source", "<a:dance:77>")]);

        let outcome = dispatcher.dispatch(&call).await.unwrap();

        assert_eq!(outcome.reply.english(), "Emoji created: <:blob:900>");
        assert!(outcome.pending.is_none());
        assert_eq!(
            dispatcher.directory.calls(),
            vec![Call::CreateEmoji {
                name: "blob".to_string(),
                image_url: "https://cdn.discordapp.com/emojis/77.gif".to_string()
            }]
        );
    }

    /// Tests an invalid emoji name.
    ///
    /// Expected: validation error before any directory call
    #[tokio::test]
    async fn invalid_name_never_reaches_directory() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_verified_user(db, USER.to_string()).await.unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let call = invocation(
            "emoji_add",
            &[("name", "bad name!"), ("source", "https://example.com/blob.png")],
        );

        let result = dispatcher.dispatch(&call).await;

        assert!(matches!(
            result,
            Err(CommandError::Validation(messages::INVALID_EMOJI_NAME))
        ));
        assert!(dispatcher.directory.calls().is_empty());
    }

    /// Tests an emoji source that is neither an emoji nor a URL.
    ///
    /// Expected: INVALID_SOURCE validation error
    #[tokio::test]
    async fn rejects_invalid_emoji_source() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_verified_user(db, USER.to_string()).await.unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let call = invocation("emoji_add", &[("name", "blob"), ("source", "ftp://x/y.png")]);

        let result = dispatcher.dispatch(&call).await;

        assert!(matches!(
            result,
            Err(CommandError::Validation(messages::INVALID_SOURCE))
        ));
    }

    /// Tests sticker commands that wait for a reply.
    ///
    /// Expected: prompt reply with the matching pending action
    #[tokio::test]
    async fn sticker_commands_open_pending_actions() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let delete = dispatcher
            .dispatch(&invocation("sticker_delete", &[]))
            .await
            .unwrap();
        let rename = dispatcher
            .dispatch(&invocation("sticker_rename", &[("name", "hello")]))
            .await
            .unwrap();
        let image = dispatcher
            .dispatch(&invocation("sticker_image", &[]))
            .await
            .unwrap();

        assert_eq!(delete.pending, Some(PendingAction::DeleteSticker));
        assert_eq!(
            rename.pending,
            Some(PendingAction::RenameSticker {
                new_name: "hello".to_string()
            })
        );
        assert_eq!(image.pending, Some(PendingAction::StickerToImage));
        assert!(dispatcher.directory.calls().is_empty());
    }

    /// Tests sticker_rename with an invalid name.
    ///
    /// Expected: validation error and no pending action
    #[tokio::test]
    async fn sticker_rename_validates_before_prompting() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let result = dispatcher
            .dispatch(&invocation("sticker_rename", &[("name", "x")]))
            .await;

        assert!(matches!(
            result,
            Err(CommandError::Validation(messages::INVALID_STICKER_NAME))
        ));
    }

    /// Tests sticker_to_emoji.
    ///
    /// Expected: verified user gets a prompt with the validated emoji name; unverified
    /// user is rejected before any prompt
    #[tokio::test]
    async fn sticker_to_emoji_prompts_verified_users() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());
        let call = invocation("sticker_to_emoji", &[("name", "wave")]);

        assert!(matches!(
            dispatcher.dispatch(&call).await,
            Err(CommandError::NotVerified)
        ));

        factory::create_verified_user(db, USER.to_string()).await.unwrap();
        let outcome = dispatcher.dispatch(&call).await.unwrap();
        let invalid = dispatcher
            .dispatch(&invocation("sticker_to_emoji", &[("name", "wave!")]))
            .await;

        assert_eq!(outcome.reply.english(), messages::REPLY_FOR_EMOJI);
        assert_eq!(
            outcome.pending,
            Some(PendingAction::StickerToEmoji {
                name: "wave".to_string()
            })
        );
        assert!(matches!(
            invalid,
            Err(CommandError::Validation(messages::INVALID_EMOJI_NAME))
        ));
        assert!(dispatcher.directory.calls().is_empty());
    }

    /// Tests emoji_to_sticker.
    ///
    /// Expected: sticker created from the emoji's PNG
    #[tokio::test]
    async fn converts_emoji_to_sticker() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_verified_user(db, USER.to_string()).await.unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let call = invocation(
            "emoji_to_sticker",
            &[("emoji", "<:blob:42>"), ("name", "big blob"), ("tag", "blob")],
        );

        let outcome = dispatcher.dispatch(&call).await.unwrap();

        assert_eq!(outcome.reply.english(), "Sticker created: big blob");
        assert_eq!(
            dispatcher.directory.calls(),
            vec![Call::CreateSticker {
                name: "big blob".to_string(),
                tag: "blob".to_string(),
                image_url: "https://cdn.discordapp.com/emojis/42.png".to_string()
            }]
        );
    }

    /// Tests a directory failure.
    ///
    /// Expected: the classified error is returned for reporting
    #[tokio::test]
    async fn surfaces_directory_failure() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher =
            CommandDispatcher::new(db, MockDirectory::failing(DirectoryError::NotFound));

        let result = dispatcher
            .dispatch(&invocation(
                "emoji_rename",
                &[("emoji", "<:blob:42>"), ("name", "blob2")],
            ))
            .await;

        assert!(matches!(
            result,
            Err(CommandError::Directory(DirectoryError::NotFound))
        ));
    }

    /// Tests setting and rejecting languages.
    ///
    /// Expected: supported code stored, unsupported code left unstored
    #[tokio::test]
    async fn sets_supported_language_only() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let set = dispatcher
            .dispatch(&invocation("language", &[("code", "ko")]))
            .await
            .unwrap();
        let rejected = dispatcher
            .dispatch(&invocation("language", &[("code", "klingon")]))
            .await
            .unwrap();

        assert_eq!(set.reply.english(), "Bot language changed: ko");
        assert!(rejected
            .reply
            .english()
            .starts_with(messages::UNSUPPORTED_LANGUAGE));

        let stored = GuildSettingRepository::new(db)
            .get_language(GUILD, "en")
            .await
            .unwrap();
        assert_eq!(stored, "ko");
    }

    /// Tests commands usable in direct messages.
    ///
    /// Expected: help and emoji_image work without a guild, others are GuildOnly
    #[tokio::test]
    async fn guild_only_commands_rejected_in_dms() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let mut help = invocation("help", &[]);
        help.guild_id = None;
        help.member_permissions = None;
        let mut image = invocation("emoji_image", &[("emoji", "<:blob:42>")]);
        image.guild_id = None;
        image.member_permissions = None;
        let mut delete = invocation("sticker_delete", &[]);
        delete.guild_id = None;
        delete.member_permissions = None;

        let help = dispatcher.dispatch(&help).await.unwrap();
        let image = dispatcher.dispatch(&image).await.unwrap();

        assert!(help.reply.english().contains("`/emoji_add`"));
        assert_eq!(
            image.reply.english(),
            "Here is the emoji image: https://cdn.discordapp.com/emojis/42.png"
        );
        assert!(matches!(
            dispatcher.dispatch(&delete).await,
            Err(CommandError::GuildOnly)
        ));
    }

    /// Tests an unknown command name.
    ///
    /// Expected: generic unknown-command reply
    #[tokio::test]
    async fn unknown_command_gets_generic_reply() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let outcome = dispatcher
            .dispatch(&invocation("emoji_steal", &[]))
            .await
            .unwrap();

        assert_eq!(outcome.reply.english(), messages::UNKNOWN_COMMAND);
    }

    /// Tests a missing required option.
    ///
    /// Expected: MISSING_OPTION validation error
    #[tokio::test]
    async fn missing_option_is_validation_error() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let dispatcher = CommandDispatcher::new(db, MockDirectory::default());

        let result = dispatcher.dispatch(&invocation("emoji_delete", &[])).await;

        assert!(matches!(
            result,
            Err(CommandError::Validation(messages::MISSING_OPTION))
        ));
    }
}
