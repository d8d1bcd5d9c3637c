//! English text of every bot reply.
//!
//! Replies are assembled from these fixed phrases plus untranslated details such as
//! emoji names and URLs. Only the phrases go through the translation cache, which keeps
//! the cache key space bounded and lets startup prewarm it from `ALL`.

pub const MISSING_PERMISSION: &str =
    "You need the Manage Expressions permission to use this command.";
pub const MISSING_MANAGE_GUILD: &str =
    "You need the Manage Server permission to change the bot language.";
pub const NOT_VERIFIED: &str =
    "This command is only available to verified users. Log in to the ProEmoji dashboard and verify your account first.";
pub const GUILD_ONLY: &str = "This command can only be used inside a server.";

pub const BOT_MISSING_PERMISSION: &str =
    "I don't have permission to manage emojis and stickers in this server.";
pub const FILE_TOO_LARGE: &str =
    "The image is too large. Emojis must be under 256 KB and stickers under 512 KB.";
pub const INVALID_REQUEST: &str =
    "Discord rejected the request. Check that the image is a PNG, JPEG or GIF and try again.";
pub const NOT_FOUND: &str = "That emoji or sticker could not be found in this server.";
pub const LIMIT_REACHED: &str = "This server has no free emoji or sticker slots left.";
pub const RATE_LIMITED: &str = "Discord is rate limiting the bot. Please try again in a moment.";
pub const DISCORD_UNAVAILABLE: &str =
    "Discord could not complete the request. Please try again later.";
pub const INTERNAL_ERROR: &str = "Something went wrong. Please try again later.";

pub const INVALID_EMOJI_NAME: &str =
    "Emoji names must be 2 to 32 characters long and use only letters, numbers and underscores.";
pub const INVALID_STICKER_NAME: &str = "Sticker names must be 2 to 30 characters long.";
pub const INVALID_STICKER_TAG: &str =
    "The sticker tag must be a single emoji or a word of up to 200 characters.";
pub const INVALID_EMOJI: &str = "Please give a custom emoji, for example <:name:id>.";
pub const INVALID_SOURCE: &str = "Please give a custom emoji or an http(s) image URL.";
pub const INVALID_URL: &str = "Please give a valid http(s) image URL.";
pub const MISSING_OPTION: &str = "A required option is missing.";
pub const UNSUPPORTED_LANGUAGE: &str = "That language is not supported. Supported languages:";
pub const UNKNOWN_COMMAND: &str = "Unknown command.";

pub const EMOJI_CREATED: &str = "Emoji created:";
pub const EMOJI_RENAMED: &str = "Emoji renamed:";
pub const EMOJI_DELETED: &str = "Emoji deleted.";
pub const EMOJI_IMAGE: &str = "Here is the emoji image:";
pub const STICKER_CREATED: &str = "Sticker created:";
pub const STICKER_RENAMED: &str = "Sticker renamed:";
pub const STICKER_DELETED: &str = "Sticker deleted:";
pub const STICKER_IMAGE: &str = "Here is the sticker image:";
pub const STICKER_NOT_IMAGE: &str = "That sticker is animated with Lottie and has no image file.";
pub const LANGUAGE_SET: &str = "Bot language changed:";

pub const REPLY_TO_DELETE: &str = "Reply to this message with the sticker you want to delete.";
pub const REPLY_TO_RENAME: &str = "Reply to this message with the sticker you want to rename.";
pub const REPLY_FOR_IMAGE: &str = "Reply to this message with a sticker to get its image.";
pub const REPLY_FOR_EMOJI: &str =
    "Reply to this message with the sticker you want to turn into an emoji.";
pub const REQUEST_EXPIRES: &str = "This request expires in:";

pub const HELP_TITLE: &str = "ProEmoji commands";
pub const HELP_EMOJI_ADD: &str = "Add an emoji from another emoji or an image URL.";
pub const HELP_EMOJI_RENAME: &str = "Rename an emoji.";
pub const HELP_EMOJI_DELETE: &str = "Delete an emoji.";
pub const HELP_EMOJI_IMAGE: &str = "Get the image of an emoji.";
pub const HELP_EMOJI_TO_STICKER: &str = "Turn an emoji into a sticker.";
pub const HELP_STICKER_ADD: &str = "Add a sticker from an image URL.";
pub const HELP_STICKER_DELETE: &str = "Delete a sticker by replying with it.";
pub const HELP_STICKER_RENAME: &str = "Rename a sticker by replying with it.";
pub const HELP_STICKER_IMAGE: &str = "Get the image of a sticker by replying with it.";
pub const HELP_STICKER_TO_EMOJI: &str = "Turn a sticker into an emoji by replying with it.";
pub const HELP_LANGUAGE: &str = "Change the language of the bot in this server.";
pub const HELP_HELP: &str = "Show this list.";

/// Every phrase above, used to prewarm the translation cache.
pub const ALL: &[&str] = &[
    MISSING_PERMISSION,
    MISSING_MANAGE_GUILD,
    NOT_VERIFIED,
    GUILD_ONLY,
    BOT_MISSING_PERMISSION,
    FILE_TOO_LARGE,
    INVALID_REQUEST,
    NOT_FOUND,
    LIMIT_REACHED,
    RATE_LIMITED,
    DISCORD_UNAVAILABLE,
    INTERNAL_ERROR,
    INVALID_EMOJI_NAME,
    INVALID_STICKER_NAME,
    INVALID_STICKER_TAG,
    INVALID_EMOJI,
    INVALID_SOURCE,
    INVALID_URL,
    MISSING_OPTION,
    UNSUPPORTED_LANGUAGE,
    UNKNOWN_COMMAND,
    EMOJI_CREATED,
    EMOJI_RENAMED,
    EMOJI_DELETED,
    EMOJI_IMAGE,
    STICKER_CREATED,
    STICKER_RENAMED,
    STICKER_DELETED,
    STICKER_IMAGE,
    STICKER_NOT_IMAGE,
    LANGUAGE_SET,
    REPLY_TO_DELETE,
    REPLY_TO_RENAME,
    REPLY_FOR_IMAGE,
    REPLY_FOR_EMOJI,
    REQUEST_EXPIRES,
    HELP_TITLE,
    HELP_EMOJI_ADD,
    HELP_EMOJI_RENAME,
    HELP_EMOJI_DELETE,
    HELP_EMOJI_IMAGE,
    HELP_EMOJI_TO_STICKER,
    HELP_STICKER_ADD,
    HELP_STICKER_DELETE,
    HELP_STICKER_RENAME,
    HELP_STICKER_IMAGE,
    HELP_STICKER_TO_EMOJI,
    HELP_LANGUAGE,
    HELP_HELP,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_no_duplicates() {
        let unique: HashSet<&str> = ALL.iter().copied().collect();
        assert_eq!(unique.len(), ALL.len());
    }
}
