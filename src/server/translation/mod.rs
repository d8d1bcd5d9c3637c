//! Machine translation of bot replies.
//!
//! `client` talks to the hosted translation endpoint; `cache` sits in front of it,
//! bounds every call with a timeout and falls back to the untranslated text on any
//! failure so a reply is never blocked by translation.

pub mod cache;
pub mod client;

pub use cache::{CacheSettings, TranslationCache};
pub use client::{HttpTranslator, Translator};

/// Language codes the bot can be switched to with `/language`.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "ko", "ja", "zh-CN", "zh-TW", "es", "pt", "fr", "de", "it", "ru", "tr", "vi", "id",
    "th", "pl", "nl", "uk",
];

/// Checks whether `code` is one of `SUPPORTED_LANGUAGES`.
pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}
