use std::{
    collections::{hash_map::Entry, HashMap, VecDeque},
    sync::Arc,
    time::Duration,
};

use tokio::{sync::RwLock, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::server::{error::translation::TranslationError, translation::client::Translator};

/// Tunables for `TranslationCache`, read from configuration.
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Language the bot's phrases are written in; never sent to the translator.
    pub source_language: String,
    /// Upper bound on a single translator call.
    pub timeout: Duration,
    /// Entry count above which eviction runs.
    pub ceiling: usize,
    /// Number of oldest entries dropped per eviction.
    pub eviction_batch: usize,
}

type CacheKey = (String, String);

#[derive(Default)]
struct CacheEntries {
    map: HashMap<CacheKey, String>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<CacheKey>,
}

/// Fail-open translation cache keyed by `(language, source text)`.
///
/// A miss calls the translator under a timeout and stores the result. Any failure is
/// logged and the original text is returned instead, so callers always get something
/// to send. Eviction is FIFO by insertion: once the entry count passes `ceiling` the
/// `eviction_batch` oldest entries are dropped, regardless of how often they were hit.
///
/// Cloning shares the entries and the translator.
pub struct TranslationCache<T> {
    translator: Arc<T>,
    entries: Arc<RwLock<CacheEntries>>,
    settings: CacheSettings,
}

impl<T> Clone for TranslationCache<T> {
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
            entries: Arc::clone(&self.entries),
            settings: self.settings.clone(),
        }
    }
}

impl<T: Translator> TranslationCache<T> {
    pub fn new(translator: T, settings: CacheSettings) -> Self {
        Self {
            translator: Arc::new(translator),
            entries: Arc::new(RwLock::new(CacheEntries::default())),
            settings,
        }
    }

    pub fn source_language(&self) -> &str {
        &self.settings.source_language
    }

    /// Translates `text` into `language`.
    ///
    /// # Arguments
    /// - `text` - Phrase in the source language
    /// - `language` - Target language code
    ///
    /// # Returns
    /// The cached or freshly translated text, or `text` itself when `language` is the
    /// source language or the translator failed or timed out.
    pub async fn translate(&self, text: &str, language: &str) -> String {
        if language == self.settings.source_language || text.trim().is_empty() {
            return text.to_string();
        }

        let key = (language.to_string(), text.to_string());
        if let Some(hit) = self.entries.read().await.map.get(&key) {
            return hit.clone();
        }

        let call = self
            .translator
            .translate(text, &self.settings.source_language, language);

        let result = match tokio::time::timeout(self.settings.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(TranslationError::Timeout),
        };

        match result {
            Ok(translated) => self.insert(key, translated).await,
            Err(err) => {
                warn!(
                    "Translation into {} failed, sending untranslated text: {}",
                    language, err
                );
                text.to_string()
            }
        }
    }

    /// Stores a translation and evicts the oldest entries when over the ceiling.
    ///
    /// If another task stored the same key while this one was waiting on the translator,
    /// the earlier value is kept and returned.
    async fn insert(&self, key: CacheKey, translated: String) -> String {
        let mut entries = self.entries.write().await;
        let CacheEntries { map, order } = &mut *entries;

        let value = match map.entry(key) {
            Entry::Occupied(existing) => return existing.get().clone(),
            Entry::Vacant(slot) => {
                order.push_back(slot.key().clone());
                slot.insert(translated).clone()
            }
        };

        if map.len() > self.settings.ceiling {
            // A zero batch would never bring the map back under the ceiling.
            let count = self.settings.eviction_batch.max(1).min(order.len());
            for evicted in order.drain(..count) {
                map.remove(&evicted);
            }
            debug!("Evicted {} cached translations", count);
        }

        value
    }

    /// Translates every phrase into every language in a background task.
    ///
    /// Failures are absorbed the same way as in `translate`; the task only fills the cache.
    pub fn prewarm(
        &self,
        phrases: &'static [&'static str],
        languages: Vec<String>,
    ) -> JoinHandle<()> {
        let cache = self.clone();

        tokio::spawn(async move {
            for language in &languages {
                for phrase in phrases {
                    cache.translate(phrase, language).await;
                }
            }

            info!(
                "Translation cache prewarmed for {} languages ({} entries)",
                languages.len(),
                cache.len().await
            );
        })
    }

    /// Number of cached translations.
    pub async fn len(&self) -> usize {
        self.entries.read().await.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    #[cfg(test)]
    async fn contains(&self, text: &str, language: &str) -> bool {
        self.entries
            .read()
            .await
            .map
            .contains_key(&(language.to_string(), text.to_string()))
    }
}
