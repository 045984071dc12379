//! Phrase repository
//!
//! All languages' phrases live under one key as a JSON array and every
//! mutation rewrites the record wholesale. Loading a language that has no
//! stored phrases seeds and persists its defaults.

use std::sync::Arc;

use locale::Language;
use phrase_bank::{seed_phrases, Phrase};
use tracing::{debug, info};

use crate::kv::KeyValueStore;
use crate::StorageError;

/// Store key for the phrase collection.
pub const PHRASES_KEY: &str = "app_phrases";

/// Phrase repository over a key-value store.
pub struct PhraseStore {
    store: Arc<dyn KeyValueStore>,
}

impl PhraseStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load every stored phrase across all languages.
    pub async fn load_all(&self) -> Result<Vec<Phrase>, StorageError> {
        match self.store.get(PHRASES_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full phrase collection.
    pub async fn save_all(&self, phrases: &[Phrase]) -> Result<(), StorageError> {
        let json = serde_json::to_string(phrases)?;
        self.store.set(PHRASES_KEY, &json).await
    }

    /// Load the phrases for one language, seeding defaults when none exist.
    ///
    /// Seeds are appended to whatever other languages already have stored, so
    /// switching languages never discards edits.
    pub async fn load_for_language(
        &self,
        language: Language,
    ) -> Result<Vec<Phrase>, StorageError> {
        let mut all = self.load_all().await?;
        let matching: Vec<Phrase> = all
            .iter()
            .filter(|p| p.language == language)
            .cloned()
            .collect();

        if !matching.is_empty() {
            debug!(%language, count = matching.len(), "phrases loaded");
            return Ok(matching);
        }

        let seeds = seed_phrases(language);
        info!(%language, count = seeds.len(), "seeding default phrases");
        all.extend(seeds.iter().cloned());
        self.save_all(&all).await?;
        Ok(seeds)
    }

    /// Add a phrase and persist the collection.
    pub async fn add(&self, phrase: Phrase) -> Result<(), StorageError> {
        let mut all = self.load_all().await?;
        all.retain(|p| p.id != phrase.id || p.language != phrase.language);
        all.push(phrase);
        self.save_all(&all).await
    }

    /// Replace the text of a stored phrase. Returns false for unknown ids.
    pub async fn update(
        &self,
        language: Language,
        id: &str,
        text: &str,
    ) -> Result<bool, StorageError> {
        let mut all = self.load_all().await?;
        let mut found = false;
        for phrase in all
            .iter_mut()
            .filter(|p| p.language == language && p.id == id)
        {
            phrase.text = text.to_string();
            found = true;
        }
        if found {
            self.save_all(&all).await?;
        }
        Ok(found)
    }

    /// Remove a stored phrase. Returns false for unknown ids.
    pub async fn remove(&self, language: Language, id: &str) -> Result<bool, StorageError> {
        let mut all = self.load_all().await?;
        let before = all.len();
        all.retain(|p| !(p.language == language && p.id == id));
        if all.len() == before {
            return Ok(false);
        }
        self.save_all(&all).await?;
        Ok(true)
    }
}
