//! Storage Layer
//!
//! Key-value persistence behind the settings and phrase repositories. The
//! engine only depends on a get/set contract over string keys holding JSON;
//! the storage technology stays swappable behind `KeyValueStore`.

pub mod kv;
pub mod phrases;
pub mod settings;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use phrases::{PhraseStore, PHRASES_KEY};
pub use settings::{AppSettings, SettingsStore, SETTINGS_KEY};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}
