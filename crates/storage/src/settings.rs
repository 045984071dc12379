//! App settings record

use std::sync::Arc;

use locale::Language;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::kv::KeyValueStore;
use crate::StorageError;

/// Store key for the settings record.
pub const SETTINGS_KEY: &str = "app_settings";

/// User settings, persisted as a single record and rewritten wholesale on
/// any change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub language: Language,
    pub dark_mode: bool,
    pub show_disclaimer: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            dark_mode: true,
            show_disclaimer: true,
        }
    }
}

/// Settings repository over a key-value store.
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the settings record; defaults when nothing is stored yet.
    pub async fn load(&self) -> Result<AppSettings, StorageError> {
        match self.store.get(SETTINGS_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(AppSettings::default()),
        }
    }

    /// Persist the full settings record.
    pub async fn save(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let json = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_KEY, &json).await
    }

    /// Change the app language and persist.
    pub async fn set_language(&self, language: Language) -> Result<AppSettings, StorageError> {
        let mut settings = self.load().await?;
        settings.language = language;
        self.save(&settings).await?;
        info!(%language, "language changed");
        Ok(settings)
    }

    /// Flip dark mode and persist.
    pub async fn toggle_dark_mode(&self) -> Result<AppSettings, StorageError> {
        let mut settings = self.load().await?;
        settings.dark_mode = !settings.dark_mode;
        self.save(&settings).await?;
        Ok(settings)
    }

    /// Set disclaimer visibility and persist.
    pub async fn set_show_disclaimer(&self, show: bool) -> Result<AppSettings, StorageError> {
        let mut settings = self.load().await?;
        settings.show_disclaimer = show;
        self.save(&settings).await?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn store() -> SettingsStore {
        SettingsStore::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_defaults_when_unset() {
        let settings = store().load().await.unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.language, Language::English);
        assert!(settings.dark_mode);
        assert!(settings.show_disclaimer);
    }

    #[tokio::test]
    async fn test_mutators_rewrite_whole_record() {
        let store = store();

        store.set_language(Language::Tamil).await.unwrap();
        store.toggle_dark_mode().await.unwrap();
        store.set_show_disclaimer(false).await.unwrap();

        let settings = store.load().await.unwrap();
        assert_eq!(settings.language, Language::Tamil);
        assert!(!settings.dark_mode);
        assert!(!settings.show_disclaimer);
    }
}
