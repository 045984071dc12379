//! GazePhrase Engine - Demo Entry Point
//!
//! Loads settings and phrases from a file-backed store, then runs a scripted
//! gesture sequence (mouth open, two cycle ticks, mouth close, blink)
//! through a full session against a logging speech backend.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use gesture::FaceObservation;
use phrase_bank::PhraseList;
use pipeline::{GestureSession, SessionConfig};
use speech::{SpeakOptions, SpeechError, SpeechService};
use storage::{JsonFileStore, PhraseStore, SettingsStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Speech backend that logs utterances instead of producing audio.
struct ConsoleSpeech;

#[async_trait]
impl SpeechService for ConsoleSpeech {
    async fn stop(&self) -> Result<(), SpeechError> {
        Ok(())
    }

    async fn speak(&self, text: &str, options: &SpeakOptions) -> Result<(), SpeechError> {
        info!(
            tag = options.language_tag,
            rate = options.rate,
            "speaking: {}",
            text
        );
        Ok(())
    }

    async fn is_speaking(&self) -> Result<bool, SpeechError> {
        Ok(false)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("=== GazePhrase Engine v{} ===", env!("CARGO_PKG_VERSION"));

    let data_dir = std::env::temp_dir().join("gazephrase-demo");
    let store = Arc::new(JsonFileStore::new(&data_dir));

    let settings = SettingsStore::new(store.clone()).load().await?;
    info!(language = %settings.language, "settings loaded");

    let phrases = PhraseStore::new(store)
        .load_for_language(settings.language)
        .await?;
    let list = PhraseList::new(settings.language, phrases);
    info!(count = list.len(), "phrase list ready");

    // Faster cycle than production so the script finishes quickly
    let config = SessionConfig {
        cycle_interval: Duration::from_millis(400),
        ..Default::default()
    };
    let mut session = GestureSession::new(config, list, Arc::new(ConsoleSpeech));

    let mouth_open = FaceObservation::new(0.95, 0.95, 0.5);
    let mouth_closed = FaceObservation::new(0.95, 0.95, 0.1);
    let blink = FaceObservation::new(0.4, 0.4, 0.1);

    info!("mouth opened: cycling");
    session.submit_frame(&[mouth_open]);
    tokio::time::sleep(Duration::from_millis(1100)).await;

    session.submit_frame(&[mouth_closed]);
    tokio::time::sleep(Duration::from_millis(200)).await;
    let selected = session.selected_phrase().map(|p| p.text).unwrap_or_default();
    info!(%selected, "mouth closed: selection locked");

    info!("blink: speaking the selection");
    session.submit_frame(&[blink]);
    tokio::time::sleep(Duration::from_millis(300)).await;

    Ok(())
}
