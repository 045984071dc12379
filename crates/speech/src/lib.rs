//! Speech Synthesis
//!
//! Contract for the device speech service plus the dispatcher that vocalizes
//! the currently selected phrase on a blink. Synthesis failures never reach
//! the gesture pipeline; they are logged and dropped here.

pub mod dispatcher;

pub use dispatcher::SpeechDispatcher;

use async_trait::async_trait;
use locale::Language;
use thiserror::Error;

/// Speech service errors
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("unsupported language tag: {0}")]
    UnsupportedLanguage(String),

    #[error("speech service unavailable: {0}")]
    Unavailable(String),

    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

/// Synthesis options passed with every utterance.
#[derive(Debug, Clone)]
pub struct SpeakOptions {
    /// BCP-47 tag identifying the voice.
    pub language_tag: &'static str,
    pub pitch: f32,
    pub rate: f32,
}

impl SpeakOptions {
    /// Options for a language: neutral pitch, slightly slowed rate for
    /// clarity.
    pub fn for_language(language: Language) -> Self {
        Self {
            language_tag: language.tag(),
            pitch: 1.0,
            rate: 0.9,
        }
    }
}

/// Device speech-synthesis backend.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Cancel any in-flight utterance. No-op when nothing is speaking.
    async fn stop(&self) -> Result<(), SpeechError>;

    /// Synthesize `text` with the given options.
    async fn speak(&self, text: &str, options: &SpeakOptions) -> Result<(), SpeechError>;

    /// Whether an utterance is currently in flight.
    async fn is_speaking(&self) -> Result<bool, SpeechError>;
}
