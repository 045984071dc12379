//! App languages and their speech-service tags
//!
//! The speech backend identifies voices by BCP-47 tag ("en-US"); the rest of
//! the app works with the coarser `Language` enum that settings and phrase
//! records are keyed on.

use serde::{Deserialize, Serialize};

/// Languages the phrase bank and speech service support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
    Tamil,
    Kannada,
    Bengali,
    Japanese,
    Korean,
    Mandarin,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::Hindi,
        Language::Telugu,
        Language::Tamil,
        Language::Kannada,
        Language::Bengali,
        Language::Japanese,
        Language::Korean,
        Language::Mandarin,
    ];

    /// BCP-47 tag consumed by the speech service.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
            Language::Telugu => "te-IN",
            Language::Tamil => "ta-IN",
            Language::Kannada => "kn-IN",
            Language::Bengali => "bn-IN",
            Language::Japanese => "ja-JP",
            Language::Korean => "ko-KR",
            Language::Mandarin => "zh-CN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Telugu => "telugu",
            Language::Tamil => "tamil",
            Language::Kannada => "kannada",
            Language::Bengali => "bengali",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Mandarin => "mandarin",
        };
        write!(f, "{}", name)
    }
}
