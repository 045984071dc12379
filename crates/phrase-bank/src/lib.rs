//! Phrase Bank
//!
//! The vocalizable phrases and the gesture-driven selection over them:
//! - `Phrase` / `PhraseList`: ordered per-language phrases with a wrapping
//!   selection index
//! - seed phrases for every supported language
//! - `CycleController`: mouth-open starts a repeating advance timer,
//!   mouth-close stops it

pub mod cycle;
pub mod defaults;
pub mod phrase;

pub use cycle::{CycleController, CycleState, CYCLE_INTERVAL};
pub use defaults::seed_phrases;
pub use phrase::{Phrase, PhraseList};
