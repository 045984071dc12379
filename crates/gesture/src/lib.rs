//! Gesture Detection Pipeline
//!
//! Turns noisy per-frame face-landmark measurements into discrete gesture
//! events:
//! - Landmark classification (eye/mouth thresholds)
//! - Trailing debounce (one update per window, latest data wins)
//! - Edge-trigger detection (blink, mouth opened, mouth closed)

pub mod classifier;
pub mod debounce;
pub mod edge;
pub mod face;

pub use classifier::{ClassifierConfig, LandmarkClassifier};
pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
pub use edge::{EdgeDetector, GestureEvent};
pub use face::{FaceObservation, FaceState};
