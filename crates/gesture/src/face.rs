//! Face measurement and classified state types

use serde::Serialize;

/// Raw per-frame measurements for one detected face.
///
/// Fields the landmark provider could not measure on a given frame are
/// `None`; classification degrades to the previous value for that field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceObservation {
    /// Left eye open probability in [0, 1] (0 = closed, 1 = open).
    pub left_eye_open: Option<f32>,

    /// Right eye open probability in [0, 1].
    pub right_eye_open: Option<f32>,

    /// Mouth vertical-position value; larger means more open.
    pub mouth_y: Option<f32>,
}

impl FaceObservation {
    /// Observation with both eye probabilities and a mouth position.
    pub fn new(left_eye_open: f32, right_eye_open: f32, mouth_y: f32) -> Self {
        Self {
            left_eye_open: Some(left_eye_open),
            right_eye_open: Some(right_eye_open),
            mouth_y: Some(mouth_y),
        }
    }
}

/// Classified face state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceState {
    /// Whether both eyes are considered open.
    pub eyes_open: bool,

    /// Whether the mouth is considered open.
    pub mouth_open: bool,
}

impl Default for FaceState {
    /// Resting state assumed before any face is classified.
    fn default() -> Self {
        Self {
            eyes_open: true,
            mouth_open: false,
        }
    }
}
