//! Fixed-threshold landmark classification

use crate::face::{FaceObservation, FaceState};

/// Classifier thresholds
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfig {
    /// Average eye-open probability above which eyes count as open.
    pub eye_open_threshold: f32,

    /// Mouth vertical-position value above which the mouth counts as open.
    pub mouth_open_threshold: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            eye_open_threshold: 0.85,
            mouth_open_threshold: 0.3,
        }
    }
}

/// Maps raw eye/mouth measurements to a boolean `FaceState`.
///
/// Missing measurements never fail classification; the previous value is
/// retained per field, starting from the default resting state.
pub struct LandmarkClassifier {
    config: ClassifierConfig,
    last: FaceState,
}

impl LandmarkClassifier {
    /// Create a classifier with the given thresholds.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            last: FaceState::default(),
        }
    }

    /// Classify one face observation.
    ///
    /// Eyes require both probabilities to be present; the mouth requires its
    /// position value. Absent fields keep the previous classification.
    pub fn classify(&mut self, obs: &FaceObservation) -> FaceState {
        let mut state = self.last;

        if let (Some(left), Some(right)) = (obs.left_eye_open, obs.right_eye_open) {
            let avg = (left + right) / 2.0;
            state.eyes_open = avg > self.config.eye_open_threshold;
        }

        if let Some(mouth_y) = obs.mouth_y {
            state.mouth_open = mouth_y > self.config.mouth_open_threshold;
        }

        self.last = state;
        state
    }

    /// Classify one frame's detected faces.
    ///
    /// Only the first detected face is read; additional faces are ignored.
    /// Returns `None` when no face is present (no classification happens and
    /// the retained state is untouched).
    pub fn classify_frame(&mut self, faces: &[FaceObservation]) -> Option<FaceState> {
        faces.first().copied().map(|face| self.classify(&face))
    }

    /// Most recently classified state.
    pub fn last_state(&self) -> FaceState {
        self.last
    }
}

impl Default for LandmarkClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_eye_threshold_boundary() {
        let mut classifier = LandmarkClassifier::default();

        // Exactly at the threshold counts as not open
        let state = classifier.classify(&FaceObservation::new(0.85, 0.85, 0.0));
        assert!(!state.eyes_open);

        let state = classifier.classify(&FaceObservation::new(0.86, 0.86, 0.0));
        assert!(state.eyes_open);
    }

    #[test]
    fn test_mouth_threshold() {
        let mut classifier = LandmarkClassifier::default();

        let state = classifier.classify(&FaceObservation::new(0.9, 0.9, 0.31));
        assert!(state.mouth_open);

        let state = classifier.classify(&FaceObservation::new(0.9, 0.9, 0.3));
        assert!(!state.mouth_open);
    }

    #[test]
    fn test_missing_fields_retain_previous() {
        let mut classifier = LandmarkClassifier::default();

        classifier.classify(&FaceObservation::new(0.5, 0.5, 0.5));
        assert_eq!(
            classifier.last_state(),
            FaceState {
                eyes_open: false,
                mouth_open: true
            }
        );

        // One eye probability missing: eyes keep the previous value
        let state = classifier.classify(&FaceObservation {
            left_eye_open: Some(0.99),
            right_eye_open: None,
            mouth_y: None,
        });
        assert!(!state.eyes_open);
        assert!(state.mouth_open);
    }

    #[test]
    fn test_frame_uses_first_face_only() {
        let mut classifier = LandmarkClassifier::default();

        let faces = [
            FaceObservation::new(0.9, 0.9, 0.0),
            FaceObservation::new(0.1, 0.1, 0.9),
        ];
        let state = classifier.classify_frame(&faces).unwrap();
        assert!(state.eyes_open);
        assert!(!state.mouth_open);
    }

    #[test]
    fn test_empty_frame_yields_nothing() {
        let mut classifier = LandmarkClassifier::default();
        classifier.classify(&FaceObservation::new(0.5, 0.5, 0.5));

        assert!(classifier.classify_frame(&[]).is_none());
        // Retained state untouched
        assert!(!classifier.last_state().eyes_open);
    }

    proptest! {
        #[test]
        fn prop_eye_threshold_monotonic(p in 0.0f32..=1.0) {
            let mut classifier = LandmarkClassifier::default();
            let state = classifier.classify(&FaceObservation::new(p, p, 0.0));
            prop_assert_eq!(state.eyes_open, p > 0.85);
        }
    }
}
