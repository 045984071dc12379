//! Edge-triggered gesture events
//!
//! Events fire on state transitions only, never on steady state. Mouth
//! events are mutually exclusive per transition; a blink may co-occur with
//! either of them.

use serde::Serialize;
use tracing::debug;

use crate::face::FaceState;

/// Discrete gesture event derived from consecutive face states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GestureEvent {
    /// Eyes were open and are now closed.
    BlinkDetected,

    /// Mouth was closed and is now open.
    MouthOpened,

    /// Mouth was open and is now closed.
    MouthClosed,
}

/// Compares each classified state against the previous one and emits the
/// transitions as events.
pub struct EdgeDetector {
    prev: FaceState,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self {
            prev: FaceState::default(),
        }
    }

    /// Evaluate one debounced state.
    ///
    /// `None` means no face was present for the frame: evaluation is skipped
    /// and the previous state stays frozen until a face reappears, so losing
    /// the face mid-blink never fires a phantom event.
    pub fn observe(&mut self, state: Option<FaceState>) -> Vec<GestureEvent> {
        let Some(curr) = state else {
            return Vec::new();
        };

        let mut events = Vec::new();

        if self.prev.eyes_open && !curr.eyes_open {
            events.push(GestureEvent::BlinkDetected);
        }

        if !self.prev.mouth_open && curr.mouth_open {
            events.push(GestureEvent::MouthOpened);
        } else if self.prev.mouth_open && !curr.mouth_open {
            events.push(GestureEvent::MouthClosed);
        }

        self.prev = curr;

        if !events.is_empty() {
            debug!(?events, "gesture_events");
        }
        events
    }

    /// State the next observation will be compared against.
    pub fn previous(&self) -> FaceState {
        self.prev
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(eyes_open: bool, mouth_open: bool) -> FaceState {
        FaceState {
            eyes_open,
            mouth_open,
        }
    }

    #[test]
    fn test_blink_fires_once_per_closure() {
        let mut detector = EdgeDetector::new();

        let events = detector.observe(Some(state(false, false)));
        assert_eq!(events, vec![GestureEvent::BlinkDetected]);

        // Eyes stay closed: steady state, no repeat
        let events = detector.observe(Some(state(false, false)));
        assert!(events.is_empty());

        // Reopening is not an event
        let events = detector.observe(Some(state(true, false)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_mouth_events_are_exclusive() {
        let mut detector = EdgeDetector::new();

        assert_eq!(
            detector.observe(Some(state(true, true))),
            vec![GestureEvent::MouthOpened]
        );
        assert_eq!(
            detector.observe(Some(state(true, false))),
            vec![GestureEvent::MouthClosed]
        );
        assert!(detector.observe(Some(state(true, false))).is_empty());
    }

    #[test]
    fn test_blink_can_co_occur_with_mouth_event() {
        let mut detector = EdgeDetector::new();

        let events = detector.observe(Some(state(false, true)));
        assert_eq!(
            events,
            vec![GestureEvent::BlinkDetected, GestureEvent::MouthOpened]
        );
    }

    #[test]
    fn test_no_face_freezes_previous_state() {
        let mut detector = EdgeDetector::new();

        detector.observe(Some(state(false, false)));
        assert!(detector.observe(None).is_empty());

        // Face returns with eyes still closed: no second blink
        assert!(detector.observe(Some(state(false, false))).is_empty());

        // Reopen then close again: a real new blink
        detector.observe(Some(state(true, false)));
        assert_eq!(
            detector.observe(Some(state(false, false))),
            vec![GestureEvent::BlinkDetected]
        );
    }

    #[test]
    fn test_single_blink_from_probability_drop() {
        use crate::classifier::LandmarkClassifier;
        use crate::face::FaceObservation;

        let mut classifier = LandmarkClassifier::default();
        let mut detector = EdgeDetector::new();

        let open = classifier.classify(&FaceObservation::new(0.9, 0.9, 0.0));
        let closed = classifier.classify(&FaceObservation::new(0.5, 0.5, 0.0));

        let mut blinks = 0;
        for state in [open, closed] {
            blinks += detector
                .observe(Some(state))
                .iter()
                .filter(|e| **e == GestureEvent::BlinkDetected)
                .count();
        }
        assert_eq!(blinks, 1);
    }
}
