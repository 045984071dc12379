//! Gesture Session
//!
//! Wires the engine together for one screen instance:
//! camera frames → landmark classifier → debouncer → edge detector →
//! {cycle controller, speech dispatcher}.
//!
//! The session is the single entry point the UI talks to: it feeds frames
//! in, reads the current selection and face-presence flag out, and tears the
//! timers down on drop.

use std::sync::Arc;
use std::time::Duration;

use gesture::{
    ClassifierConfig, Debouncer, EdgeDetector, FaceObservation, GestureEvent,
    LandmarkClassifier, DEBOUNCE_WINDOW,
};
use parking_lot::Mutex;
use phrase_bank::{CycleController, CycleState, Phrase, PhraseList, CYCLE_INTERVAL};
use speech::{SpeechDispatcher, SpeechService};
use tokio::task::JoinHandle;
use tracing::info;

/// Session timing and classifier thresholds.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub classifier: ClassifierConfig,
    pub debounce_window: Duration,
    pub cycle_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            debounce_window: DEBOUNCE_WINDOW,
            cycle_interval: CYCLE_INTERVAL,
        }
    }
}

/// One gesture-driven phrase-selection session.
pub struct GestureSession {
    classifier: LandmarkClassifier,
    debouncer: Debouncer,
    list: Arc<Mutex<PhraseList>>,
    cycle: Arc<Mutex<CycleController>>,
    enabled: bool,
    face_detected: bool,
    worker: JoinHandle<()>,
}

impl GestureSession {
    /// Build a session over a phrase list and a speech backend.
    ///
    /// Spawns the event worker immediately; the session is live until
    /// dropped.
    pub fn new(
        config: SessionConfig,
        list: PhraseList,
        service: Arc<dyn SpeechService>,
    ) -> Self {
        let list = Arc::new(Mutex::new(list));
        let cycle = Arc::new(Mutex::new(CycleController::with_interval(
            Arc::clone(&list),
            config.cycle_interval,
        )));
        let dispatcher = SpeechDispatcher::new(service, Arc::clone(&list));

        let (debouncer, mut rx) = Debouncer::channel(config.debounce_window);

        let worker_cycle = Arc::clone(&cycle);
        let worker = tokio::spawn(async move {
            let mut edge = EdgeDetector::new();
            while let Some(state) = rx.recv().await {
                for event in edge.observe(Some(state)) {
                    match event {
                        GestureEvent::MouthOpened => worker_cycle.lock().start_cycling(),
                        GestureEvent::MouthClosed => worker_cycle.lock().stop_cycling(),
                        GestureEvent::BlinkDetected => dispatcher.speak_selected(),
                    }
                }
            }
        });

        // Read both fields under one lock; guard temporaries inside a macro
        // invocation live to the end of the statement, so a second lock()
        // there would self-deadlock.
        let (language, phrases) = {
            let list = list.lock();
            (list.language(), list.len())
        };
        info!(%language, phrases, "gesture session started");

        Self {
            classifier: LandmarkClassifier::new(config.classifier),
            debouncer,
            list,
            cycle,
            enabled: true,
            face_detected: false,
            worker,
        }
    }

    /// Per-frame entry point.
    ///
    /// Reads only the first detected face. Frames without a face update the
    /// presence flag but produce no classification, so the edge detector's
    /// history stays frozen until a face reappears.
    pub fn submit_frame(&mut self, faces: &[FaceObservation]) {
        if !self.enabled {
            return;
        }

        self.face_detected = !faces.is_empty();
        if let Some(state) = self.classifier.classify_frame(faces) {
            self.debouncer.submit(state);
        }
    }

    /// Whether the last submitted frame contained a face.
    pub fn face_detected(&self) -> bool {
        self.face_detected
    }

    /// Enable or disable frame processing. A disabled session drops frames
    /// entirely and stops cycling.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        info!(enabled, "gesture session toggled");
        if !enabled {
            self.cycle.lock().stop_cycling();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn cycle_state(&self) -> CycleState {
        self.cycle.lock().state()
    }

    /// Current selection index into the phrase list.
    pub fn selected_index(&self) -> usize {
        self.list.lock().selected_index()
    }

    /// Currently selected phrase, if the list is non-empty.
    pub fn selected_phrase(&self) -> Option<Phrase> {
        self.list.lock().selected_phrase().cloned()
    }

    /// Shared handle to the phrase list, for UI-side edits.
    pub fn phrase_list(&self) -> Arc<Mutex<PhraseList>> {
        Arc::clone(&self.list)
    }
}

impl Drop for GestureSession {
    fn drop(&mut self) {
        self.cycle.lock().stop_cycling();
        self.worker.abort();
    }
}
