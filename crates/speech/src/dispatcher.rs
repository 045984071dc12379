//! Blink-triggered speech dispatch

use std::sync::Arc;

use parking_lot::Mutex;
use phrase_bank::PhraseList;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{SpeakOptions, SpeechService};

/// Speaks the currently selected phrase of a shared list.
///
/// Dispatch is fire-and-forget from the caller's perspective: the stop/speak
/// sequence runs on its own task so frame processing is never blocked, and
/// service failures are logged rather than propagated. A new dispatch
/// supersedes the previous one, so a stale phrase can never be spoken after
/// a later blink's stop.
pub struct SpeechDispatcher {
    service: Arc<dyn SpeechService>,
    list: Arc<Mutex<PhraseList>>,
    inflight: Mutex<Option<JoinHandle<()>>>,
}

impl SpeechDispatcher {
    pub fn new(service: Arc<dyn SpeechService>, list: Arc<Mutex<PhraseList>>) -> Self {
        Self {
            service,
            list,
            inflight: Mutex::new(None),
        }
    }

    /// Vocalize the currently selected phrase.
    ///
    /// Aborts any previous dispatch task, stops any in-flight utterance,
    /// then requests synthesis in the list's language. No-op when the list
    /// is empty.
    pub fn speak_selected(&self) {
        let (phrase, language) = {
            let list = self.list.lock();
            (list.selected_phrase().cloned(), list.language())
        };

        let Some(phrase) = phrase else {
            debug!("speak skipped: phrase list empty");
            return;
        };

        let service = Arc::clone(&self.service);
        let options = SpeakOptions::for_language(language);
        info!(text = %phrase.text, tag = options.language_tag, "speak_phrase");

        let mut inflight = self.inflight.lock();
        if let Some(previous) = inflight.take() {
            previous.abort();
        }
        *inflight = Some(tokio::spawn(async move {
            if let Err(e) = service.stop().await {
                warn!(error = %e, "speech stop failed");
            }
            if let Err(e) = service.speak(&phrase.text, &options).await {
                warn!(error = %e, "speech synthesis failed");
            }
        }));
    }

    /// Whether the service reports an utterance in flight.
    ///
    /// Service failures map to `false`.
    pub async fn is_speaking(&self) -> bool {
        match self.service.is_speaking().await {
            Ok(speaking) => speaking,
            Err(e) => {
                warn!(error = %e, "is_speaking query failed");
                false
            }
        }
    }
}

impl Drop for SpeechDispatcher {
    fn drop(&mut self) {
        if let Some(task) = self.inflight.lock().take() {
            task.abort();
        }
    }
}
