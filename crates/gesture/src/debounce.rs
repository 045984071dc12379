//! Trailing debounce for classified face states
//!
//! Camera frames can arrive faster than 10/sec; downstream edge detection
//! only wants one update per window, carrying the most recent frame's data.
//! A new submission supersedes any pending delivery (trailing debounce, not
//! leading).

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::face::FaceState;

/// Default debounce window.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Collapses bursts of classified states into at most one delivery per
/// window on the receiver side of the channel.
pub struct Debouncer {
    window: Duration,
    tx: mpsc::Sender<FaceState>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer and the channel its deliveries arrive on.
    pub fn channel(window: Duration) -> (Self, mpsc::Receiver<FaceState>) {
        let (tx, rx) = mpsc::channel(16);
        (
            Self {
                window,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Submit the latest classified state.
    ///
    /// Cancels any pending delivery and schedules this state for delivery
    /// once the window elapses. Only the most recent submission fires.
    pub fn submit(&mut self, state: FaceState) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let tx = self.tx.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let _ = tx.send(state).await;
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
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

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_latest() {
        let (mut debouncer, mut rx) = Debouncer::channel(DEBOUNCE_WINDOW);

        debouncer.submit(state(true, false));
        debouncer.submit(state(false, false));
        debouncer.submit(state(true, true));

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(rx.recv().await, Some(state(true, true)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmission_resets_window() {
        let (mut debouncer, mut rx) = Debouncer::channel(DEBOUNCE_WINDOW);

        debouncer.submit(state(false, false));
        tokio::time::sleep(Duration::from_millis(60)).await;

        // Arrives before the first window elapsed, so it replaces the
        // pending delivery entirely.
        debouncer.submit(state(true, true));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(rx.recv().await, Some(state(true, true)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_windows_deliver_separately() {
        let (mut debouncer, mut rx) = Debouncer::channel(DEBOUNCE_WINDOW);

        debouncer.submit(state(false, false));
        tokio::time::sleep(Duration::from_millis(150)).await;

        debouncer.submit(state(true, true));
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(rx.recv().await, Some(state(false, false)));
        assert_eq!(rx.recv().await, Some(state(true, true)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let (mut debouncer, mut rx) = Debouncer::channel(DEBOUNCE_WINDOW);

        debouncer.submit(state(false, false));
        drop(debouncer);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.recv().await, None);
    }
}
