//! Phrase cycle controller
//!
//! State machine behind the mouth gesture: opening the mouth starts a
//! repeating advance timer over the shared phrase list, closing it stops the
//! timer. The timer handle is an owned field of the controller; starting a
//! new timer always cancels the previous one, so two timers never run at
//! once, and dropping the controller releases any active timer.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::phrase::PhraseList;

/// Default interval between selection advances while cycling.
pub const CYCLE_INTERVAL: Duration = Duration::from_millis(1500);

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Cycling,
}

/// Drives the selection index of a shared phrase list on a fixed cadence.
pub struct CycleController {
    list: Arc<Mutex<PhraseList>>,
    interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl CycleController {
    /// Controller with the default advance interval.
    pub fn new(list: Arc<Mutex<PhraseList>>) -> Self {
        Self::with_interval(list, CYCLE_INTERVAL)
    }

    /// Controller with a custom advance interval.
    pub fn with_interval(list: Arc<Mutex<PhraseList>>, interval: Duration) -> Self {
        Self {
            list,
            interval,
            timer: None,
        }
    }

    pub fn state(&self) -> CycleState {
        match &self.timer {
            Some(timer) if !timer.is_finished() => CycleState::Cycling,
            _ => CycleState::Idle,
        }
    }

    pub fn is_cycling(&self) -> bool {
        self.state() == CycleState::Cycling
    }

    /// Mouth opened: start (or restart) the repeating advance timer.
    ///
    /// Re-entry while already cycling cancels the running timer first, so the
    /// cadence restarts from now and only one timer ever exists.
    pub fn start_cycling(&mut self) {
        self.cancel_timer();

        let list = Arc::clone(&self.list);
        let period = self.interval;
        debug!(period_ms = period.as_millis() as u64, "cycle_start");

        self.timer = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick resolves immediately; consume it so advances
            // begin one full period after the mouth opened.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut list = list.lock();
                list.advance();
                debug!(selected = list.selected_index(), "cycle_tick");
            }
        }));
    }

    /// Mouth closed: cancel the advance timer.
    pub fn stop_cycling(&mut self) {
        if self.timer.is_some() {
            debug!("cycle_stop");
        }
        self.cancel_timer();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for CycleController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
