//! Practice session: countdown plus transcript collection.
//!
//! One session runs at a time. The session owns the countdown and the
//! transcript buffer; the recognizer feeds cumulative updates that overwrite
//! the buffer in full. When the countdown expires (or the handle requests an
//! early stop), recognition is stopped and the final transcript snapshot is
//! returned for analysis.

mod events;

pub use events::SessionEvent;

use crate::defaults;
use crate::error::Result;
use crate::speech::{Recognizer, TranscriptUpdate};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

/// Handle for requesting an early stop of a running session.
///
/// Cloneable; the request is observed at the next countdown tick.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    stop_requested: Arc<AtomicBool>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the session end at the next tick.
    pub fn stop(&self) {
        self.stop_requested.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }
}

/// A single practice session over a recognizer.
pub struct PracticeSession<R: Recognizer> {
    recognizer: R,
    duration_secs: u32,
    tick_interval: Duration,
    handle: SessionHandle,
    event_tx: Option<mpsc::UnboundedSender<SessionEvent>>,
}

impl<R: Recognizer> PracticeSession<R> {
    /// Create a session with the default one-minute countdown.
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            duration_secs: defaults::SESSION_SECS,
            tick_interval: Duration::from_millis(defaults::TICK_INTERVAL_MS),
            handle: SessionHandle::new(),
            event_tx: None,
        }
    }

    /// Override the session duration in seconds.
    pub fn with_duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Override the countdown tick interval (tests shrink this).
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Attach an event sender for display updates.
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<SessionEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Get a handle for requesting an early stop.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Run the session to completion and return the final transcript.
    ///
    /// The countdown is displayed once per tick, from the full duration down
    /// to 0, and the session ends when the counter passes below zero. A
    /// recognizer that fails to start is reported as an event and the
    /// countdown still runs — the result is then the empty transcript.
    pub async fn run(mut self) -> Result<String> {
        let mut transcript = String::new();

        let mut updates = match self.recognizer.start().await {
            Ok(rx) => {
                self.emit(SessionEvent::ListeningChanged { listening: true });
                Some(rx)
            }
            Err(e) => {
                self.emit(SessionEvent::RecognizerUnavailable {
                    message: e.to_string(),
                });
                None
            }
        };

        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut seconds_left = i64::from(self.duration_secs);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.emit(SessionEvent::Countdown { seconds_left });
                    seconds_left -= 1;
                    if seconds_left < 0 || self.handle.is_stopped() {
                        break;
                    }
                }
                update = next_update(&mut updates) => {
                    match update {
                        Some(update) => {
                            transcript = update.text();
                            self.emit(SessionEvent::TranscriptUpdate {
                                text: transcript.clone(),
                            });
                        }
                        // Recognition ended on its own; keep counting down.
                        None => updates = None,
                    }
                }
            }
        }

        self.emit(SessionEvent::ListeningChanged { listening: false });
        self.recognizer.stop().await.ok();

        // Drain anything queued before the stop: the last update wins.
        if let Some(rx) = updates.as_mut() {
            while let Ok(update) = rx.try_recv() {
                transcript = update.text();
            }
        }

        Ok(transcript)
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(tx) = &self.event_tx {
            tx.send(event).ok();
        }
    }
}

/// Await the next update, pending forever once the stream is gone.
async fn next_update(
    rx: &mut Option<mpsc::Receiver<TranscriptUpdate>>,
) -> Option<TranscriptUpdate> {
    match rx.as_mut() {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
