//! Speech playback controller — the state machine behind the Listen/Stop
//! buttons.
//!
//! The platform engine owns a single global utterance queue, so at most one
//! session is live at a time and every start clears the queue first. The
//! controller only observes the engine at utterance boundaries: an utterance
//! already in flight finishes before a cancellation takes effect, which
//! bounds cancel latency to one chunk.

use super::chunker;
use super::interface::{
    PlaybackNotifier, SpeakTarget, SpeechEngine, SpeechError, SpeechParams, Utterance,
};
use crate::translate::languages;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Stopping,
}

/// An active run through one text box's chunks. Generations make callbacks
/// from a replaced session inert.
struct PlaybackSession {
    target: SpeakTarget,
    utterances: Vec<Utterance>,
    cursor: usize,
    cancelled: bool,
    generation: u64,
}

struct ControllerInner {
    state: PlaybackState,
    session: Option<PlaybackSession>,
    next_generation: u64,
}

#[derive(Clone)]
pub struct SpeechService {
    engine: Arc<dyn SpeechEngine>,
    notifier: Arc<dyn PlaybackNotifier>,
    inner: Arc<Mutex<ControllerInner>>,
}

impl SpeechService {
    pub fn new(engine: Arc<dyn SpeechEngine>, notifier: Arc<dyn PlaybackNotifier>) -> Self {
        Self {
            engine,
            notifier,
            inner: Arc::new(Mutex::new(ControllerInner {
                state: PlaybackState::Idle,
                session: None,
                next_generation: 0,
            })),
        }
    }

    /// Start reading `text` aloud. Any session still playing — on either
    /// text box — is cancelled silently first: the platform queue is global.
    pub async fn start(
        &self,
        target: SpeakTarget,
        text: &str,
        lang: &str,
        params: &SpeechParams,
    ) -> Result<(), SpeechError> {
        if !self.engine.is_available() {
            return Err(SpeechError::UnsupportedCapability);
        }
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyInput);
        }

        let mut inner = self.inner.lock().await;

        // Stop-before-start: clear the engine queue before taking ownership.
        self.engine.cancel_all();
        if let Some(prev) = inner.session.as_mut() {
            prev.cancelled = true;
        }

        let utterances: Vec<Utterance> = chunker::split_into_chunks(text, params.max_chunk_len)
            .into_iter()
            .map(|chunk| Utterance {
                text: chunk,
                lang: (lang != languages::AUTO).then(|| lang.to_string()),
                rate: params.rate,
                pitch: params.pitch,
                volume: params.volume,
            })
            .collect();

        let Some(first) = utterances.first().cloned() else {
            return Err(SpeechError::EmptyInput);
        };

        inner.next_generation += 1;
        let generation = inner.next_generation;
        debug!(
            speak_target = ?target,
            generation,
            chunks = utterances.len(),
            "starting playback session"
        );
        inner.session = Some(PlaybackSession {
            target,
            utterances,
            cursor: 0,
            cancelled: false,
            generation,
        });
        inner.state = PlaybackState::Playing;

        if let Err(e) = self.engine.speak(generation, &first) {
            inner.state = PlaybackState::Idle;
            inner.session = None;
            return Err(e);
        }
        Ok(())
    }

    /// Explicit stop: cancel the session and clear the platform queue.
    /// Emits neither a finished nor a failed notification.
    pub async fn stop(&self) {
        let mut inner = self.inner.lock().await;
        if inner.state != PlaybackState::Playing {
            return;
        }
        inner.state = PlaybackState::Stopping;
        if let Some(session) = inner.session.as_mut() {
            session.cancelled = true;
            debug!(speak_target = ?session.target, generation = session.generation, "playback stopped");
        }
        self.engine.cancel_all();
        inner.session = None;
        inner.state = PlaybackState::Idle;
    }

    /// The engine finished one utterance naturally. Advance the cursor, or
    /// finish the session when the last chunk has been spoken.
    pub async fn on_utterance_end(&self, generation: u64) {
        let mut inner = self.inner.lock().await;
        let step = {
            let Some(session) = inner.session.as_mut() else {
                return;
            };
            if session.generation != generation || session.cancelled {
                return;
            }
            session.cursor += 1;
            if session.cursor >= session.utterances.len() {
                (session.target, None)
            } else {
                (session.target, Some(session.utterances[session.cursor].clone()))
            }
        };

        match step {
            (target, None) => {
                inner.state = PlaybackState::Idle;
                inner.session = None;
                drop(inner);
                debug!(speak_target = ?target, generation, "playback finished");
                self.notifier.finished(target);
            }
            (target, Some(next)) => {
                if let Err(e) = self.engine.speak(generation, &next) {
                    inner.state = PlaybackState::Idle;
                    inner.session = None;
                    drop(inner);
                    warn!(speak_target = ?target, generation, error = %e, "engine rejected utterance");
                    self.notifier.failed(target, &e.to_string());
                }
            }
        }
    }

    /// The engine reported an utterance error. Cancellation-attributed
    /// errors are suppressed; anything else halts playback and notifies.
    pub async fn on_utterance_error(&self, generation: u64, reason: &str) {
        let mut inner = self.inner.lock().await;
        let Some(session) = inner.session.as_ref() else {
            return;
        };
        if session.generation != generation {
            return;
        }
        let suppressed = session.cancelled || is_cancellation(reason);
        let target = session.target;
        inner.session = None;
        inner.state = PlaybackState::Idle;
        drop(inner);

        if suppressed {
            debug!(speak_target = ?target, generation, reason, "cancelled utterance, no signal");
            return;
        }
        warn!(speak_target = ?target, generation, reason, "playback failed");
        self.notifier.failed(target, reason);
    }

    pub async fn state(&self) -> PlaybackState {
        self.inner.lock().await.state
    }
}

/// Reasons the Web Speech API uses for user-initiated cancellation.
fn is_cancellation(reason: &str) -> bool {
    matches!(reason, "canceled" | "interrupted")
}
