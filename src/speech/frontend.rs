//! Event-bridged speech collaborators.
//!
//! The Rust backend cannot call Web APIs, and `window.speechSynthesis` lives
//! in the WebView — so utterances and cancellations are forwarded to the
//! frontend as events, and the frontend reports each utterance's completion
//! or error back through the `utterance_ended` / `utterance_failed` commands.

use super::interface::{PlaybackNotifier, SpeakTarget, SpeechEngine, SpeechError, Utterance};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::{AppHandle, Emitter};
use tracing::warn;

// ── Event Payloads ─────────────────────────────────────

#[derive(Clone, Serialize)]
struct UtteranceEvent {
    generation: u64,
    text: String,
    lang: Option<String>,
    rate: f32,
    pitch: f32,
    volume: f32,
}

#[derive(Clone, Serialize)]
struct PlaybackFinishedEvent {
    target: SpeakTarget,
}

#[derive(Clone, Serialize)]
struct PlaybackFailedEvent {
    target: SpeakTarget,
    reason: String,
}

// ── Engine ─────────────────────────────────────────────

pub struct FrontendSpeechEngine {
    app: AppHandle,
    available: AtomicBool,
}

impl FrontendSpeechEngine {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            // A WebView context normally has speechSynthesis; the frontend
            // corrects this via the `speech_available` command at startup.
            available: AtomicBool::new(true),
        }
    }

    /// Recorded from the frontend's capability probe.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }
}

impl SpeechEngine for FrontendSpeechEngine {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    fn speak(&self, generation: u64, utterance: &Utterance) -> Result<(), SpeechError> {
        self.app
            .emit(
                "speech:utterance",
                UtteranceEvent {
                    generation,
                    text: utterance.text.clone(),
                    lang: utterance.lang.clone(),
                    rate: utterance.rate,
                    pitch: utterance.pitch,
                    volume: utterance.volume,
                },
            )
            .map_err(|e| SpeechError::Playback(e.to_string()))
    }

    fn cancel_all(&self) {
        if let Err(e) = self.app.emit("speech:cancel", ()) {
            warn!(error = %e, "failed to emit speech:cancel");
        }
    }
}

// ── Notifier ───────────────────────────────────────────

pub struct FrontendNotifier {
    app: AppHandle,
}

impl FrontendNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl PlaybackNotifier for FrontendNotifier {
    fn finished(&self, target: SpeakTarget) {
        if let Err(e) = self.app.emit("speech:finished", PlaybackFinishedEvent { target }) {
            warn!(error = %e, "failed to emit speech:finished");
        }
    }

    fn failed(&self, target: SpeakTarget, reason: &str) {
        if let Err(e) = self.app.emit(
            "speech:failed",
            PlaybackFailedEvent {
                target,
                reason: reason.to_string(),
            },
        ) {
            warn!(error = %e, "failed to emit speech:failed");
        }
    }
}
