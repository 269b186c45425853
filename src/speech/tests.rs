//! Playback controller tests with scripted engine and notifier doubles.
//!
//! The engine double records what is spoken and lets the test drive the
//! utterance-boundary callbacks by hand, so session sequencing, cancellation
//! and error suppression are all observable without a real platform engine.

use super::controller::{PlaybackState, SpeechService};
use super::interface::{
    PlaybackNotifier, SpeakTarget, SpeechEngine, SpeechError, SpeechParams, Utterance,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ── Doubles ────────────────────────────────────────────────

struct ScriptedEngine {
    available: AtomicBool,
    fail_speak: AtomicBool,
    spoken: Mutex<Vec<(u64, Utterance)>>,
    cancels: AtomicUsize,
}

impl ScriptedEngine {
    fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            fail_speak: AtomicBool::new(false),
            spoken: Mutex::new(Vec::new()),
            cancels: AtomicUsize::new(0),
        }
    }

    fn spoken(&self) -> Vec<(u64, Utterance)> {
        self.spoken.lock().unwrap().clone()
    }

    fn last_generation(&self) -> u64 {
        self.spoken.lock().unwrap().last().expect("nothing spoken").0
    }

    fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl SpeechEngine for ScriptedEngine {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn speak(&self, generation: u64, utterance: &Utterance) -> Result<(), SpeechError> {
        if self.fail_speak.load(Ordering::SeqCst) {
            return Err(SpeechError::Playback("engine rejected utterance".into()));
        }
        self.spoken
            .lock()
            .unwrap()
            .push((generation, utterance.clone()));
        Ok(())
    }

    fn cancel_all(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    finished: Mutex<Vec<SpeakTarget>>,
    failed: Mutex<Vec<(SpeakTarget, String)>>,
}

impl RecordingNotifier {
    fn finished(&self) -> Vec<SpeakTarget> {
        self.finished.lock().unwrap().clone()
    }

    fn failed(&self) -> Vec<(SpeakTarget, String)> {
        self.failed.lock().unwrap().clone()
    }
}

impl PlaybackNotifier for RecordingNotifier {
    fn finished(&self, target: SpeakTarget) {
        self.finished.lock().unwrap().push(target);
    }

    fn failed(&self, target: SpeakTarget, reason: &str) {
        self.failed
            .lock()
            .unwrap()
            .push((target, reason.to_string()));
    }
}

fn service() -> (SpeechService, Arc<ScriptedEngine>, Arc<RecordingNotifier>) {
    let engine = Arc::new(ScriptedEngine::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let service = SpeechService::new(engine.clone(), notifier.clone());
    (service, engine, notifier)
}

fn params_with_max(max_chunk_len: usize) -> SpeechParams {
    SpeechParams {
        max_chunk_len,
        ..SpeechParams::default()
    }
}

const TWO_SENTENCES: &str = "First sentence here. Second sentence here.";

// ── Preconditions ──────────────────────────────────────────

#[tokio::test]
async fn blank_text_is_rejected() {
    let (service, engine, _) = service();
    let result = service
        .start(SpeakTarget::Source, "   \n ", "en", &SpeechParams::default())
        .await;
    assert!(matches!(result, Err(SpeechError::EmptyInput)));
    assert_eq!(service.state().await, PlaybackState::Idle);
    assert!(engine.spoken().is_empty());
}

#[tokio::test]
async fn unavailable_engine_is_rejected() {
    let (service, engine, _) = service();
    engine.available.store(false, Ordering::SeqCst);
    let result = service
        .start(SpeakTarget::Source, "hello", "en", &SpeechParams::default())
        .await;
    assert!(matches!(result, Err(SpeechError::UnsupportedCapability)));
    assert_eq!(service.state().await, PlaybackState::Idle);
}

// ── Sequential playback ────────────────────────────────────

#[tokio::test]
async fn plays_chunks_in_order_and_signals_finished() {
    let (service, engine, notifier) = service();
    service
        .start(SpeakTarget::Translation, TWO_SENTENCES, "en", &params_with_max(25))
        .await
        .unwrap();

    // Only the first chunk is in flight until the engine reports back.
    assert_eq!(engine.spoken().len(), 1);
    assert_eq!(service.state().await, PlaybackState::Playing);
    let generation = engine.last_generation();

    service.on_utterance_end(generation).await;
    let spoken = engine.spoken();
    assert_eq!(spoken.len(), 2);
    assert_eq!(spoken[0].1.text, "First sentence here.");
    assert_eq!(spoken[1].1.text, " Second sentence here.");

    service.on_utterance_end(generation).await;
    assert_eq!(service.state().await, PlaybackState::Idle);
    assert_eq!(notifier.finished(), vec![SpeakTarget::Translation]);
    assert!(notifier.failed().is_empty());
}

#[tokio::test]
async fn start_clears_the_platform_queue_first() {
    let (service, engine, _) = service();
    service
        .start(SpeakTarget::Source, "hello", "en", &SpeechParams::default())
        .await
        .unwrap();
    assert_eq!(engine.cancel_count(), 1);
}

#[tokio::test]
async fn language_tag_is_omitted_for_auto() {
    let (service, engine, _) = service();
    service
        .start(SpeakTarget::Source, "hello", "auto", &SpeechParams::default())
        .await
        .unwrap();
    assert_eq!(engine.spoken()[0].1.lang, None);

    service
        .start(SpeakTarget::Source, "hola", "es", &SpeechParams::default())
        .await
        .unwrap();
    assert_eq!(engine.spoken()[1].1.lang.as_deref(), Some("es"));
}

// ── Session replacement ────────────────────────────────────

#[tokio::test]
async fn restart_while_playing_replaces_the_session_silently() {
    let (service, engine, notifier) = service();
    service
        .start(SpeakTarget::Source, TWO_SENTENCES, "en", &params_with_max(25))
        .await
        .unwrap();
    let old_generation = engine.last_generation();

    service
        .start(SpeakTarget::Translation, "New text.", "en", &SpeechParams::default())
        .await
        .unwrap();
    let new_generation = engine.last_generation();
    assert_ne!(old_generation, new_generation);
    assert_eq!(engine.cancel_count(), 2);

    // A late callback from the replaced session is inert.
    service.on_utterance_end(old_generation).await;
    assert_eq!(engine.spoken().len(), 2);
    assert!(notifier.finished().is_empty());

    // The new session still runs to completion, with exactly one signal.
    service.on_utterance_end(new_generation).await;
    assert_eq!(notifier.finished(), vec![SpeakTarget::Translation]);
    assert!(notifier.failed().is_empty());
}

// ── Stop ───────────────────────────────────────────────────

#[tokio::test]
async fn stop_emits_no_signals() {
    let (service, engine, notifier) = service();
    service
        .start(SpeakTarget::Source, TWO_SENTENCES, "en", &params_with_max(25))
        .await
        .unwrap();
    let generation = engine.last_generation();

    service.stop().await;
    assert_eq!(service.state().await, PlaybackState::Idle);
    assert_eq!(engine.cancel_count(), 2);
    assert!(notifier.finished().is_empty());
    assert!(notifier.failed().is_empty());

    // The stopped utterance's boundary callbacks are inert too.
    service.on_utterance_end(generation).await;
    service.on_utterance_error(generation, "canceled").await;
    assert_eq!(engine.spoken().len(), 1);
    assert!(notifier.finished().is_empty());
    assert!(notifier.failed().is_empty());
}

#[tokio::test]
async fn stop_while_idle_is_a_no_op() {
    let (service, engine, _) = service();
    service.stop().await;
    assert_eq!(service.state().await, PlaybackState::Idle);
    assert_eq!(engine.cancel_count(), 0);
}

// ── Errors ─────────────────────────────────────────────────

#[tokio::test]
async fn utterance_error_halts_playback_and_signals_failed() {
    let (service, engine, notifier) = service();
    service
        .start(SpeakTarget::Translation, TWO_SENTENCES, "en", &params_with_max(25))
        .await
        .unwrap();
    let generation = engine.last_generation();

    service
        .on_utterance_error(generation, "synthesis-unavailable")
        .await;
    assert_eq!(service.state().await, PlaybackState::Idle);
    assert_eq!(
        notifier.failed(),
        vec![(SpeakTarget::Translation, "synthesis-unavailable".to_string())]
    );
    assert!(notifier.finished().is_empty());

    // Playback halted: no further chunks go to the engine.
    service.on_utterance_end(generation).await;
    assert_eq!(engine.spoken().len(), 1);
}

#[tokio::test]
async fn cancellation_errors_are_suppressed() {
    let (service, engine, notifier) = service();
    service
        .start(SpeakTarget::Source, "hello", "en", &SpeechParams::default())
        .await
        .unwrap();
    let generation = engine.last_generation();

    service.on_utterance_error(generation, "canceled").await;
    assert_eq!(service.state().await, PlaybackState::Idle);
    assert!(notifier.failed().is_empty());
    assert!(notifier.finished().is_empty());
}

#[tokio::test]
async fn engine_failure_mid_session_signals_failed() {
    let (service, engine, notifier) = service();
    service
        .start(SpeakTarget::Source, TWO_SENTENCES, "en", &params_with_max(25))
        .await
        .unwrap();
    let generation = engine.last_generation();

    engine.fail_speak.store(true, Ordering::SeqCst);
    service.on_utterance_end(generation).await;

    assert_eq!(service.state().await, PlaybackState::Idle);
    assert_eq!(notifier.failed().len(), 1);
    assert!(notifier.finished().is_empty());
}
