//! Tauri commands for speech playback.
//!
//! `speak`/`stop_speaking` drive the controller; `utterance_ended` and
//! `utterance_failed` are the frontend's speech-synthesis callbacks routed
//! back into it.

use crate::settings::SettingsService;
use crate::speech::{FrontendSpeechEngine, SpeakTarget, SpeechService};
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub async fn speak(
    settings: State<'_, SettingsService>,
    speech: State<'_, SpeechService>,
    target: SpeakTarget,
    text: String,
    lang: String,
) -> Result<(), String> {
    let params = settings.current().await.speech;
    speech
        .start(target, &text, &lang, &params)
        .await
        .map_err(Into::into)
}

#[tauri::command]
pub async fn stop_speaking(speech: State<'_, SpeechService>) -> Result<(), String> {
    speech.stop().await;
    Ok(())
}

#[tauri::command]
pub async fn utterance_ended(
    speech: State<'_, SpeechService>,
    generation: u64,
) -> Result<(), String> {
    speech.on_utterance_end(generation).await;
    Ok(())
}

#[tauri::command]
pub async fn utterance_failed(
    speech: State<'_, SpeechService>,
    generation: u64,
    reason: String,
) -> Result<(), String> {
    speech.on_utterance_error(generation, &reason).await;
    Ok(())
}

/// The frontend's capability probe: the backend cannot inspect the WebView,
/// so the frontend reports once at startup whether `speechSynthesis` exists.
#[tauri::command]
pub fn speech_available(engine: State<'_, Arc<FrontendSpeechEngine>>, available: bool) {
    engine.set_available(available);
}
