use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error Types ────────────────────────────────────────

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum SpeechError {
    #[error("Speech synthesis is not available on this platform")]
    UnsupportedCapability,
    #[error("Nothing to speak: input text is blank")]
    EmptyInput,
    #[error("Speech playback failed: {0}")]
    Playback(String),
}

// For Tauri command return compatibility
impl From<SpeechError> for String {
    fn from(e: SpeechError) -> String {
        e.to_string()
    }
}

// ── Targets & Utterances ───────────────────────────────

/// Which text box a playback session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakTarget {
    Source,
    Translation,
}

/// One speakable chunk plus the parameters the platform engine needs.
/// Immutable once built; a session owns its utterances until it ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    /// BCP-47 tag; `None` leaves the engine's default voice in charge.
    pub lang: Option<String>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Session-wide synthesis parameters, persisted with the app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechParams {
    #[serde(default = "default_rate")]
    pub rate: f32,
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Upper bound on utterance length, in characters.
    #[serde(default = "default_max_chunk_len")]
    pub max_chunk_len: usize,
}

fn default_rate() -> f32 {
    0.8
}
fn default_pitch() -> f32 {
    1.0
}
fn default_volume() -> f32 {
    1.0
}
fn default_max_chunk_len() -> usize {
    super::chunker::DEFAULT_MAX_CHUNK_LEN
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
            max_chunk_len: default_max_chunk_len(),
        }
    }
}

// ── Collaborator Traits ────────────────────────────────

/// The platform speech capability. One global utterance queue: whoever
/// speaks owns the whole engine, so callers clear it (`cancel_all`) before
/// starting. Completion and errors are reported back asynchronously through
/// the controller's callbacks, tagged with the session generation.
pub trait SpeechEngine: Send + Sync {
    fn is_available(&self) -> bool;

    /// Hand one utterance to the platform queue.
    fn speak(&self, generation: u64, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Clear the platform queue, stopping any in-flight utterance.
    fn cancel_all(&self);
}

/// Receives terminal session notifications. Explicit stops emit neither.
pub trait PlaybackNotifier: Send + Sync {
    fn finished(&self, target: SpeakTarget);
    fn failed(&self, target: SpeakTarget, reason: &str);
}
