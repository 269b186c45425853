use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error Types ────────────────────────────────────────

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum TranslateError {
    #[error("Nothing to translate: input text is blank")]
    EmptyInput,
    #[error("Translation API error: {0}")]
    Api(String),
    #[error("Translation request failed: {0}")]
    Transport(String),
}

// For Tauri command return compatibility
impl From<TranslateError> for String {
    fn from(e: TranslateError) -> String {
        e.to_string()
    }
}

// ── Request / Result ───────────────────────────────────

/// One translation request. Stateless — nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    /// Source tag, or [`crate::translate::languages::AUTO`].
    pub source_lang: String,
    pub target_lang: String,
    /// Bearer credential for the remote endpoint. Absent or empty → mock path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

/// Which path produced the result — the UI words its toast differently
/// for mock translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationPath {
    Remote,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub via: TranslationPath,
}

// ── Backend Trait ──────────────────────────────────────

/// A chat-completion endpoint able to execute a translation instruction.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Submit a single user-role instruction and return the first choice's
    /// text content, cleaned of any boilerplate the model wrapped around it.
    async fn complete(&self, credential: &str, instruction: &str)
        -> Result<String, TranslateError>;

    /// Backend identifier (e.g. "openrouter").
    fn id(&self) -> &str;
}
