//! Translation service — managed state driving the request flow.
//!
//! One rule the UI relies on: the remote path never surfaces a transport
//! error. Whatever goes wrong on the wire, the caller gets a mock result
//! and the failure is only logged.

use super::interface::{
    CompletionBackend, TranslateError, TranslationPath, TranslationRequest, TranslationResult,
};
use super::languages;
use super::mock;
use super::openrouter::OpenRouterClient;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct TranslationService {
    backend: Arc<RwLock<Arc<dyn CompletionBackend>>>,
}

impl TranslationService {
    pub fn new() -> Self {
        Self::with_backend(Arc::new(OpenRouterClient::new(None, None)))
    }

    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend: Arc::new(RwLock::new(backend)),
        }
    }

    /// Hot-swap the completion backend (endpoint or model changed in settings).
    pub async fn set_backend(&self, backend: Arc<dyn CompletionBackend>) {
        *self.backend.write().await = backend;
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        if request.text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let credential = request
            .credential
            .as_deref()
            .filter(|key| !key.is_empty());

        let Some(credential) = credential else {
            debug!(
                target_lang = %request.target_lang,
                "no API credential configured, using mock translation"
            );
            return Ok(self.mock_result(request).await);
        };

        let instruction =
            build_instruction(&request.text, &request.source_lang, &request.target_lang);
        let backend = self.backend.read().await.clone();

        match backend.complete(credential, &instruction).await {
            Ok(translated) if !translated.is_empty() => Ok(TranslationResult {
                translated_text: translated,
                via: TranslationPath::Remote,
            }),
            Ok(_) => {
                // Model replied with nothing usable — echo the input.
                Ok(TranslationResult {
                    translated_text: request.text.clone(),
                    via: TranslationPath::Remote,
                })
            }
            Err(e) => {
                warn!(
                    backend = backend.id(),
                    error = %e,
                    "remote translation failed, falling back to mock"
                );
                Ok(self.mock_result(request).await)
            }
        }
    }

    async fn mock_result(&self, request: &TranslationRequest) -> TranslationResult {
        let translated =
            mock::translate(&request.text, &request.source_lang, &request.target_lang).await;
        TranslationResult {
            translated_text: translated,
            via: TranslationPath::Mock,
        }
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the natural-language instruction sent to the completion endpoint.
pub(crate) fn build_instruction(text: &str, source_lang: &str, target_lang: &str) -> String {
    let target = languages::display_name(target_lang);
    if source_lang == languages::AUTO {
        format!(
            "Translate the following text to {}. Only return the translated text, nothing else:\n\n{}",
            target, text
        )
    } else {
        format!(
            "Translate the following text from {} to {}. Only return the translated text, nothing else:\n\n{}",
            languages::display_name(source_lang),
            target,
            text
        )
    }
}
