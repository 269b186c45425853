//! Translation workbench state — the language pair and both text boxes.
//!
//! All four fields live behind one lock so the swap is atomic: both
//! languages and both texts change together, or nothing does. Sequential
//! per-field updates can interleave with a concurrent translate and end up
//! half-swapped.

use crate::translate::languages;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Error)]
pub enum WorkbenchError {
    #[error("Cannot swap languages while the source language is auto-detect")]
    SwapWithAutoSource,
}

impl From<WorkbenchError> for String {
    fn from(e: WorkbenchError) -> String {
        e.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbench {
    pub source_lang: String,
    pub target_lang: String,
    pub source_text: String,
    pub translated_text: String,
}

impl Default for Workbench {
    fn default() -> Self {
        Self {
            source_lang: languages::AUTO.to_string(),
            target_lang: "en".to_string(),
            source_text: String::new(),
            translated_text: String::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct WorkbenchService {
    inner: Arc<Mutex<Workbench>>,
}

impl WorkbenchService {
    pub async fn snapshot(&self) -> Workbench {
        self.inner.lock().await.clone()
    }

    pub async fn set_source_text(&self, text: String) {
        self.inner.lock().await.source_text = text;
    }

    pub async fn set_languages(&self, source_lang: String, target_lang: String) {
        let mut workbench = self.inner.lock().await;
        workbench.source_lang = source_lang;
        workbench.target_lang = target_lang;
    }

    /// Record a completed translation in one update.
    pub async fn record_translation(
        &self,
        source_text: String,
        source_lang: String,
        target_lang: String,
        translated_text: String,
    ) {
        let mut workbench = self.inner.lock().await;
        workbench.source_text = source_text;
        workbench.source_lang = source_lang;
        workbench.target_lang = target_lang;
        workbench.translated_text = translated_text;
    }

    /// Swap languages and texts atomically. Rejected while the source
    /// language is the auto-detect sentinel — there is nothing to swap to.
    pub async fn swap(&self) -> Result<Workbench, WorkbenchError> {
        let mut workbench = self.inner.lock().await;
        if workbench.source_lang == languages::AUTO {
            return Err(WorkbenchError::SwapWithAutoSource);
        }
        let workbench = &mut *workbench;
        std::mem::swap(&mut workbench.source_lang, &mut workbench.target_lang);
        std::mem::swap(&mut workbench.source_text, &mut workbench.translated_text);
        Ok(workbench.clone())
    }
}
