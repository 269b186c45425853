//! Tauri commands for the translation flow and the workbench.

use crate::settings::SettingsService;
use crate::translate::languages::{self, LanguageInfo};
use crate::translate::{TranslationRequest, TranslationResult, TranslationService};
use crate::workbench::{Workbench, WorkbenchService};
use tauri::State;

#[tauri::command]
pub async fn translate(
    settings: State<'_, SettingsService>,
    service: State<'_, TranslationService>,
    workbench: State<'_, WorkbenchService>,
    text: String,
    source_lang: String,
    target_lang: String,
) -> Result<TranslationResult, String> {
    let credential = settings.current().await.resolve_api_key();
    let request = TranslationRequest {
        text: text.clone(),
        source_lang: source_lang.clone(),
        target_lang: target_lang.clone(),
        credential,
    };

    let result = service.translate(&request).await?;
    workbench
        .record_translation(
            text,
            source_lang,
            target_lang,
            result.translated_text.clone(),
        )
        .await;
    Ok(result)
}

#[tauri::command]
pub async fn get_workbench(workbench: State<'_, WorkbenchService>) -> Result<Workbench, String> {
    Ok(workbench.snapshot().await)
}

#[tauri::command]
pub async fn set_workbench_text(
    workbench: State<'_, WorkbenchService>,
    source_text: String,
) -> Result<(), String> {
    workbench.set_source_text(source_text).await;
    Ok(())
}

#[tauri::command]
pub async fn set_workbench_languages(
    workbench: State<'_, WorkbenchService>,
    source_lang: String,
    target_lang: String,
) -> Result<(), String> {
    workbench.set_languages(source_lang, target_lang).await;
    Ok(())
}

/// Atomic swap of the language pair and both text boxes.
#[tauri::command]
pub async fn swap_languages(workbench: State<'_, WorkbenchService>) -> Result<Workbench, String> {
    workbench.swap().await.map_err(Into::into)
}

#[tauri::command]
pub fn list_languages() -> Vec<LanguageInfo> {
    languages::all()
}
