//! Tauri commands for settings management.

use crate::settings::{AppSettings, SettingsService};
use crate::translate::{OpenRouterClient, TranslationService};
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub async fn get_settings(state: State<'_, SettingsService>) -> Result<AppSettings, String> {
    Ok(state.current().await)
}

/// Persist new settings and hot-swap the completion backend — the endpoint
/// or model may have changed.
#[tauri::command]
pub async fn save_settings(
    settings: AppSettings,
    state: State<'_, SettingsService>,
    translation: State<'_, TranslationService>,
) -> Result<(), String> {
    state.update(settings.clone()).await?;
    translation
        .set_backend(Arc::new(OpenRouterClient::new(
            Some(settings.api_base_url),
            Some(settings.model),
        )))
        .await;
    Ok(())
}
