pub mod commands;
pub mod config;
pub mod settings;
pub mod speech;
pub mod translate;
pub mod utils;
pub mod workbench;

use crate::settings::SettingsService;
use crate::speech::{FrontendNotifier, FrontendSpeechEngine, SpeechService};
use crate::translate::{OpenRouterClient, TranslationService};
use crate::workbench::WorkbenchService;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fluentflow=info".into()),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            commands::translate::translate,
            commands::translate::get_workbench,
            commands::translate::set_workbench_text,
            commands::translate::set_workbench_languages,
            commands::translate::swap_languages,
            commands::translate::list_languages,
            commands::speech::speak,
            commands::speech::stop_speaking,
            commands::speech::utterance_ended,
            commands::speech::utterance_failed,
            commands::speech::speech_available,
            commands::settings::get_settings,
            commands::settings::save_settings,
        ])
        .setup(|app| {
            let settings_path = settings::settings_path();
            let loaded = settings::load(&settings_path);

            let translation = TranslationService::with_backend(Arc::new(OpenRouterClient::new(
                Some(loaded.api_base_url.clone()),
                Some(loaded.model.clone()),
            )));

            let engine = Arc::new(FrontendSpeechEngine::new(app.handle().clone()));
            let notifier = Arc::new(FrontendNotifier::new(app.handle().clone()));
            let speech = SpeechService::new(engine.clone(), notifier);

            app.manage(SettingsService::new(loaded, settings_path));
            app.manage(translation);
            app.manage(WorkbenchService::default());
            app.manage(engine);
            app.manage(speech);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
