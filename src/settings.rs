//! Application settings — persisted to `settings.json` in the app data dir.
//!
//! Holds the user's API credential (or the environment variable to read it
//! from), the light/dark theme flag, the completion endpoint, and the
//! speech-synthesis parameters.

use crate::config;
use crate::speech::SpeechParams;
use crate::translate::openrouter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Credential for the remote translation endpoint. Kept client-side only.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub speech: SpeechParams,
}

fn default_api_key_env() -> Option<String> {
    Some("OPENROUTER_API_KEY".to_string())
}

fn default_base_url() -> String {
    openrouter::DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    openrouter::DEFAULT_MODEL.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            theme: Theme::default(),
            api_base_url: default_base_url(),
            model: default_model(),
            speech: SpeechParams::default(),
        }
    }
}

impl AppSettings {
    pub fn resolve_api_key(&self) -> Option<String> {
        config::resolve_api_key(&self.api_key, &self.api_key_env)
    }
}

pub fn load(path: &Path) -> AppSettings {
    config::load_json_config(path, "Settings")
}

pub fn save(path: &Path, settings: &AppSettings) -> Result<(), String> {
    config::save_json_config(path, settings, "Settings")
}

/// Default on-disk location, inside the per-app data directory.
pub fn settings_path() -> PathBuf {
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("com.fluentflow.app")
        .join("settings.json")
}

// ── Managed State ──────────────────────────────────────

/// Managed state holding the current settings. Updates persist to disk
/// first, then swap the in-memory copy.
#[derive(Clone)]
pub struct SettingsService {
    settings: Arc<RwLock<AppSettings>>,
    path: PathBuf,
}

impl SettingsService {
    pub fn new(settings: AppSettings, path: PathBuf) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            path,
        }
    }

    pub fn from_path(path: PathBuf) -> Self {
        let settings = load(&path);
        Self::new(settings, path)
    }

    pub async fn current(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    pub async fn update(&self, new_settings: AppSettings) -> Result<(), String> {
        save(&self.path, &new_settings)?;
        *self.settings.write().await = new_settings;
        Ok(())
    }
}
