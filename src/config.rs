use serde::{Deserialize, Serialize};
use tauri_plugin_store::StoreExt;

/// User-tunable settings, persisted through the store plugin.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub show_notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_notifications: true,
        }
    }
}

impl AppConfig {
    /// Load from config.json, falling back to defaults for missing keys.
    pub fn load(app: &tauri::AppHandle) -> Self {
        let store = match app.store("config.json") {
            Ok(s) => s,
            Err(_) => return Self::default(),
        };
        let show_notifications = store
            .get("show_notifications")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        Self { show_notifications }
    }

    pub fn save(&self, app: &tauri::AppHandle) -> Result<(), String> {
        let store = app.store("config.json").map_err(|e| e.to_string())?;
        store.set(
            "show_notifications",
            serde_json::json!(self.show_notifications),
        );
        store.save().map_err(|e| e.to_string())
    }
}
