use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Path to the JSON capture library; defaults next to the config file
    pub library: Option<PathBuf>,
    /// Items revealed per page in `list`; defaults to the engine's page size
    pub page_size: Option<usize>,
}

pub fn config_dir() -> PathBuf {
    if let Some(bd) = directories::BaseDirs::new() {
        bd.config_dir().join("snipstash")
    } else {
        PathBuf::from("./.config/snipstash")
    }
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

pub fn default_library_path() -> PathBuf {
    config_dir().join("library.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if let Ok(s) = std::fs::read_to_string(&path) {
        toml::from_str(&s).unwrap_or_default()
    } else {
        Settings::default()
    }
}
