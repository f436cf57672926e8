//! Save location configuration
//!
//! The key and file name are fixed per application. Changing either one
//! silently orphans earlier saves.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where saves live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// LocalStorage key (browser mode)
    pub storage_key: String,
    /// Save file name (desktop mode)
    pub file_name: String,
    /// Directory holding the save file. `None` means the executable's
    /// directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            file_name: Self::DEFAULT_FILE_NAME.to_string(),
            base_dir: None,
        }
    }
}

impl SaveConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "save_bridge_save_data";
    pub const DEFAULT_FILE_NAME: &'static str = "savegame.dat";

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Directory the save file goes in: the configured one, else the
    /// executable's directory, else the working directory.
    pub fn resolve_base_dir(&self) -> PathBuf {
        if let Some(dir) = &self.base_dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Full path of the desktop save file
    pub fn save_path(&self) -> PathBuf {
        self.resolve_base_dir().join(&self.file_name)
    }
}
