//! Storage backends
//!
//! Backends move opaque blob strings in and out of one medium. They never
//! look inside the blob; encoding is the codec's job.

use std::path::{Path, PathBuf};

use super::RuntimeMode;
use crate::config::SaveConfig;
use crate::persistence::StorageError;

/// Key/value string storage for one medium
pub trait StorageBackend {
    /// Store `blob` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;

    /// Fetch the blob under `key`. `Ok(None)` means it was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Drop the blob under `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Pick the backend for a runtime mode. This is the only place the mode is
/// branched on.
pub fn bind_backend(mode: RuntimeMode, config: &SaveConfig) -> Box<dyn StorageBackend> {
    match mode {
        RuntimeMode::Browser => Box::new(BrowserBackend::new()),
        RuntimeMode::Desktop => Box::new(DesktopBackend::new(config.save_path())),
    }
}

/// Origin-scoped LocalStorage
#[derive(Debug, Default)]
pub struct BrowserBackend {
    /// In-process stand-in for LocalStorage on native targets
    #[cfg(not(target_arch = "wasm32"))]
    entries: std::collections::HashMap<String, String>,
}

impl BrowserBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_arch = "wasm32")]
impl BrowserBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserBackend {
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, blob)
            .map_err(|e| StorageError::write(key, format!("{:?}", e)))
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::read(key, format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::write(key, format!("{:?}", e)))
    }

    fn describe(&self) -> String {
        "LocalStorage".to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for BrowserBackend {
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn describe(&self) -> String {
        "LocalStorage (in-memory)".to_string()
    }
}

/// A single save file, rewritten whole on every save
#[derive(Debug, Clone)]
pub struct DesktopBackend {
    path: PathBuf,
}

impl DesktopBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for DesktopBackend {
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        log::debug!("Writing '{}' to {}", key, self.path.display());
        std::fs::write(&self.path, blob.as_bytes())
            .map_err(|e| StorageError::write(self.path.display().to_string(), e))
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        log::debug!("Reading '{}' from {}", key, self.path.display());
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::read(self.path.display().to_string(), e)),
        };
        // Non-UTF-8 content can only be damage; let the codec reject it
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::write(self.path.display().to_string(), e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
