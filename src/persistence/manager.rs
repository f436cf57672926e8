//! Save manager
//!
//! Binds one storage backend at construction and runs the codec around it.
//! Calls are synchronous and assume one caller at a time (the host's update
//! loop); nothing here locks.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::codec::{self, SaveDocument};
use super::error::{CodecError, SaveError, StorageError};
use crate::config::SaveConfig;
use crate::platform::{RuntimeMode, StorageBackend, bind_backend, detect_runtime_mode};

/// Outcome of a save attempt
pub type SaveResult = Result<(), SaveError>;

/// What a load found, with the reason when nothing usable came back
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(SaveDocument),
    /// Nothing was ever saved (or the save was cleared)
    Absent,
    /// Something is stored but it does not decode
    Corrupt(CodecError),
    /// The medium could not be read
    ReadFailed(StorageError),
}

impl LoadOutcome {
    /// Collapse to the caller-facing view: corrupt or unreadable saves look
    /// the same as no save.
    pub fn into_document(self) -> Option<SaveDocument> {
        match self {
            LoadOutcome::Loaded(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Persists one save document per application
pub struct SaveManager {
    mode: RuntimeMode,
    key: String,
    backend: Box<dyn StorageBackend>,
}

impl SaveManager {
    /// Detect the runtime mode and bind with the default config.
    pub fn new() -> Self {
        Self::with_config(SaveConfig::default())
    }

    /// Detect the runtime mode and bind with `config`.
    pub fn with_config(config: SaveConfig) -> Self {
        Self::bind(detect_runtime_mode(), config)
    }

    /// Bind the backend for an already-detected mode.
    pub fn bind(mode: RuntimeMode, config: SaveConfig) -> Self {
        let backend = bind_backend(mode, &config);
        Self::with_backend(mode, config.storage_key, backend)
    }

    /// Use a caller-supplied backend.
    pub fn with_backend(
        mode: RuntimeMode,
        key: impl Into<String>,
        backend: Box<dyn StorageBackend>,
    ) -> Self {
        let key = key.into();
        log::info!(
            "Save manager bound ({} mode, key '{}', {})",
            mode,
            key,
            backend.describe()
        );
        Self { mode, key, backend }
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Encode and store `doc`, replacing the previous save.
    pub fn save(&mut self, doc: &SaveDocument) -> SaveResult {
        let result = self.try_save(doc);
        match &result {
            Ok(()) => log::info!("Game data saved to {}", self.backend.describe()),
            Err(e) => log::warn!("Save failed: {}", e),
        }
        result
    }

    /// Save any value that serializes to a JSON mapping.
    pub fn save_as<T: Serialize + ?Sized>(&mut self, value: &T) -> SaveResult {
        match codec::encode_value(value) {
            Ok(doc) => self.save(&doc),
            Err(e) => {
                log::warn!("Save failed: {}", e);
                Err(e.into())
            }
        }
    }

    fn try_save(&mut self, doc: &SaveDocument) -> SaveResult {
        let text = codec::encode_transport(doc)?;
        let blob = codec::encode_storage(&text);
        log::debug!("Encoded save: {} bytes JSON, {} bytes stored", text.len(), blob.len());
        self.backend.write(&self.key, &blob)?;
        Ok(())
    }

    /// Load the saved document. Missing, corrupt and unreadable saves all
    /// return `None`; use [`SaveManager::load_detailed`] to tell them apart.
    pub fn load(&self) -> Option<SaveDocument> {
        self.load_detailed().into_document()
    }

    /// Load and convert into `T`. A document that does not fit `T` counts
    /// as corrupt.
    pub fn load_as<T: DeserializeOwned>(&self) -> Option<T> {
        let doc = self.load()?;
        match codec::decode_value(doc) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Discarding save that does not match the expected shape: {}", e);
                None
            }
        }
    }

    /// Load, keeping the reason when nothing usable is found.
    pub fn load_detailed(&self) -> LoadOutcome {
        let outcome = self.try_load();
        match &outcome {
            LoadOutcome::Loaded(_) => {
                log::info!("Game data loaded from {}", self.backend.describe())
            }
            LoadOutcome::Absent => {
                log::info!("No game data found in {}", self.backend.describe())
            }
            LoadOutcome::Corrupt(e) => log::warn!("Ignoring corrupt save data: {}", e),
            LoadOutcome::ReadFailed(e) => log::warn!("Could not read save data: {}", e),
        }
        outcome
    }

    fn try_load(&self) -> LoadOutcome {
        let blob = match self.backend.read(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return LoadOutcome::Absent,
            Err(e) => return LoadOutcome::ReadFailed(e),
        };
        let text = match codec::try_decode_storage(&blob) {
            Ok(text) => text,
            Err(e) => return LoadOutcome::Corrupt(e),
        };
        if text.is_empty() {
            return LoadOutcome::Absent;
        }
        match codec::decode_transport(&text) {
            Ok(doc) => LoadOutcome::Loaded(doc),
            Err(e) => LoadOutcome::Corrupt(e),
        }
    }

    /// Delete the stored save.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.backend.remove(&self.key)?;
        log::info!("Save data cleared from {}", self.backend.describe());
        Ok(())
    }
}

impl Default for SaveManager {
    fn default() -> Self {
        Self::new()
    }
}
