//! Save Bridge - one save/load API for browser and desktop builds
//!
//! Core modules:
//! - `persistence`: Codec (JSON + base64) and the `SaveManager`
//! - `platform`: Runtime mode detection and storage backends
//! - `config`: Save key and file location
//! - `sample`: Example game state model

pub mod config;
pub mod persistence;
pub mod platform;
pub mod sample;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::SaveConfig;
pub use persistence::{LoadOutcome, SaveDocument, SaveError, SaveManager, SaveResult};
pub use platform::{RuntimeMode, detect_runtime_mode};
pub use sample::GameSnapshot;
