//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Runtime mode detection (browser vs. desktop)
//! - Storage (LocalStorage on web, a file next to the executable on native)

pub mod storage;

pub use storage::{BrowserBackend, DesktopBackend, StorageBackend, bind_backend};

/// Execution environment that decides which storage backend is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeMode {
    Browser,
    Desktop,
}

impl RuntimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Browser => "browser",
            RuntimeMode::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the runtime mode for this process.
///
/// The answer is fixed at compile time, so repeated calls agree. Callers
/// should still call it once and pass the result along.
pub fn detect_runtime_mode() -> RuntimeMode {
    if cfg!(target_arch = "wasm32") {
        RuntimeMode::Browser
    } else {
        RuntimeMode::Desktop
    }
}
