//! Error taxonomy for the save pipeline
//!
//! Codec failures and backend failures are kept apart so diagnostics can
//! tell a corrupt save from a broken medium, even though `load` treats both
//! as "no data".

/// Failures converting between documents, transport text and stored blobs.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The application value cannot be expressed as a save document.
    #[error("value is not representable as a save document: {0}")]
    Encoding(String),
    /// The transport text is not a JSON mapping.
    #[error("malformed transport data: {0}")]
    MalformedTransport(String),
    /// The stored blob is not valid base64 over UTF-8 text.
    #[error("malformed storage data: {0}")]
    MalformedStorage(String),
}

impl CodecError {
    /// Whether this error means stored data was unreadable (as opposed to
    /// the caller handing us something unencodable).
    pub fn is_malformed(&self) -> bool {
        !matches!(self, CodecError::Encoding(_))
    }
}

/// Failures from the backing medium.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The medium does not exist in this environment (no window, storage
    /// disabled by the user agent).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write {target}: {reason}")]
    Write { target: String, reason: String },
    #[error("failed to read {target}: {reason}")]
    Read { target: String, reason: String },
}

impl StorageError {
    pub(crate) fn write(target: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Write {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn read(target: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Read {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

/// Why a save attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
