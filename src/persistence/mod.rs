//! Save/load persistence
//!
//! Pipeline:
//! - save: document -> JSON -> base64 -> backend
//! - load: backend -> base64 -> JSON -> document
//!
//! Corrupt or unreadable data comes back as "no save" from [`SaveManager::load`].

pub mod codec;
pub mod error;
pub mod manager;

pub use codec::{
    SaveDocument, decode_storage, decode_transport, encode_storage, encode_transport,
    try_decode_storage,
};
pub use error::{CodecError, SaveError, StorageError};
pub use manager::{LoadOutcome, SaveManager, SaveResult};
