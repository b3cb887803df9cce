//! Storage capability for the medicard store.
//!
//! The record store only ever needs two operations over string keys and
//! string values, the same surface the original application got from
//! browser localStorage. This crate defines that seam as [`CardStorage`]
//! and ships two backends:
//!
//! - [`MemoryStorage`] — plain in-process map, never fails
//! - [`JsonFileStorage`] — one JSON object file on disk, rewritten on
//!   every write

pub mod file;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Failures from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The persisted blob was not a JSON object of string values.
    #[error("corrupt storage file: {0}")]
    Corrupt(String),
}

/// String key-value storage, the localStorage stand-in.
///
/// Keys are the four fixed collection names; values are serialized
/// collection blobs the caller owns the format of.
pub trait CardStorage {
    /// Returns the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
