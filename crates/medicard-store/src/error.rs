//! Store failure kinds.

use medicard_storage::StorageError;
use thiserror::Error;

/// Everything a store operation can fail with.
///
/// [`InvalidPin`] and [`AuthFailed`] are the two expected, recoverable
/// kinds; the caller re-prompts the user. [`Storage`] and
/// [`Serialization`] mean the backing blob could not be read or written
/// and terminate the current operation only.
///
/// [`InvalidPin`]: StoreError::InvalidPin
/// [`AuthFailed`]: StoreError::AuthFailed
/// [`Storage`]: StoreError::Storage
/// [`Serialization`]: StoreError::Serialization
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration rejected: the PIN is not exactly 4 decimal digits.
    #[error("PIN must be exactly 4 digits")]
    InvalidPin,
    /// Unknown card ID or wrong PIN. The message never says which.
    #[error("invalid card ID or PIN")]
    AuthFailed,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("collection blob could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// True for the two expected user-facing failures, false for
    /// storage-layer trouble.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoreError::InvalidPin | StoreError::AuthFailed)
    }
}
