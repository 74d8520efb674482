//! Store errors.

use thiserror::Error;

/// Failure of a lookup or persistence port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A previous writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}
