//! Errors surfaced by table construction.

use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A table needs at least one bucket; bucket indices are taken modulo
    /// the capacity.
    #[error("hash table capacity must be at least 1")]
    ZeroCapacity,

    /// The bucket array could not be allocated.
    #[error("failed to allocate bucket array: {0}")]
    Alloc(#[from] TryReserveError),
}
