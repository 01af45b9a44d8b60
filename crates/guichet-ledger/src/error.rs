//! Ledger error types for `guichet-ledger`.
//!
//! Field validation failures are not represented here — setters signal them
//! as boolean results, because a rejected field is an expected outcome, not
//! a fault.

use thiserror::Error;

/// Errors produced by account storage operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
