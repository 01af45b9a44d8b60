//! `guichet-ledger` — validated customer accounts and their flat-file store.
//!
//! An [`Account`] enforces field validity at the moment of mutation and
//! delegates everything secret-shaped to `guichet-crypto-core`. The store
//! reads and writes the whole account set as pipe-delimited text, tolerating
//! malformed lines on load.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod account;
pub mod error;
pub mod store;

pub use account::Account;
pub use error::LedgerError;
pub use guichet_crypto_core::{CredentialHasher, SecretBuffer};
