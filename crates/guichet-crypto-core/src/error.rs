//! Cryptographic error types for `guichet-crypto-core`.

use thiserror::Error;

/// Errors produced by credential operations.
///
/// Validation rejections (password policy, field rules) are not errors — they
/// live one layer up as boolean results. The only fault this crate raises is
/// a literally malformed stored encoding.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Stored credential encoding is malformed (wrong field count, unparsable
    /// iteration count, or invalid Base64).
    #[error("malformed credential encoding: {0}")]
    Format(String),
}
