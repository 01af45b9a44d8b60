//! PBKDF2-HMAC-SHA-256 credential derivation and verification.
//!
//! This module provides:
//! - [`CredentialHasher::derive`] — turn a raw secret into a salted, iterated
//!   credential encoding suitable for long-term storage
//! - [`CredentialHasher::verify`] — check a candidate secret against a stored
//!   encoding without ever persisting or logging the raw secret
//!
//! # Credential Encoding
//!
//! ```text
//! <iterations>:<base64(salt)>:<base64(derived key)>
//! ```
//!
//! The encoding is self-describing: verification re-derives with the stored
//! iteration count and a key length equal to the stored key, so records
//! written under an older work factor keep verifying after the default is
//! raised — no migration pass required.
//!
//! The random source is injected at construction. Production code uses
//! [`CredentialHasher::new`] (backed by `OsRng`); tests substitute a seeded
//! RNG via [`CredentialHasher::with_rng`] without weakening anything here.

use data_encoding::BASE64;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::memory::SecretBuffer;

/// Default PBKDF2 iteration count for newly derived credentials.
pub const PBKDF2_ITERATIONS: u32 = 120_000;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (256 bits).
pub const DERIVED_KEY_LEN: usize = 32;

/// Constant-time byte comparison for derived keys.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks.
///
/// Note: the early return on length mismatch is acceptable because the
/// derived-key length is read from the stored encoding — it is public
/// information. The constant-time property protects the *key value*.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ---------------------------------------------------------------------------
// Hasher
// ---------------------------------------------------------------------------

/// Derives and verifies stored credentials.
///
/// Holds the cryptographic random source used for salt generation.
pub struct CredentialHasher<R: RngCore + CryptoRng = OsRng> {
    rng: R,
}

impl CredentialHasher<OsRng> {
    /// Hasher backed by the operating system CSPRNG.
    #[must_use]
    pub const fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for CredentialHasher<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> CredentialHasher<R> {
    /// Hasher backed by an explicit random source.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Derive a credential encoding from a raw secret.
    ///
    /// Uses a fresh 16-byte random salt and the current default iteration
    /// count. The input buffer is wiped before this returns. Never fails for
    /// well-formed input — secret policy is enforced by the caller.
    pub fn derive(&mut self, secret: &mut SecretBuffer) -> String {
        self.derive_with_iterations(secret, PBKDF2_ITERATIONS)
    }

    /// [`derive`](Self::derive) with an explicit iteration count.
    ///
    /// The work-factor upgrade hook: old records keep verifying with their
    /// stored count while new records use whatever the caller picks.
    pub fn derive_with_iterations(&mut self, secret: &mut SecretBuffer, iterations: u32) -> String {
        let mut salt = [0u8; SALT_LEN];
        self.rng.fill_bytes(&mut salt);

        let mut key = [0u8; DERIVED_KEY_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(secret.expose(), &salt, iterations, &mut key);

        let encoded = format!(
            "{iterations}:{}:{}",
            BASE64.encode(&salt),
            BASE64.encode(&key)
        );

        // Wipe intermediates and the caller's buffer on the way out.
        key.zeroize();
        secret.wipe();
        encoded
    }

    /// Check a candidate secret against a stored credential encoding.
    ///
    /// The candidate buffer is wiped on every exit path — match, mismatch,
    /// and malformed-encoding error alike.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Format`] when `stored` does not split into
    /// exactly three `:`-separated fields, or when its iteration count or
    /// Base64 sub-fields are unparsable.
    pub fn verify(&self, secret: &mut SecretBuffer, stored: &str) -> Result<bool, CryptoError> {
        let result = verify_encoded(secret.expose(), stored);
        secret.wipe();
        result
    }
}

/// Split, decode, re-derive, and compare. The caller wipes the secret.
fn verify_encoded(secret: &[u8], stored: &str) -> Result<bool, CryptoError> {
    let parts: Vec<&str> = stored.split(':').collect();
    if parts.len() != 3 {
        return Err(CryptoError::Format(format!(
            "expected 3 colon-separated fields, got {}",
            parts.len()
        )));
    }

    let iterations: u32 = parts[0]
        .parse()
        .map_err(|e| CryptoError::Format(format!("invalid iteration count: {e}")))?;
    if iterations == 0 {
        return Err(CryptoError::Format("iteration count must be non-zero".into()));
    }

    let salt = BASE64
        .decode(parts[1].as_bytes())
        .map_err(|e| CryptoError::Format(format!("invalid Base64 in salt: {e}")))?;
    let stored_key = BASE64
        .decode(parts[2].as_bytes())
        .map_err(|e| CryptoError::Format(format!("invalid Base64 in derived key: {e}")))?;
    if stored_key.is_empty() {
        return Err(CryptoError::Format("empty derived key".into()));
    }

    // Key length follows the stored key, so records written with a different
    // output length keep verifying.
    let mut candidate_key = vec![0u8; stored_key.len()];
    pbkdf2::pbkdf2_hmac::<Sha256>(secret, &salt, iterations, &mut candidate_key);

    let matched = constant_time_eq(&candidate_key, &stored_key);
    candidate_key.zeroize();
    Ok(matched)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
