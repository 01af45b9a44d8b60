//! Wipeable buffers for raw secrets.
//!
//! Raw passwords enter the core as a [`SecretBuffer`]: an exclusively-owned,
//! short-lived byte buffer that is overwritten with zeros on every exit path.
//! The hasher wipes the buffer it was handed before returning; the `Drop`
//! implementation is the deferred-cleanup backstop for any path that forgets.
//!
//! `Debug`/`Display` output is masked so a secret can never reach a log line
//! or panic message by accident.

use std::fmt;

use zeroize::Zeroize;

/// Owned buffer for a raw secret.
///
/// Wiping zeroes the bytes **in place** — the length is preserved so callers
/// (and tests) can observe that the original contents are gone.
pub struct SecretBuffer {
    bytes: Vec<u8>,
}

impl SecretBuffer {
    /// Take ownership of the given bytes. The caller must not retain a copy.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Expose the underlying bytes for a derivation or comparison.
    ///
    /// Keep exposure minimal — prefer using the slice within a single
    /// expression rather than binding it to a long-lived variable.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of bytes in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Overwrite every byte with zero, keeping the length intact.
    pub fn wipe(&mut self) {
        self.bytes.as_mut_slice().zeroize();
    }
}

impl Zeroize for SecretBuffer {
    fn zeroize(&mut self) {
        self.wipe();
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl From<Vec<u8>> for SecretBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<String> for SecretBuffer {
    /// Takes over the string's allocation — no plaintext copy remains behind.
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl From<&str> for SecretBuffer {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

impl fmt::Display for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
