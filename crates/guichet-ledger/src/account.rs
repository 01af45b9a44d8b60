//! Validated in-memory model of one customer account.
//!
//! Every setter is a pure validate-then-apply operation with all-or-nothing
//! effect: a rejected value leaves the prior one untouched and signals the
//! rejection as `false`. Callers branch on the result to surface a
//! user-facing message — field rejection is an expected, frequent outcome
//! (user typos), never an exception path.
//!
//! The stored credential is an opaque encoding owned by this type; only the
//! hasher in `guichet-crypto-core` interprets its internal structure.

use guichet_crypto_core::{CredentialHasher, SecretBuffer};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// Minimum username length in characters.
pub const USERNAME_MIN_LEN: usize = 6;

/// Minimum customer age.
pub const MIN_AGE: u32 = 18;

/// Required digit count of a student id's absolute value.
pub const STUDENT_ID_DIGITS: usize = 7;

/// Password length bounds, inclusive.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Upper password length bound, inclusive.
pub const PASSWORD_MAX_LEN: usize = 50;

/// One customer account.
///
/// Created blank (all fields zero/empty) and populated through validated
/// setters, or reconstructed verbatim from trusted storage via
/// [`Account::from_stored`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    username: String,
    age: u32,
    student_id: i32,
    loan_limit: i64,
    /// Credential encoding, or the empty string when no password is set.
    credential: String,
}

impl Account {
    /// Blank account — populate through the setters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruct an account from persisted fields.
    ///
    /// Storage is trusted: fields were validated when they were written, so
    /// reconstruction applies them verbatim without re-running the rules. A
    /// hand-edited file with an out-of-policy field loads successfully.
    #[must_use]
    pub fn from_stored(
        username: &str,
        age: u32,
        student_id: i32,
        loan_limit: i64,
        credential: &str,
    ) -> Self {
        Self {
            username: username.to_string(),
            age,
            student_id,
            loan_limit,
            credential: credential.to_string(),
        }
    }

    // -- Getters ------------------------------------------------------------

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub const fn student_id(&self) -> i32 {
        self.student_id
    }

    #[must_use]
    pub const fn loan_limit(&self) -> i64 {
        self.loan_limit
    }

    /// The stored credential encoding — never the raw secret.
    #[must_use]
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Returns `true` once a password has been set.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }

    // -- Validated setters --------------------------------------------------

    /// Replace the username. Rejects blank input, non-letter characters, and
    /// names shorter than six letters.
    pub fn set_username(&mut self, username: &str) -> bool {
        let valid = !username.trim().is_empty()
            && username.len() >= USERNAME_MIN_LEN
            && username.chars().all(|c| c.is_ascii_alphabetic());
        if valid {
            self.username = username.to_string();
        }
        valid
    }

    /// Replace the age. Rejects values under eighteen.
    pub fn set_age(&mut self, age: u32) -> bool {
        let valid = age >= MIN_AGE;
        if valid {
            self.age = age;
        }
        valid
    }

    /// Replace the student id. The decimal representation of the absolute
    /// value must have exactly seven digits; the sign is ignored.
    pub fn set_student_id(&mut self, student_id: i32) -> bool {
        let valid = student_id.unsigned_abs().to_string().len() == STUDENT_ID_DIGITS;
        if valid {
            self.student_id = student_id;
        }
        valid
    }

    /// Replace the loan limit. Rejects negative values.
    pub fn set_loan_limit(&mut self, loan_limit: i64) -> bool {
        let valid = loan_limit >= 0;
        if valid {
            self.loan_limit = loan_limit;
        }
        valid
    }

    /// Set or replace the password.
    ///
    /// Policy: 8–50 bytes inclusive, no space character. On acceptance the
    /// secret is derived into a fresh credential encoding; the prior
    /// credential survives a rejection. The secret buffer is wiped on accept
    /// and reject alike.
    pub fn set_password<R: RngCore + CryptoRng>(
        &mut self,
        hasher: &mut CredentialHasher<R>,
        secret: &mut SecretBuffer,
    ) -> bool {
        if !password_policy_ok(secret.expose()) {
            secret.wipe();
            return false;
        }
        self.credential = hasher.derive(secret);
        true
    }

    // -- Credential check ---------------------------------------------------

    /// Check a candidate secret against the stored credential.
    ///
    /// An account with no credential can never authenticate. A corrupted
    /// stored encoding is absorbed into plain denial — authentication must
    /// not crash, and the caller learns nothing about *why* it failed. The
    /// candidate buffer is wiped regardless of outcome.
    pub fn verify_password<R: RngCore + CryptoRng>(
        &self,
        hasher: &CredentialHasher<R>,
        candidate: &mut SecretBuffer,
    ) -> bool {
        if !self.has_credential() {
            candidate.wipe();
            return false;
        }
        hasher.verify(candidate, &self.credential).unwrap_or(false)
    }

    /// Text-form convenience for [`verify_password`](Self::verify_password).
    /// The text is converted into a buffer that is wiped after use.
    pub fn verify_password_text<R: RngCore + CryptoRng>(
        &self,
        hasher: &CredentialHasher<R>,
        candidate: &str,
    ) -> bool {
        let mut buffer = SecretBuffer::from(candidate);
        self.verify_password(hasher, &mut buffer)
    }
}

fn password_policy_ok(secret: &[u8]) -> bool {
    !secret.is_empty()
        && (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&secret.len())
        && !secret.contains(&b' ')
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
