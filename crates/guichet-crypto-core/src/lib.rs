//! `guichet-crypto-core` — credential hashing primitives for GUICHET.
//!
//! This crate is the audit target: zero I/O, zero async, zero UI dependencies.
//! It owns the on-disk credential encoding and the handling of raw secrets;
//! nothing in here knows what an account is.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod hasher;
pub mod memory;

pub use error::CryptoError;
pub use hasher::{CredentialHasher, DERIVED_KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use memory::SecretBuffer;
