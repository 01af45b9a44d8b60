#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Integration tests for the flat-file account store — save/load round-trips,
//! malformed-record tolerance, and the full set-password → persist →
//! reload → authenticate path.

use guichet_ledger::store;
use guichet_ledger::{Account, CredentialHasher, SecretBuffer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_hasher() -> CredentialHasher<StdRng> {
    CredentialHasher::with_rng(StdRng::seed_from_u64(42))
}

#[test]
fn roundtrip_preserves_every_field_and_credential_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.txt");
    let mut hasher = test_hasher();

    let mut first = Account::new();
    assert!(first.set_username("marianne"));
    assert!(first.set_age(34));
    assert!(first.set_student_id(1_234_567));
    assert!(first.set_loan_limit(2_500));
    let mut secret = SecretBuffer::from("first-secret");
    assert!(first.set_password(&mut hasher, &mut secret));

    let mut second = Account::new();
    assert!(second.set_username("laurent"));
    assert!(second.set_age(19));
    assert!(second.set_student_id(-7_654_321));
    assert!(second.set_loan_limit(0));
    // No password set — credential stays empty.

    let saved = vec![first, second];
    store::save(&path, &saved).unwrap();
    let loaded = store::load(&path).unwrap();

    assert_eq!(loaded, saved);
    assert_eq!(loaded[0].credential(), saved[0].credential());
    assert_eq!(loaded[1].credential(), "");
}

#[test]
fn credential_with_embedded_pipe_survives_a_roundtrip() {
    // The writer never produces a credential with `|`, but the reader must
    // tolerate one by rejoining everything after the fourth delimiter.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.txt");

    let account = Account::from_stored("abcdef", 30, 1_234_567, 500, "120000:ab|cd:ef");
    store::save(&path, &[account.clone()]).unwrap();

    let loaded = store::load(&path).unwrap();
    assert_eq!(loaded, vec![account]);
    assert_eq!(loaded[0].credential(), "120000:ab|cd:ef");
}

#[test]
fn malformed_lines_are_skipped_without_failing_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.txt");
    std::fs::write(
        &path,
        "marianne|34|1234567|2500|120000:c2FsdA==:a2V5\n\
         \n\
         short|line\n\
         laurent|old|7654321|0|\n\
         helene|19|7654321|0|\n",
    )
    .unwrap();

    let loaded = store::load(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].username(), "marianne");
    assert_eq!(loaded[1].username(), "helene");
}

#[test]
fn load_missing_file_yields_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = store::load(&dir.path().join("nonexistent.txt")).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn save_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("accounts.txt");

    store::save(&path, &[Account::from_stored("abcdef", 30, 1_234_567, 0, "")]).unwrap();
    assert_eq!(store::load(&path).unwrap().len(), 1);
}

#[test]
fn save_overwrites_the_whole_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.txt");

    let many: Vec<Account> = vec![
        Account::from_stored("abcdef", 30, 1_234_567, 0, ""),
        Account::from_stored("ghijkl", 40, 7_654_321, 100, ""),
    ];
    store::save(&path, &many).unwrap();

    let fewer = vec![Account::from_stored("mnopqr", 50, 1_111_111, 0, "")];
    store::save(&path, &fewer).unwrap();

    let loaded = store::load(&path).unwrap();
    assert_eq!(loaded, fewer);
}

#[test]
fn persisted_credential_still_authenticates_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.txt");
    let mut hasher = test_hasher();

    let mut account = Account::new();
    assert!(account.set_username("marianne"));
    assert!(account.set_age(34));
    assert!(account.set_student_id(1_234_567));
    assert!(account.set_loan_limit(0));
    let mut secret = SecretBuffer::from("door-code-1944");
    assert!(account.set_password(&mut hasher, &mut secret));

    store::save(&path, &[account]).unwrap();
    let loaded = store::load(&path).unwrap();

    assert!(loaded[0].verify_password_text(&hasher, "door-code-1944"));
    assert!(!loaded[0].verify_password_text(&hasher, "door-code-1945"));
}
