//! Flat-file persistence for the account set.
//!
//! One record per line, fields joined by `|`:
//!
//! ```text
//! username|age|studentId|loanLimit|credentialEncoding
//! ```
//!
//! The credential encoding may contain `:` but must not contain `|`; the
//! reader still treats everything from the fifth field to end-of-line as the
//! credential, so a stray delimiter inside it cannot shear the record.
//!
//! Loading tolerates malformed records: blank lines, lines with fewer than
//! five fields, and unparsable numeric fields are skipped with a warning and
//! never abort the rest of the file. Saving always rewrites the entire set —
//! there is no append or partial-update mode.

use std::fmt::Write as _;
use std::path::Path;

use crate::account::Account;
use crate::error::LedgerError;

/// Field separator in the persisted record format.
pub const FIELD_SEPARATOR: char = '|';

/// Load the full account set from `path`.
///
/// A missing file is a first run, not a fault: it yields an empty set.
///
/// # Errors
///
/// Returns [`LedgerError::Io`] when the file exists but cannot be read.
pub fn load(path: &Path) -> Result<Vec<Account>, LedgerError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut accounts = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(account) => accounts.push(account),
            None => {
                tracing::warn!(
                    line = index.saturating_add(1),
                    "skipping malformed account record"
                );
            }
        }
    }
    Ok(accounts)
}

/// Persist the entire account set to `path`, overwriting any previous file.
/// The parent directory is created if absent.
///
/// # Errors
///
/// Returns [`LedgerError::Io`] when the directory or file cannot be written.
/// After an error the on-disk state may not match memory — the caller must
/// not assume consistency.
pub fn save(path: &Path, accounts: &[Account]) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut out = String::new();
    for account in accounts {
        // write! into a String cannot fail.
        let _ = writeln!(out, "{}", serialize_record(account));
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// Render one account as a storage line.
fn serialize_record(account: &Account) -> String {
    format!(
        "{username}{sep}{age}{sep}{id}{sep}{loan}{sep}{credential}",
        username = account.username(),
        age = account.age(),
        id = account.student_id(),
        loan = account.loan_limit(),
        credential = account.credential(),
        sep = FIELD_SEPARATOR,
    )
}

/// Parse one storage line, or `None` if the record is malformed.
///
/// `splitn(5, ..)` leaves everything from the fifth field onward — embedded
/// `|` included — inside the credential field.
fn parse_record(line: &str) -> Option<Account> {
    let mut fields = line.splitn(5, FIELD_SEPARATOR);
    let username = fields.next()?;
    let age = fields.next()?.parse::<u32>().ok()?;
    let student_id = fields.next()?.parse::<i32>().ok()?;
    let loan_limit = fields.next()?.parse::<i64>().ok()?;
    let credential = fields.next()?;
    Some(Account::from_stored(
        username, age, student_id, loan_limit, credential,
    ))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
