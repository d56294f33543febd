//! Domain Services
//!
//! Pure logic for candidate checking and the handoff-token payload.

use std::time::Duration;

use uuid::Uuid;

use crate::domain::entity::OneTimeCode;
use crate::domain::value_object::ids::PrincipalId;

/// Delimiter between code and principal inside a handoff payload.
/// Safe because codes are purely numeric and principal IDs are UUIDs.
pub const HANDOFF_DELIMITER: &str = "~~~";

/// Outcome of checking a candidate code against a ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateCheck {
    /// Candidate matches the stored hash, window still open
    Match,
    /// Candidate does not match; record must stay intact
    Mismatch,
    /// Validity window elapsed; record must be removed
    Expired,
}

/// Check a candidate code against a record
///
/// Expiry is evaluated first: an expired record never reveals whether
/// the candidate would have matched.
pub fn check_candidate(
    record: &OneTimeCode,
    candidate: &str,
    pepper: Option<&[u8]>,
    validity_window: Duration,
) -> CandidateCheck {
    if record.is_expired(validity_window) {
        return CandidateCheck::Expired;
    }

    if platform::password::verify_secret(candidate.as_bytes(), pepper, &record.code_hash) {
        CandidateCheck::Match
    } else {
        CandidateCheck::Mismatch
    }
}

/// Compose the handoff payload carried inside the sealed token
pub fn handoff_payload(code: &str, principal_id: &PrincipalId) -> String {
    format!("{code}{HANDOFF_DELIMITER}{principal_id}")
}

/// Recover `(code, principal)` from a decrypted handoff payload
///
/// Returns `None` for anything a legitimate token could not contain:
/// missing delimiter, non-numeric code, or an unparseable principal.
pub fn parse_handoff_payload(payload: &str) -> Option<(String, PrincipalId)> {
    let (code, principal) = payload.split_once(HANDOFF_DELIMITER)?;
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let uuid = Uuid::parse_str(principal).ok()?;
    Some((code.to_string(), PrincipalId::from_uuid(uuid)))
}
