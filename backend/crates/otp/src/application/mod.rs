//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! One use case per file.

pub mod config;
pub mod confirm_code;
pub mod consume_code;
pub mod issue_code;
pub mod reset_password;

use crate::application::config::OtpConfig;
use crate::domain::entity::OneTimeCode;
use crate::domain::repository::CodeLedger;
use crate::domain::services::{CandidateCheck, check_candidate};
use crate::domain::value_object::ids::PrincipalId;
use crate::domain::value_object::purpose::Purpose;
use crate::error::{OtpError, OtpResult};

/// Shared check-only verification step for Confirm and Consume
///
/// Returns the still-active record on a match. An expired record is
/// deleted here (lazy expiry); a mismatch leaves it untouched.
pub(crate) async fn verify_active_code<L: CodeLedger>(
    ledger: &L,
    config: &OtpConfig,
    principal_id: &PrincipalId,
    purpose: Purpose,
    candidate: &str,
) -> OtpResult<OneTimeCode> {
    let record = ledger
        .find(principal_id, purpose)
        .await?
        .ok_or(OtpError::InvalidCode)?;

    match check_candidate(
        &record,
        candidate,
        config.code_pepper(),
        config.validity_window,
    ) {
        CandidateCheck::Expired => {
            ledger.delete(principal_id, purpose).await?;
            tracing::warn!(
                principal_id = %principal_id,
                purpose = %purpose,
                "One-time code expired, record removed"
            );
            Err(OtpError::ExpiredCode)
        }
        CandidateCheck::Mismatch => {
            tracing::warn!(
                principal_id = %principal_id,
                purpose = %purpose,
                "One-time code mismatch"
            );
            Err(OtpError::InvalidCode)
        }
        CandidateCheck::Match => Ok(record),
    }
}
