//! Confirm Code Use Case
//!
//! Check-only verification: a matching candidate succeeds without
//! touching the ledger, so the code stays consumable. For the
//! password-reset purpose the output carries a sealed handoff token
//! that lets the verified fact cross to the reset call without
//! re-transmitting the code.

use std::sync::Arc;

use crate::application::config::OtpConfig;
use crate::application::verify_active_code;
use crate::domain::repository::CodeLedger;
use crate::domain::services::handoff_payload;
use crate::domain::value_object::ids::PrincipalId;
use crate::domain::value_object::purpose::Purpose;
use crate::error::{OtpError, OtpResult};

/// Input DTO for confirm code
#[derive(Debug, Clone)]
pub struct ConfirmCodeInput {
    pub principal_id: PrincipalId,
    pub purpose: Purpose,
    pub candidate: String,
}

/// Output DTO for confirm code
#[derive(Debug, Clone)]
pub struct ConfirmCodeOutput {
    /// Sealed handoff token; present only for `reset_password`
    pub handoff_token: Option<String>,
}

/// Confirm Code Use Case
pub struct ConfirmCodeUseCase<L>
where
    L: CodeLedger,
{
    ledger: Arc<L>,
    config: Arc<OtpConfig>,
}

impl<L> ConfirmCodeUseCase<L>
where
    L: CodeLedger,
{
    pub fn new(ledger: Arc<L>, config: Arc<OtpConfig>) -> Self {
        Self { ledger, config }
    }

    pub async fn execute(&self, input: ConfirmCodeInput) -> OtpResult<ConfirmCodeOutput> {
        verify_active_code(
            self.ledger.as_ref(),
            &self.config,
            &input.principal_id,
            input.purpose,
            &input.candidate,
        )
        .await?;

        let handoff_token = match input.purpose {
            Purpose::ResetPassword => {
                let payload = handoff_payload(&input.candidate, &input.principal_id);
                let token = platform::cipher::seal(&self.config.handoff_key, payload.as_bytes())
                    .map_err(|e| OtpError::Internal(e.to_string()))?;
                Some(token)
            }
            Purpose::VerifyEmail => None,
        };

        tracing::info!(
            principal_id = %input.principal_id,
            purpose = %input.purpose,
            "One-time code confirmed"
        );

        Ok(ConfirmCodeOutput { handoff_token })
    }
}
