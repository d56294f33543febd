//! Consume Code Use Case
//!
//! Same contract as ConfirmCode, but a match additionally deletes the
//! record, making the code single-use. Email verification calls this
//! directly; ResetPassword calls it internally as its final
//! re-validation.

use std::sync::Arc;

use crate::application::config::OtpConfig;
use crate::application::verify_active_code;
use crate::domain::repository::CodeLedger;
use crate::domain::value_object::ids::PrincipalId;
use crate::domain::value_object::purpose::Purpose;
use crate::error::OtpResult;

/// Input DTO for consume code
#[derive(Debug, Clone)]
pub struct ConsumeCodeInput {
    pub principal_id: PrincipalId,
    pub purpose: Purpose,
    pub candidate: String,
}

/// Consume Code Use Case
pub struct ConsumeCodeUseCase<L>
where
    L: CodeLedger,
{
    ledger: Arc<L>,
    config: Arc<OtpConfig>,
}

impl<L> ConsumeCodeUseCase<L>
where
    L: CodeLedger,
{
    pub fn new(ledger: Arc<L>, config: Arc<OtpConfig>) -> Self {
        Self { ledger, config }
    }

    pub async fn execute(&self, input: ConsumeCodeInput) -> OtpResult<()> {
        verify_active_code(
            self.ledger.as_ref(),
            &self.config,
            &input.principal_id,
            input.purpose,
            &input.candidate,
        )
        .await?;

        self.ledger.delete(&input.principal_id, input.purpose).await?;

        tracing::info!(
            principal_id = %input.principal_id,
            purpose = %input.purpose,
            "One-time code consumed"
        );

        Ok(())
    }
}
