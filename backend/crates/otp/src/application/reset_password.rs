//! Reset Password Use Case
//!
//! Completes the password-reset flow started by ConfirmCode. The
//! handoff token is opened, the referenced code is re-consumed
//! (re-validating expiry and hash, and deleting the record), and only
//! then is the principal's password hash overwritten. A token cannot
//! be replayed once its underlying code is gone.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::OtpConfig;
use crate::application::consume_code::{ConsumeCodeInput, ConsumeCodeUseCase};
use crate::domain::repository::{CodeLedger, PrincipalStore};
use crate::domain::services::parse_handoff_payload;
use crate::domain::value_object::purpose::Purpose;
use crate::error::{OtpError, OtpResult};

/// Input DTO for reset password
#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    /// Sealed token returned by ConfirmCode
    pub handoff_token: String,
    pub new_password: String,
}

/// Reset Password Use Case
pub struct ResetPasswordUseCase<L, P>
where
    L: CodeLedger,
    P: PrincipalStore,
{
    consume: ConsumeCodeUseCase<L>,
    principal_store: Arc<P>,
    config: Arc<OtpConfig>,
}

impl<L, P> ResetPasswordUseCase<L, P>
where
    L: CodeLedger,
    P: PrincipalStore,
{
    pub fn new(ledger: Arc<L>, principal_store: Arc<P>, config: Arc<OtpConfig>) -> Self {
        Self {
            consume: ConsumeCodeUseCase::new(ledger, config.clone()),
            principal_store,
            config,
        }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> OtpResult<()> {
        // Validate the replacement password before consuming anything,
        // so a policy rejection leaves the code usable for another try
        let new_password = ClearTextPassword::new(input.new_password)
            .map_err(|e| OtpError::PasswordValidation(e.to_string()))?;

        let payload = platform::cipher::open(&self.config.handoff_key, &input.handoff_token)
            .map_err(|_| OtpError::Unauthorized)?;
        let payload = String::from_utf8(payload).map_err(|_| OtpError::Unauthorized)?;
        let (code, principal_id) =
            parse_handoff_payload(&payload).ok_or(OtpError::Unauthorized)?;

        let principal = self
            .principal_store
            .find_by_id(&principal_id)
            .await?
            .ok_or(OtpError::Unauthorized)?;

        // Re-validates expiry and hash, and deletes the record
        self.consume
            .execute(ConsumeCodeInput {
                principal_id: principal.id,
                purpose: Purpose::ResetPassword,
                candidate: code,
            })
            .await?;

        let password_hash = new_password
            .hash(self.config.password_pepper())
            .map_err(|e| OtpError::Internal(e.to_string()))?;
        self.principal_store
            .set_password_hash(&principal.id, password_hash.as_phc_string())
            .await?;

        tracing::info!(
            principal_id = %principal.id,
            "Password reset completed"
        );

        Ok(())
    }
}
