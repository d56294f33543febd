//! Issue Code Use Case
//!
//! Generates, delivers, and records a one-time code for a
//! `(principal, purpose)` slot. The record is persisted only after
//! the notifier accepts the message, so a failed send never blocks an
//! immediate retry.

use std::sync::Arc;

use crate::application::config::OtpConfig;
use crate::domain::entity::OneTimeCode;
use crate::domain::repository::{CodeLedger, Notifier};
use crate::domain::value_object::channel::DeliveryChannel;
use crate::domain::value_object::ids::PrincipalId;
use crate::domain::value_object::mail::code_mail;
use crate::domain::value_object::purpose::Purpose;
use crate::error::{OtpError, OtpResult};

/// Input DTO for issue code
#[derive(Debug, Clone)]
pub struct IssueCodeInput {
    pub principal_id: PrincipalId,
    pub purpose: Purpose,
    /// Address the code is delivered to
    pub destination: String,
}

/// Issue Code Use Case
pub struct IssueCodeUseCase<L, N>
where
    L: CodeLedger,
    N: Notifier,
{
    ledger: Arc<L>,
    notifier: Arc<N>,
    config: Arc<OtpConfig>,
}

impl<L, N> IssueCodeUseCase<L, N>
where
    L: CodeLedger,
    N: Notifier,
{
    pub fn new(ledger: Arc<L>, notifier: Arc<N>, config: Arc<OtpConfig>) -> Self {
        Self {
            ledger,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: IssueCodeInput) -> OtpResult<()> {
        // Throttle: a fresh code to the same destination blocks re-issue
        if let Some(existing) = self
            .ledger
            .find(&input.principal_id, input.purpose)
            .await?
        {
            if existing.receiver == input.destination
                && existing.within_resend_window(self.config.resend_interval)
            {
                tracing::warn!(
                    principal_id = %input.principal_id,
                    purpose = %input.purpose,
                    "Code re-issue throttled"
                );
                return Err(OtpError::Throttled);
            }

            // Stale or redirected slot; clear it before delivering anew
            self.ledger.delete(&input.principal_id, input.purpose).await?;
        }

        let code = platform::crypto::numeric_code(self.config.code_length);
        let code_hash = platform::password::hash_secret(code.as_bytes(), self.config.code_pepper())
            .map_err(|e| OtpError::Internal(e.to_string()))?;

        let record = OneTimeCode::new(
            input.principal_id,
            input.purpose,
            DeliveryChannel::Email,
            input.destination.clone(),
            code_hash,
        );

        // Deliver first; the slot is written only on transport success
        let mail = code_mail(input.purpose, &input.destination, &code);
        let delivery_id = match tokio::time::timeout(
            self.config.delivery_timeout,
            self.notifier.send(&mail),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => return Err(OtpError::Delivery("delivery timed out".to_string())),
        };

        self.ledger.replace(&record).await?;

        tracing::info!(
            principal_id = %input.principal_id,
            purpose = %input.purpose,
            receiver = %input.destination,
            delivery_id = %delivery_id,
            "One-time code issued"
        );

        Ok(())
    }
}
