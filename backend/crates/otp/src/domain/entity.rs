//! Domain Entities
//!
//! Core entities for the one-time-code core.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::value_object::channel::DeliveryChannel;
use crate::domain::value_object::ids::{CodeId, PrincipalId};
use crate::domain::value_object::purpose::Purpose;

/// OneTimeCode entity - the single active ledger record for a
/// `(principal, purpose)` slot
///
/// The plaintext code is never stored; only its Argon2id hash.
/// `created_at` drives both the resend throttle and expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode {
    pub id: CodeId,
    pub principal_id: PrincipalId,
    pub purpose: Purpose,
    pub channel: DeliveryChannel,
    /// Destination address the code was sent to
    pub receiver: String,
    /// PHC-formatted one-way hash of the plaintext code
    pub code_hash: String,
    pub created_at: DateTime<Utc>,
}

impl OneTimeCode {
    /// Create a new ledger record for a freshly generated code
    pub fn new(
        principal_id: PrincipalId,
        purpose: Purpose,
        channel: DeliveryChannel,
        receiver: impl Into<String>,
        code_hash: String,
    ) -> Self {
        Self {
            id: CodeId::new(),
            principal_id,
            purpose,
            channel,
            receiver: receiver.into(),
            code_hash,
            created_at: Utc::now(),
        }
    }

    /// Check if the validity window has elapsed
    pub fn is_expired(&self, validity_window: Duration) -> bool {
        Utc::now() - self.created_at > to_chrono(validity_window)
    }

    /// Check if a re-issue to the same receiver is still throttled
    pub fn within_resend_window(&self, resend_interval: Duration) -> bool {
        Utc::now() - self.created_at < to_chrono(resend_interval)
    }
}

fn to_chrono(d: Duration) -> chrono::Duration {
    chrono::Duration::from_std(d).unwrap_or(chrono::Duration::MAX)
}

/// Principal - the account a code is issued on behalf of
///
/// Minimal capability view over whatever account table backs it;
/// the principal store is the only component that knows more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: PrincipalId,
    /// Address codes for this principal are delivered to
    pub destination: String,
}
