//! PostgreSQL Code Ledger
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE one_time_codes (
//!     one_time_code_id UUID PRIMARY KEY,
//!     principal_id     UUID        NOT NULL,
//!     purpose          TEXT        NOT NULL,
//!     channel          TEXT        NOT NULL,
//!     receiver         TEXT        NOT NULL,
//!     code_hash        TEXT        NOT NULL,
//!     created_at       TIMESTAMPTZ NOT NULL,
//!     UNIQUE (principal_id, purpose)
//! );
//! ```
//!
//! The unique constraint plus upsert in [`replace`] makes supersede
//! atomic: two concurrent issuances for the same slot serialize on the
//! constraint and exactly one record survives.
//!
//! [`replace`]: CodeLedger::replace

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::OneTimeCode;
use crate::domain::repository::CodeLedger;
use crate::domain::value_object::channel::DeliveryChannel;
use crate::domain::value_object::ids::{CodeId, PrincipalId};
use crate::domain::value_object::purpose::Purpose;
use crate::error::{OtpError, OtpResult};

/// PostgreSQL-backed code ledger
#[derive(Clone)]
pub struct PgCodeLedger {
    pool: PgPool,
}

impl PgCodeLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CodeLedger for PgCodeLedger {
    async fn find(
        &self,
        principal_id: &PrincipalId,
        purpose: Purpose,
    ) -> OtpResult<Option<OneTimeCode>> {
        let row = sqlx::query_as::<_, OneTimeCodeRow>(
            r#"
            SELECT
                one_time_code_id,
                principal_id,
                purpose,
                channel,
                receiver,
                code_hash,
                created_at
            FROM one_time_codes
            WHERE principal_id = $1 AND purpose = $2
            "#,
        )
        .bind(principal_id.as_uuid())
        .bind(purpose.code())
        .fetch_optional(&self.pool)
        .await?;

        row.map(OneTimeCodeRow::into_one_time_code).transpose()
    }

    async fn replace(&self, code: &OneTimeCode) -> OtpResult<()> {
        sqlx::query(
            r#"
            INSERT INTO one_time_codes (
                one_time_code_id,
                principal_id,
                purpose,
                channel,
                receiver,
                code_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (principal_id, purpose)
            DO UPDATE SET
                one_time_code_id = EXCLUDED.one_time_code_id,
                channel = EXCLUDED.channel,
                receiver = EXCLUDED.receiver,
                code_hash = EXCLUDED.code_hash,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(code.id.as_uuid())
        .bind(code.principal_id.as_uuid())
        .bind(code.purpose.code())
        .bind(code.channel.code())
        .bind(&code.receiver)
        .bind(&code.code_hash)
        .bind(code.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            principal_id = %code.principal_id,
            purpose = %code.purpose,
            "Ledger slot replaced"
        );

        Ok(())
    }

    async fn delete(&self, principal_id: &PrincipalId, purpose: Purpose) -> OtpResult<bool> {
        let deleted = sqlx::query(
            "DELETE FROM one_time_codes WHERE principal_id = $1 AND purpose = $2",
        )
        .bind(principal_id.as_uuid())
        .bind(purpose.code())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }

    async fn purge_expired(&self, validity_window: Duration) -> OtpResult<u64> {
        let window = chrono::Duration::from_std(validity_window)
            .map_err(|e| OtpError::Internal(e.to_string()))?;
        let cutoff = Utc::now() - window;

        let purged = sqlx::query("DELETE FROM one_time_codes WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if purged > 0 {
            tracing::info!(purged = purged, "Purged expired one-time codes");
        }

        Ok(purged)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct OneTimeCodeRow {
    one_time_code_id: Uuid,
    principal_id: Uuid,
    purpose: String,
    channel: String,
    receiver: String,
    code_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl OneTimeCodeRow {
    fn into_one_time_code(self) -> OtpResult<OneTimeCode> {
        let purpose = Purpose::from_code(&self.purpose)
            .ok_or_else(|| OtpError::Internal(format!("Unknown purpose: {}", self.purpose)))?;
        let channel = DeliveryChannel::from_code(&self.channel)
            .ok_or_else(|| OtpError::Internal(format!("Unknown channel: {}", self.channel)))?;

        Ok(OneTimeCode {
            id: CodeId::from_uuid(self.one_time_code_id),
            principal_id: PrincipalId::from_uuid(self.principal_id),
            purpose,
            channel,
            receiver: self.receiver,
            code_hash: self.code_hash,
            created_at: self.created_at,
        })
    }
}
