//! OTP (One-Time-Code) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, collaborator traits, pure services
//! - `application/` - Use cases (IssueCode, ConfirmCode, ConsumeCode, ResetPassword)
//! - `infra/` - PostgreSQL ledger and in-memory collaborators
//!
//! ## Security Model
//! - Plaintext codes exist only in transit; the ledger stores Argon2id hashes
//! - One active code per `(principal, purpose)` slot, superseded atomically
//! - Handoff tokens are AES-256-GCM sealed; tampering fails authentication
//! - Issuance to the same destination is throttled; delivery failures
//!   leave no record and never block a retry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::OtpConfig;
pub use application::confirm_code::{ConfirmCodeInput, ConfirmCodeOutput, ConfirmCodeUseCase};
pub use application::consume_code::{ConsumeCodeInput, ConsumeCodeUseCase};
pub use application::issue_code::{IssueCodeInput, IssueCodeUseCase};
pub use application::reset_password::{ResetPasswordInput, ResetPasswordUseCase};
pub use error::{OtpError, OtpResult};
pub use infra::postgres::PgCodeLedger;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::channel::*;
    pub use crate::domain::value_object::ids::*;
    pub use crate::domain::value_object::mail::*;
    pub use crate::domain::value_object::purpose::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCodeLedger as CodeStore;
}
