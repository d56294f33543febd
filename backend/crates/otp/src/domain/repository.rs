//! Collaborator Traits
//!
//! Interfaces the core consumes: the code ledger it owns, plus the
//! principal store and notifier it borrows from the surrounding
//! service. Implementations live in the infrastructure layer (or in
//! the caller's codebase for the external collaborators).

use std::time::Duration;

use crate::domain::entity::{OneTimeCode, Principal};
use crate::domain::value_object::ids::PrincipalId;
use crate::domain::value_object::mail::OutboundMail;
use crate::domain::value_object::purpose::Purpose;
use crate::error::OtpResult;

/// Code ledger trait
///
/// At most one record exists per `(principal, purpose)` slot; `replace`
/// must supersede atomically so concurrent issuance cannot leave two
/// live records or a torn one.
#[trait_variant::make(CodeLedger: Send)]
pub trait LocalCodeLedger {
    /// Find the active record for a slot
    async fn find(
        &self,
        principal_id: &PrincipalId,
        purpose: Purpose,
    ) -> OtpResult<Option<OneTimeCode>>;

    /// Atomically create or supersede the record for the slot
    async fn replace(&self, code: &OneTimeCode) -> OtpResult<()>;

    /// Delete the record for a slot; returns whether one existed
    async fn delete(&self, principal_id: &PrincipalId, purpose: Purpose) -> OtpResult<bool>;

    /// Remove records whose validity window has elapsed
    async fn purge_expired(&self, validity_window: Duration) -> OtpResult<u64>;
}

/// Principal store trait (external collaborator)
#[trait_variant::make(PrincipalStore: Send)]
pub trait LocalPrincipalStore {
    /// Find a principal by ID
    async fn find_by_id(&self, id: &PrincipalId) -> OtpResult<Option<Principal>>;

    /// Find a principal by destination address
    async fn find_by_destination(&self, destination: &str) -> OtpResult<Option<Principal>>;

    /// Overwrite the principal's stored password hash (PHC string)
    async fn set_password_hash(&self, id: &PrincipalId, password_hash: &str) -> OtpResult<()>;
}

/// Notifier trait (external collaborator)
#[trait_variant::make(Notifier: Send)]
pub trait LocalNotifier {
    /// Deliver a rendered message; returns a transport delivery ID
    async fn send(&self, mail: &OutboundMail) -> OtpResult<String>;
}
