//! In-Memory Collaborators
//!
//! Mutex-backed implementations of the ledger, principal store, and
//! notifier. Intended for tests and local development; the notifier
//! records what it is asked to send and can be told to fail or stall.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::{OneTimeCode, Principal};
use crate::domain::repository::{CodeLedger, Notifier, PrincipalStore};
use crate::domain::value_object::ids::PrincipalId;
use crate::domain::value_object::mail::OutboundMail;
use crate::domain::value_object::purpose::Purpose;
use crate::error::{OtpError, OtpResult};

fn locked<'a, T>(mutex: &'a Mutex<T>, what: &str) -> OtpResult<std::sync::MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| OtpError::Internal(format!("{what} lock poisoned")))
}

// ============================================================================
// Code ledger
// ============================================================================

/// In-memory code ledger, one slot per `(principal, purpose)`
#[derive(Default)]
pub struct InMemoryCodeLedger {
    slots: Mutex<HashMap<(Uuid, Purpose), OneTimeCode>>,
}

impl InMemoryCodeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records across all slots
    pub fn len(&self) -> usize {
        self.slots.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CodeLedger for InMemoryCodeLedger {
    async fn find(
        &self,
        principal_id: &PrincipalId,
        purpose: Purpose,
    ) -> OtpResult<Option<OneTimeCode>> {
        let slots = locked(&self.slots, "ledger")?;
        Ok(slots.get(&(principal_id.into_uuid(), purpose)).cloned())
    }

    async fn replace(&self, code: &OneTimeCode) -> OtpResult<()> {
        let mut slots = locked(&self.slots, "ledger")?;
        slots.insert((code.principal_id.into_uuid(), code.purpose), code.clone());
        Ok(())
    }

    async fn delete(&self, principal_id: &PrincipalId, purpose: Purpose) -> OtpResult<bool> {
        let mut slots = locked(&self.slots, "ledger")?;
        Ok(slots.remove(&(principal_id.into_uuid(), purpose)).is_some())
    }

    async fn purge_expired(&self, validity_window: Duration) -> OtpResult<u64> {
        let window = chrono::Duration::from_std(validity_window)
            .map_err(|e| OtpError::Internal(e.to_string()))?;
        let cutoff = Utc::now() - window;

        let mut slots = locked(&self.slots, "ledger")?;
        let before = slots.len();
        slots.retain(|_, code| code.created_at >= cutoff);
        Ok((before - slots.len()) as u64)
    }
}

// ============================================================================
// Principal store
// ============================================================================

struct StoredPrincipal {
    principal: Principal,
    password_hash: Option<String>,
}

/// In-memory principal store
#[derive(Default)]
pub struct InMemoryPrincipalStore {
    principals: Mutex<HashMap<Uuid, StoredPrincipal>>,
}

impl InMemoryPrincipalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a principal (no password hash yet)
    pub fn insert(&self, principal: Principal) {
        if let Ok(mut principals) = self.principals.lock() {
            principals.insert(
                principal.id.into_uuid(),
                StoredPrincipal {
                    principal,
                    password_hash: None,
                },
            );
        }
    }

    /// Current stored password hash, if any
    pub fn password_hash(&self, id: &PrincipalId) -> Option<String> {
        self.principals
            .lock()
            .ok()?
            .get(id.as_uuid())
            .and_then(|p| p.password_hash.clone())
    }
}

impl PrincipalStore for InMemoryPrincipalStore {
    async fn find_by_id(&self, id: &PrincipalId) -> OtpResult<Option<Principal>> {
        let principals = locked(&self.principals, "principal store")?;
        Ok(principals.get(id.as_uuid()).map(|p| p.principal.clone()))
    }

    async fn find_by_destination(&self, destination: &str) -> OtpResult<Option<Principal>> {
        let principals = locked(&self.principals, "principal store")?;
        Ok(principals
            .values()
            .find(|p| p.principal.destination == destination)
            .map(|p| p.principal.clone()))
    }

    async fn set_password_hash(&self, id: &PrincipalId, password_hash: &str) -> OtpResult<()> {
        let mut principals = locked(&self.principals, "principal store")?;
        let stored = principals
            .get_mut(id.as_uuid())
            .ok_or_else(|| OtpError::Internal("Unknown principal".to_string()))?;
        stored.password_hash = Some(password_hash.to_string());
        Ok(())
    }
}

// ============================================================================
// Notifier
// ============================================================================

/// Notifier that records outbound mail instead of sending it
///
/// Can be switched into a failing or stalling mode to exercise the
/// delivery-error and timeout paths.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<OutboundMail>>,
    failing: AtomicBool,
    stall: Mutex<Option<Duration>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages accepted so far
    pub fn sent(&self) -> Vec<OutboundMail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Make subsequent sends fail with a transport error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make subsequent sends sleep before responding
    pub fn set_stall(&self, delay: Option<Duration>) {
        if let Ok(mut stall) = self.stall.lock() {
            *stall = delay;
        }
    }
}

impl Notifier for RecordingNotifier {
    async fn send(&self, mail: &OutboundMail) -> OtpResult<String> {
        let stall = self.stall.lock().ok().and_then(|s| *s);
        if let Some(delay) = stall {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(OtpError::Delivery("transport rejected message".to_string()));
        }

        let mut sent = locked(&self.sent, "notifier")?;
        sent.push(mail.clone());
        Ok(format!("mem-{}", sent.len()))
    }
}
