//! Application Configuration
//!
//! Configuration for the OTP application layer. Immutable after
//! construction and passed explicitly into the use cases; there is no
//! ambient global state.

use std::time::Duration;

/// OTP application configuration
///
/// The handoff cipher key and the hashing peppers are deliberately
/// separate secrets, so rotating one does not invalidate the other.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Minimum interval between issuances to the same destination
    pub resend_interval: Duration,
    /// How long a code stays verifiable after issuance
    pub validity_window: Duration,
    /// Upper bound on a single notifier call
    pub delivery_timeout: Duration,
    /// Symmetric key sealing handoff tokens (32 bytes)
    pub handoff_key: [u8; 32],
    /// Pepper mixed into code hashes (optional, application-wide secret)
    pub code_pepper: Option<Vec<u8>>,
    /// Pepper mixed into password hashes (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: 4,
            resend_interval: Duration::from_secs(120),
            validity_window: Duration::from_secs(2 * 3600),
            delivery_timeout: Duration::from_secs(10),
            handoff_key: [0u8; 32],
            code_pepper: None,
            password_pepper: None,
        }
    }
}

impl OtpConfig {
    /// Create config with a random handoff key (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut key = [0u8; 32];
        rand::rng().fill_bytes(&mut key);
        Self {
            handoff_key: key,
            ..Default::default()
        }
    }

    /// Get resend interval in milliseconds
    pub fn resend_interval_ms(&self) -> i64 {
        self.resend_interval.as_millis() as i64
    }

    /// Get validity window in milliseconds
    pub fn validity_window_ms(&self) -> i64 {
        self.validity_window.as_millis() as i64
    }

    /// Get code pepper as slice
    pub fn code_pepper(&self) -> Option<&[u8]> {
        self.code_pepper.as_deref()
    }

    /// Get password pepper as slice
    pub fn password_pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
