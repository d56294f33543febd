//! OTP Error Types
//!
//! Every failure of the one-time-code core is a typed, caller-visible
//! outcome; nothing is swallowed. The residual ledger state for each
//! variant is part of the contract:
//!
//! | Variant      | Retryable            | Residual state          |
//! |--------------|----------------------|-------------------------|
//! | `Throttled`  | after interval       | ledger unchanged        |
//! | `InvalidCode`| until expiry         | ledger unchanged        |
//! | `ExpiredCode`| no, re-issue         | record deleted          |
//! | `Delivery`   | immediately          | no record created       |
//! | `Unauthorized`| no, restart flow    | no mutation             |

use thiserror::Error;

/// OTP-specific result type alias
pub type OtpResult<T> = Result<T, OtpError>;

/// OTP-specific error variants
#[derive(Debug, Error)]
pub enum OtpError {
    /// A code was issued to this destination too recently
    #[error("A code was sent recently; wait before requesting another")]
    Throttled,

    /// No active code for this slot, or the candidate does not match
    #[error("Invalid code")]
    InvalidCode,

    /// The code's validity window has elapsed (record removed)
    #[error("Code expired")]
    ExpiredCode,

    /// The notifier could not deliver the message
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// Handoff token failed decryption, parsing, or principal lookup
    #[error("Unauthorized")]
    Unauthorized,

    /// New password rejected by policy
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OtpError {
    /// Whether the caller may retry without changing anything first
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            OtpError::InvalidCode | OtpError::Delivery(_) | OtpError::Throttled
        )
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            OtpError::Database(e) => {
                tracing::error!(error = %e, "OTP database error");
            }
            OtpError::Internal(msg) => {
                tracing::error!(message = %msg, "OTP internal error");
            }
            OtpError::Unauthorized => {
                tracing::warn!("Rejected handoff token");
            }
            OtpError::Delivery(msg) => {
                tracing::warn!(message = %msg, "Code delivery failed");
            }
            _ => {
                tracing::debug!(error = %self, "OTP error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(OtpError::Throttled.is_retryable());
        assert!(OtpError::InvalidCode.is_retryable());
        assert!(OtpError::Delivery("timeout".into()).is_retryable());
        assert!(!OtpError::ExpiredCode.is_retryable());
        assert!(!OtpError::Unauthorized.is_retryable());
        assert!(!OtpError::Internal("x".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        assert!(OtpError::Throttled.to_string().contains("recently"));
        assert!(OtpError::ExpiredCode.to_string().contains("expired"));
        assert!(
            OtpError::Delivery("smtp down".into())
                .to_string()
                .contains("smtp down")
        );
    }
}
