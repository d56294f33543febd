//! Code Purpose Value Object
//!
//! The scoped reason a code was issued. Codes for different purposes
//! occupy independent ledger slots and never collide.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    VerifyEmail,
    ResetPassword,
}

impl Purpose {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Purpose::*;
        match self {
            VerifyEmail => "verify_email",
            ResetPassword => "reset_password",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Purpose::*;
        match code {
            "verify_email" => Some(VerifyEmail),
            "reset_password" => Some(ResetPassword),
            _ => None,
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_codes_roundtrip() {
        for purpose in [Purpose::VerifyEmail, Purpose::ResetPassword] {
            assert_eq!(Purpose::from_code(purpose.code()), Some(purpose));
        }
        assert_eq!(Purpose::from_code("unknown"), None);
    }

    #[test]
    fn test_purpose_display() {
        assert_eq!(Purpose::VerifyEmail.to_string(), "verify_email");
        assert_eq!(Purpose::ResetPassword.to_string(), "reset_password");
    }
}
