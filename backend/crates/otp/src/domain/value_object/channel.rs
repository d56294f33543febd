//! Delivery Channel Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel a code is delivered over
///
/// Only `Email` is exercised; `Sms` is reserved in the stored format
/// and deliberately has no delivery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryChannel {
    #[default]
    Email,
    Sms,
}

impl DeliveryChannel {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use DeliveryChannel::*;
        match self {
            Email => "email",
            Sms => "sms",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use DeliveryChannel::*;
        match code {
            "email" => Some(Email),
            "sms" => Some(Sms),
            _ => None,
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
