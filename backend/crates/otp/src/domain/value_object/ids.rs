//! Typed ID Wrappers
//!
//! UUID newtypes so a principal reference can never be confused with
//! a ledger row identifier. The principal side is deliberately opaque:
//! end-user and staff accounts both map onto `PrincipalId`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID (UUID v4)
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Convert to UUID
            pub fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id! {
    /// Owning account of a code (end-user or staff)
    PrincipalId
}

uuid_id! {
    /// Surrogate identifier of a ledger record
    CodeId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_new_is_v4() {
        let id = PrincipalId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = CodeId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_id_display_matches_uuid() {
        let uuid = Uuid::new_v4();
        let id = PrincipalId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
