//! Strongly-typed ID wrappers for all entity types
//!
//! Newtype wrappers keep user, category and transaction IDs from being mixed
//! up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Whether `s` names this ID, either as a full UUID or as the
            /// short prefixed form shown by `Display`
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim();
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return uuid == self.0;
                }
                let short = s.strip_prefix($display_prefix).unwrap_or(s);
                short.len() >= 8 && self.0.to_string().starts_with(short)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(UserId, "usr-");
define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12); // "txn-" + 8 chars
    }

    #[test]
    fn test_id_equality() {
        let id1 = UserId::new();
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, UserId::new());
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: TransactionId = format!("txn-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_matches_short_form() {
        let id = TransactionId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(!id.matches("txn-"));
        assert!(!id.matches(&TransactionId::new().to_string()));
    }
}
