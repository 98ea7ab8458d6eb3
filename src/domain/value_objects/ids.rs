//! Strongly-typed identifiers for domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalize a display name into an identifier.
///
/// Lowercases the name and replaces every run of whitespace with a single
/// underscore, so "Holy Sword" and " holy   SWORD " both become `holy_sword`.
pub fn normalize_identifier(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Identifiers for authored world content are derived from display names,
/// so they stay stable across rebuilds of the world.
macro_rules! define_name_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Build an identifier from a display name or raw player input
            pub fn from_name(name: &str) -> Self {
                Self(normalize_identifier(name))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::from_name(name)
            }
        }
    };
}

define_id!(SessionId);
define_name_id!(RoomId);
define_name_id!(ItemId);
define_name_id!(CharacterId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("Holy Sword"), "holy_sword");
        assert_eq!(normalize_identifier("Dragon Slayer"), "dragon_slayer");
        assert_eq!(normalize_identifier("  Royal \t  SEAL "), "royal_seal");
        assert_eq!(normalize_identifier("Wizard's Tower"), "wizard's_tower");
        assert_eq!(normalize_identifier("   "), "");
    }

    #[test]
    fn test_name_ids_compare_after_normalization() {
        assert_eq!(ItemId::from_name("HOLY sword"), ItemId::from("holy_sword"));
        assert_ne!(ItemId::from_name("Dragon Slayer"), ItemId::from("holy_sword"));
        assert_eq!(RoomId::from_name("Great Hall").to_string(), "great_hall");
    }

    #[test]
    fn test_name_id_serializes_as_plain_string() {
        let id = CharacterId::from_name("Skeleton Warrior");
        let json = serde_json::to_string(&id).expect("serialization should succeed");
        assert_eq!(json, "\"skeleton_warrior\"");
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
