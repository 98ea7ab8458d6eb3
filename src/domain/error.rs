//! Errors raised while constructing entities and assembling the world
//!
//! These all indicate a corrupt world definition rather than a player
//! mistake, so callers treat them as fatal to startup.

use thiserror::Error;

use crate::domain::value_objects::{Direction, RoomId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// A required field is empty or malformed
    #[error("Invalid {kind}: {reason}")]
    InvalidEntity { kind: &'static str, reason: String },

    /// A world definition refers to something that was never declared
    #[error("Unknown {kind} referenced in world definition: {id}")]
    UnknownReference { kind: &'static str, id: String },

    /// The same identifier was declared or placed twice
    #[error("Duplicate {kind} in world definition: {id}")]
    Duplicate { kind: &'static str, id: String },

    /// An exit direction is already bound to a different room
    #[error("Exit {direction} of {room} already leads elsewhere")]
    ConflictingExit { room: RoomId, direction: Direction },
}

impl EntityError {
    pub fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEntity {
            kind,
            reason: reason.into(),
        }
    }

    pub fn unknown(kind: &'static str, id: impl ToString) -> Self {
        Self::UnknownReference {
            kind,
            id: id.to_string(),
        }
    }

    pub fn duplicate(kind: &'static str, id: impl ToString) -> Self {
        Self::Duplicate {
            kind,
            id: id.to_string(),
        }
    }
}

/// Reject blank values for required text fields
pub(crate) fn require_text(kind: &'static str, field: &str, value: &str) -> Result<(), EntityError> {
    if value.trim().is_empty() {
        return Err(EntityError::invalid(kind, format!("{} cannot be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entity_message() {
        let err = EntityError::invalid("room", "name cannot be empty");
        assert!(matches!(err, EntityError::InvalidEntity { kind: "room", .. }));
        assert_eq!(err.to_string(), "Invalid room: name cannot be empty");
    }

    #[test]
    fn test_require_text() {
        assert!(require_text("item", "name", "Holy Sword").is_ok());
        assert!(require_text("item", "name", "").is_err());
        assert!(require_text("item", "description", "  \t").is_err());
    }

    #[test]
    fn test_conflicting_exit_message() {
        let err = EntityError::ConflictingExit {
            room: RoomId::from_name("Great Hall"),
            direction: Direction::West,
        };
        assert_eq!(err.to_string(), "Exit west of great_hall already leads elsewhere");
    }
}
