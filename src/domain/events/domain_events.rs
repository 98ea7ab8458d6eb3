//! Domain events - Notifications of significant state changes
//!
//! Every successful engine operation records one or more events in the
//! session journal, which the presentation layer can replay or display.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{CharacterId, Direction, ItemId, RoomId, SessionId};

/// Base data for all events
#[derive(Debug, Clone, Serialize)]
pub struct EventMetadata {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }
}

/// All domain events in the game
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    // ========================================================================
    // Session Events
    // ========================================================================

    /// A new playthrough began
    SessionStarted {
        metadata: EventMetadata,
        session_id: SessionId,
        room: RoomId,
    },

    // ========================================================================
    // Exploration Events
    // ========================================================================

    /// The player walked through an exit
    RoomEntered {
        metadata: EventMetadata,
        from: RoomId,
        direction: Direction,
        to: RoomId,
    },

    /// An item moved from a room into the inventory
    ItemTaken {
        metadata: EventMetadata,
        item: ItemId,
        room: RoomId,
    },

    // ========================================================================
    // Dialogue Events
    // ========================================================================

    /// A character spoke to the player
    DialogueSpoken {
        metadata: EventMetadata,
        speaker: CharacterId,
        dialogue: String,
    },

    /// A keeper opened their gate for the first time
    PassageUnlocked {
        metadata: EventMetadata,
        keeper: CharacterId,
        exits_added: usize,
    },

    // ========================================================================
    // Combat Events
    // ========================================================================

    /// An enemy was beaten and removed from its room
    EnemyDefeated {
        metadata: EventMetadata,
        enemy: CharacterId,
        item: ItemId,
    },

    /// Every final enemy has been defeated
    GameWon {
        metadata: EventMetadata,
        defeated: Vec<CharacterId>,
    },

    /// The player fought without the right item
    GameOver {
        metadata: EventMetadata,
        enemy: CharacterId,
    },
}

impl DomainEvent {
    /// Get the metadata for this event
    pub fn metadata(&self) -> &EventMetadata {
        match self {
            DomainEvent::SessionStarted { metadata, .. } => metadata,
            DomainEvent::RoomEntered { metadata, .. } => metadata,
            DomainEvent::ItemTaken { metadata, .. } => metadata,
            DomainEvent::DialogueSpoken { metadata, .. } => metadata,
            DomainEvent::PassageUnlocked { metadata, .. } => metadata,
            DomainEvent::EnemyDefeated { metadata, .. } => metadata,
            DomainEvent::GameWon { metadata, .. } => metadata,
            DomainEvent::GameOver { metadata, .. } => metadata,
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::SessionStarted { .. } => "SessionStarted",
            DomainEvent::RoomEntered { .. } => "RoomEntered",
            DomainEvent::ItemTaken { .. } => "ItemTaken",
            DomainEvent::DialogueSpoken { .. } => "DialogueSpoken",
            DomainEvent::PassageUnlocked { .. } => "PassageUnlocked",
            DomainEvent::EnemyDefeated { .. } => "EnemyDefeated",
            DomainEvent::GameWon { .. } => "GameWon",
            DomainEvent::GameOver { .. } => "GameOver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = DomainEvent::ItemTaken {
            metadata: EventMetadata::default(),
            item: ItemId::from_name("Royal Seal"),
            room: RoomId::from_name("Wizard's Tower"),
        };

        let json = serde_json::to_value(&event).expect("serialization should succeed");
        assert_eq!(json["type"], "ItemTaken");
        assert_eq!(json["item"], "royal_seal");
        assert_eq!(event.event_type(), "ItemTaken");
    }
}
