//! Render-ready views handed to the presentation layer
//!
//! Views are plain serializable snapshots; holding one never borrows the
//! session, and rendering them cannot mutate the game.

use serde::Serialize;

use crate::domain::aggregates::{Playthrough, SessionState, WorldAggregate};
use crate::domain::entities::{Character, CharacterKind, Inventory, Item, Room};
use crate::domain::value_objects::{CharacterId, Direction, ItemId, RoomId, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().clone(),
            name: item.name().to_string(),
            description: item.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupantKind {
    Neutral,
    Enemy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupantView {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub kind: OccupantKind,
    /// "You have met {name}, {description}"
    pub greeting: String,
}

impl From<&Character> for OccupantView {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id().clone(),
            name: character.name().to_string(),
            description: character.description().to_string(),
            kind: match character.kind() {
                CharacterKind::Npc => OccupantKind::Neutral,
                CharacterKind::Enemy { .. } => OccupantKind::Enemy,
            },
            greeting: character.describe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitView {
    pub direction: Direction,
    pub room_id: RoomId,
    pub room_name: String,
}

/// Everything needed to draw the room the player stands in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    /// The room described in prose, items included
    pub narration: String,
    pub items: Vec<ItemView>,
    pub occupant: Option<OccupantView>,
    /// In north, south, east, west order
    pub exits: Vec<ExitView>,
}

impl RoomView {
    /// Exit targets are resolved against `world` for their display names
    pub fn from_room(room: &Room, world: &WorldAggregate) -> Self {
        let exits = room
            .exits()
            .iter()
            .map(|(direction, target)| ExitView {
                direction: *direction,
                room_id: target.clone(),
                room_name: world
                    .find_room(target)
                    .map(|r| r.name().to_string())
                    .unwrap_or_else(|| target.to_string()),
            })
            .collect();

        Self {
            id: room.id().clone(),
            name: room.name().to_string(),
            description: room.description().to_string(),
            narration: room.describe(),
            items: room.items().iter().map(ItemView::from).collect(),
            occupant: room.occupant().map(OccupantView::from),
            exits,
        }
    }

    pub fn exit_directions(&self) -> Vec<Direction> {
        self.exits.iter().map(|e| e.direction).collect()
    }

    /// "The {room} is to the {direction}" for each exit
    pub fn exit_details(&self) -> Vec<String> {
        self.exits
            .iter()
            .map(|e| format!("The {} is to the {}", e.room_name, e.direction))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub items: Vec<ItemView>,
}

impl InventoryView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Inventory> for InventoryView {
    fn from(inventory: &Inventory) -> Self {
        Self {
            items: inventory.items().iter().map(ItemView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTaken {
    pub item: ItemView,
    pub room: RoomId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueResult {
    pub speaker: CharacterId,
    pub speaker_name: String,
    pub text: String,
    /// The speaker opened (or had already opened) new passages for the player
    pub unlocked: bool,
}

/// How a fight ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FightOutcome {
    /// The enemy is gone; play continues
    EnemyDefeated { enemy: String, weapon: String },
    /// The last final enemy fell
    GameWon {
        enemy: String,
        weapon: String,
        defeated: Vec<CharacterId>,
    },
    /// The player had nothing the enemy fears
    GameOver { enemy: String },
}

impl FightOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FightOutcome::EnemyDefeated { .. })
    }
}

/// Full picture of a session, returned by `start` and on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSnapshot {
    pub session_id: SessionId,
    pub world_name: Option<String>,
    pub state: SessionState,
    /// Absent before the first start and after a reset
    pub room: Option<RoomView>,
    pub inventory: InventoryView,
    pub defeated: Vec<CharacterId>,
}

impl WorldSnapshot {
    pub fn new(session_id: SessionId, state: SessionState, playthrough: Option<&Playthrough>) -> Self {
        match playthrough {
            Some(play) => Self {
                session_id,
                world_name: Some(play.world.name().to_string()),
                state,
                room: play
                    .room()
                    .map(|room| RoomView::from_room(room, &play.world)),
                inventory: InventoryView::from(&play.inventory),
                defeated: play.defeated.iter().cloned().collect(),
            },
            None => Self {
                session_id,
                world_name: None,
                state,
                room: None,
                inventory: InventoryView { items: Vec::new() },
                defeated: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupant_kind_from_character() {
        let guard = Character::npc("Guard", "a knight", "Halt!").unwrap();
        let dragon = Character::enemy("Dragon", "a dragon", "Roar", "dragon_slayer").unwrap();

        assert_eq!(OccupantView::from(&guard).kind, OccupantKind::Neutral);
        assert_eq!(OccupantView::from(&dragon).kind, OccupantKind::Enemy);
    }

    #[test]
    fn test_fight_outcome_serialization() {
        let outcome = FightOutcome::GameOver {
            enemy: "Dragon".to_string(),
        };
        let json = serde_json::to_value(&outcome).expect("serialization should succeed");
        assert_eq!(json["outcome"], "game_over");
        assert_eq!(json["enemy"], "Dragon");
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = WorldSnapshot::new(SessionId::new(), SessionState::NotStarted, None);
        assert!(snapshot.room.is_none());
        assert!(snapshot.inventory.is_empty());

        let json = serde_json::to_value(&snapshot).expect("serialization should succeed");
        assert_eq!(json["state"], "not_started");
    }
}
