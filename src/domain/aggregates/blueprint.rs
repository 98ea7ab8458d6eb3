//! World blueprint - The static definition a world is rebuilt from
//!
//! Rooms are mutated during play (items taken, enemies cleared, passages
//! opened), so the pristine layout lives here, separate from the live
//! aggregate. Starting a game always builds a fresh aggregate from the
//! blueprint instead of undoing changes.
//!
//! References between seeds use display names or identifiers interchangeably;
//! both normalize to the same id.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Direction, RoomId};

/// Complete static description of a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBlueprint {
    pub name: String,
    /// Room the player starts in
    pub start_room: String,
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub items: Vec<ItemSeed>,
    #[serde(default)]
    pub characters: Vec<CharacterSeed>,
    /// Passages open from the start
    #[serde(default)]
    pub passages: Vec<PassageSeed>,
    /// Passages opened by talking to a keeper while carrying an item
    #[serde(default)]
    pub gates: Vec<GateSeed>,
    #[serde(default)]
    pub conditional_lines: Vec<ConditionalLineSeed>,
    /// Enemies that must all be defeated to win
    pub final_enemies: Vec<String>,
}

impl WorldBlueprint {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSeed {
    pub name: String,
    pub description: String,
    /// Room the item starts in
    pub room: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSeed {
    pub name: String,
    pub description: String,
    pub conversation: String,
    /// Room the character occupies at the start
    pub room: String,
    /// Present for enemies only
    #[serde(default)]
    pub weakness: Option<String>,
}

/// A direction-labelled connection between two rooms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassageSeed {
    pub from: String,
    pub direction: Direction,
    pub to: String,
    /// Also add the reverse exit using the opposite direction
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl PassageSeed {
    pub fn new(from: impl Into<String>, direction: Direction, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            direction,
            to: to.into(),
            bidirectional: true,
        }
    }

    pub fn one_way(mut self) -> Self {
        self.bidirectional = false;
        self
    }

    /// The directed edges this passage expands to
    pub fn edges(&self) -> Vec<(RoomId, Direction, RoomId)> {
        let from = RoomId::from_name(&self.from);
        let to = RoomId::from_name(&self.to);
        let mut edges = vec![(from.clone(), self.direction, to.clone())];
        if self.bidirectional {
            edges.push((to, self.direction.opposite(), from));
        }
        edges
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSeed {
    /// Character who opens the gate
    pub keeper: String,
    /// Item the player must carry when talking to the keeper
    pub required_item: String,
    pub passages: Vec<PassageSeed>,
    /// Spoken when the player carries the item
    pub granted_line: String,
    /// Appended to the keeper's conversation otherwise
    pub refused_line: String,
}

/// A line a character says instead of their usual conversation once the
/// player carries an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalLineSeed {
    pub character: String,
    pub required_item: String,
    pub line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bidirectional_passage_expands_to_two_edges() {
        let passage = PassageSeed::new("Castle Entrance", Direction::North, "Great Hall");
        let edges = passage.edges();
        assert_eq!(
            edges,
            vec![
                (RoomId::from_name("Castle Entrance"), Direction::North, RoomId::from_name("Great Hall")),
                (RoomId::from_name("Great Hall"), Direction::South, RoomId::from_name("Castle Entrance")),
            ]
        );
        assert_eq!(passage.one_way().edges().len(), 1);
    }

    #[test]
    fn test_blueprint_json_defaults() {
        let json = r#"{
            "name": "Cellar",
            "start_room": "Stairs",
            "rooms": [
                { "name": "Stairs", "description": "Steep stone steps." },
                { "name": "Cellar", "description": "Barrels everywhere." }
            ],
            "passages": [ { "from": "Stairs", "direction": "south", "to": "Cellar" } ],
            "final_enemies": ["Rat"]
        }"#;

        let blueprint = WorldBlueprint::from_json(json).expect("blueprint should parse");
        assert!(blueprint.items.is_empty());
        assert!(blueprint.gates.is_empty());
        assert!(blueprint.passages[0].bidirectional);
        assert_eq!(blueprint.passages[0].direction, Direction::South);
    }
}
