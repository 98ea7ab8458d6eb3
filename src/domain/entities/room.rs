//! Room entity - A node in the navigable location graph

use std::collections::BTreeMap;

use crate::domain::entities::{Character, Item};
use crate::domain::error::{require_text, EntityError};
use crate::domain::value_objects::{Direction, ItemId, RoomId};

/// A location the player can stand in
///
/// Exits are directed: linking north from A to B says nothing about B's south
/// exit. Targets are stored by id so rooms never reference each other
/// directly; the world aggregate resolves them.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    name: String,
    description: String,
    exits: BTreeMap<Direction, RoomId>,
    occupant: Option<Character>,
    items: Vec<Item>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, EntityError> {
        let name = name.into();
        let description = description.into();
        require_text("room", "name", &name)?;
        require_text("room", "description", &description)?;

        Ok(Self {
            id: RoomId::from_name(&name),
            name,
            description,
            exits: BTreeMap::new(),
            occupant: None,
            items: Vec::new(),
        })
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn exits(&self) -> &BTreeMap<Direction, RoomId> {
        &self.exits
    }

    pub fn exit(&self, direction: Direction) -> Option<&RoomId> {
        self.exits.get(&direction)
    }

    pub fn occupant(&self) -> Option<&Character> {
        self.occupant.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_item(&self, item_id: &ItemId) -> bool {
        self.items.iter().any(|item| item.id() == item_id)
    }

    /// Add an exit. Re-adding the same exit is a no-op; pointing an existing
    /// direction at a different room is rejected.
    ///
    /// Returns whether a new exit was added.
    pub fn link(&mut self, direction: Direction, target: RoomId) -> Result<bool, EntityError> {
        match self.exits.get(&direction) {
            Some(existing) if *existing == target => Ok(false),
            Some(_) => Err(EntityError::ConflictingExit {
                room: self.id.clone(),
                direction,
            }),
            None => {
                self.exits.insert(direction, target);
                Ok(true)
            }
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Take an item out of the room, preserving the order of the rest
    pub fn remove_item(&mut self, item_id: &ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id() == item_id)?;
        Some(self.items.remove(pos))
    }

    pub fn place_occupant(&mut self, character: Character) -> Result<(), EntityError> {
        if let Some(existing) = &self.occupant {
            return Err(EntityError::duplicate(
                "occupant",
                format!("{} already holds {}", self.id, existing.id()),
            ));
        }
        self.occupant = Some(character);
        Ok(())
    }

    pub fn clear_occupant(&mut self) -> Option<Character> {
        self.occupant.take()
    }

    pub fn describe(&self) -> String {
        let mut description = format!(
            "Looking around the {} you can see {}",
            self.name, self.description
        );
        if !self.items.is_empty() {
            description.push_str("\nYou see the following items:");
            for item in &self.items {
                description.push_str(&format!("\n- {}: {}", item.name(), item.description()));
            }
        }
        description
    }
}
