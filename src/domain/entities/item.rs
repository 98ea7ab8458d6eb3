//! Item entity - Collectibles found in rooms and carried by the player

use serde::{Deserialize, Serialize};

use crate::domain::error::{require_text, EntityError};
use crate::domain::value_objects::ItemId;

/// An item that can lie in a room or sit in the player's inventory
///
/// Items are never cloned between containers; moving one between a room and
/// the inventory moves the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, EntityError> {
        let name = name.into();
        let description = description.into();
        require_text("item", "name", &name)?;
        require_text("item", "description", &description)?;

        Ok(Self {
            id: ItemId::from_name(&name),
            name,
            description,
        })
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
