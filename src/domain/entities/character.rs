//! Character entity - Neutral NPCs and enemies occupying rooms

use serde::{Deserialize, Serialize};

use crate::domain::entities::Item;
use crate::domain::error::{require_text, EntityError};
use crate::domain::value_objects::{CharacterId, ItemId};

/// What kind of occupant a character is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CharacterKind {
    /// Talks, never fights
    Npc,
    /// Defeated only by an item whose identifier matches the weakness
    Enemy { weakness: ItemId },
}

/// A character occupying a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId,
    name: String,
    description: String,
    conversation: String,
    kind: CharacterKind,
}

impl Character {
    /// Create a neutral character
    pub fn npc(
        name: impl Into<String>,
        description: impl Into<String>,
        conversation: impl Into<String>,
    ) -> Result<Self, EntityError> {
        Self::build(name.into(), description.into(), conversation.into(), CharacterKind::Npc)
    }

    /// Create an enemy with the given weakness
    ///
    /// The weakness is normalized the same way item names are, so both
    /// `"holy_sword"` and `"Holy Sword"` name the same item.
    pub fn enemy(
        name: impl Into<String>,
        description: impl Into<String>,
        conversation: impl Into<String>,
        weakness: &str,
    ) -> Result<Self, EntityError> {
        let weakness = ItemId::from_name(weakness);
        if weakness.is_empty() {
            return Err(EntityError::invalid("enemy", "weakness cannot be empty"));
        }
        Self::build(
            name.into(),
            description.into(),
            conversation.into(),
            CharacterKind::Enemy { weakness },
        )
    }

    fn build(
        name: String,
        description: String,
        conversation: String,
        kind: CharacterKind,
    ) -> Result<Self, EntityError> {
        let entity = match kind {
            CharacterKind::Npc => "character",
            CharacterKind::Enemy { .. } => "enemy",
        };
        require_text(entity, "name", &name)?;
        require_text(entity, "description", &description)?;

        Ok(Self {
            id: CharacterId::from_name(&name),
            name,
            description,
            conversation,
            kind,
        })
    }

    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &CharacterKind {
        &self.kind
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, CharacterKind::Enemy { .. })
    }

    pub fn weakness(&self) -> Option<&ItemId> {
        match &self.kind {
            CharacterKind::Enemy { weakness } => Some(weakness),
            CharacterKind::Npc => None,
        }
    }

    pub fn describe(&self) -> String {
        format!("You have met {}, {}", self.name, self.description)
    }

    pub fn converse(&self) -> String {
        format!("{} says '{}'", self.name, self.conversation)
    }

    /// Whether `item` defeats this character. Neutral characters cannot be beaten.
    pub fn fight(&self, item: &Item) -> bool {
        self.weakness()
            .is_some_and(|weakness| ItemId::from_name(item.name()) == *weakness)
    }
}
