//! World Service - Builds pristine worlds from a blueprint
//!
//! The blueprint is validated once when the service is created, so a corrupt
//! world definition aborts startup instead of surfacing mid-game.

use tracing::{debug, info, instrument};

use crate::domain::aggregates::{WorldAggregate, WorldBlueprint};
use crate::domain::error::EntityError;

pub struct WorldService {
    blueprint: WorldBlueprint,
}

impl WorldService {
    /// Create a service after checking that the blueprint builds
    #[instrument(skip(blueprint), fields(world = %blueprint.name))]
    pub fn new(blueprint: WorldBlueprint) -> Result<Self, EntityError> {
        let world = WorldAggregate::from_blueprint(&blueprint)?;
        info!(
            rooms = world.rooms().len(),
            final_enemies = world.final_enemies().len(),
            "World blueprint validated"
        );
        Ok(Self { blueprint })
    }

    pub fn blueprint(&self) -> &WorldBlueprint {
        &self.blueprint
    }

    /// A fresh world in its initial layout
    pub fn build_world(&self) -> Result<WorldAggregate, EntityError> {
        let world = WorldAggregate::from_blueprint(&self.blueprint)?;
        debug!(world = %world.name(), "Built pristine world");
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::castle::castle_blueprint;

    #[test]
    fn test_builds_are_independent() {
        let service = WorldService::new(castle_blueprint()).unwrap();
        let mut first = service.build_world().unwrap();
        let second = service.build_world().unwrap();

        let armory = crate::domain::value_objects::RoomId::from_name("Armory");
        first
            .find_room_mut(&armory)
            .unwrap()
            .remove_item(&crate::domain::value_objects::ItemId::from_name("Holy Sword"));

        assert_eq!(first.find_room(&armory).unwrap().items().len(), 1);
        assert_eq!(second.find_room(&armory).unwrap().items().len(), 2);
    }

    #[test]
    fn test_rejects_corrupt_blueprint() {
        let mut blueprint = castle_blueprint();
        blueprint.rooms[0].name = String::new();
        assert!(matches!(
            WorldService::new(blueprint),
            Err(EntityError::InvalidEntity { .. })
        ));
    }
}
