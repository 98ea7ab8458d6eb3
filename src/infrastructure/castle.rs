//! The built-in castle world
//!
//! Seven rooms, two final enemies and one gate: the Guard opens the throne
//! room wing once the player carries the Royal Seal.

use crate::domain::aggregates::{
    CharacterSeed, ConditionalLineSeed, GateSeed, ItemSeed, PassageSeed, RoomSeed, WorldBlueprint,
};
use crate::domain::value_objects::Direction;

pub const CASTLE_ENTRANCE: &str = "Castle Entrance";
pub const GREAT_HALL: &str = "Great Hall";
pub const ARMORY: &str = "Armory";
pub const THRONE_ROOM: &str = "Throne Room";
pub const DUNGEON: &str = "Dungeon";
pub const TREASURE_ROOM: &str = "Treasure Room";
pub const WIZARDS_TOWER: &str = "Wizard's Tower";

fn room(name: &str, description: &str) -> RoomSeed {
    RoomSeed {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn item(name: &str, description: &str, room: &str) -> ItemSeed {
    ItemSeed {
        name: name.to_string(),
        description: description.to_string(),
        room: room.to_string(),
    }
}

fn character(name: &str, description: &str, conversation: &str, room: &str, weakness: Option<&str>) -> CharacterSeed {
    CharacterSeed {
        name: name.to_string(),
        description: description.to_string(),
        conversation: conversation.to_string(),
        room: room.to_string(),
        weakness: weakness.map(str::to_string),
    }
}

pub fn castle_blueprint() -> WorldBlueprint {
    WorldBlueprint {
        name: "Castle Adventure".to_string(),
        start_room: CASTLE_ENTRANCE.to_string(),
        rooms: vec![
            room(
                CASTLE_ENTRANCE,
                "A grand entrance hall with towering stone walls and ancient tapestries. A large wooden door stands before you.",
            ),
            room(
                GREAT_HALL,
                "A vast hall with a long banquet table. The walls are adorned with weapons and shields.",
            ),
            room(
                ARMORY,
                "A room filled with weapons and armor. Dust covers most of the equipment.",
            ),
            room(
                THRONE_ROOM,
                "An opulent room with a golden throne at its center. The air feels heavy with ancient power.",
            ),
            room(
                DUNGEON,
                "A dark, damp room with cells lining the walls. The sound of dripping water echoes through the chamber.",
            ),
            room(
                TREASURE_ROOM,
                "A hidden chamber filled with gold, jewels, and ancient artifacts.",
            ),
            room(
                WIZARDS_TOWER,
                "A tall tower filled with magical artifacts and ancient tomes.",
            ),
        ],
        items: vec![
            item("Holy Sword", "A gleaming sword imbued with divine power", ARMORY),
            item("Dragon Slayer", "A massive sword forged specifically to slay dragons", ARMORY),
            item("Royal Seal", "The official seal of the royal family", WIZARDS_TOWER),
        ],
        characters: vec![
            character(
                "Guard",
                "A heavily armored knight standing watch",
                "Halt, traveler! The throne room is forbidden to all without the royal seal. Legend tells of a seal hidden within these very walls, a relic of the last true king. But beware - the castle is not as abandoned as it seems. Dark forces stir in the depths...",
                GREAT_HALL,
                None,
            ),
            character(
                "Blacksmith",
                "An old dwarf working at the forge",
                "Ah, a visitor! I haven't seen a living soul in these halls for years. I see you've found the Royal Seal - that means you're worthy to be here. The armory has two powerful weapons: the Holy Sword for dealing with undead creatures, and the Dragon Slayer for facing the mighty dragon. Take what you need.",
                ARMORY,
                None,
            ),
            character(
                "Wizard",
                "An ancient wizard in flowing robes",
                "The castle is cursed, my friend. A dark magic lingers in these halls. The skeleton warrior in the dungeon and the dragon in the treasure room are but symptoms of a greater evil. You'll need powerful weapons to face them - the holy sword for the undead, and the dragon slayer for the beast. Both can be found in the armory, but you'll need the royal seal to enter.",
                WIZARDS_TOWER,
                None,
            ),
            character(
                "Skeleton Warrior",
                "A skeletal warrior wielding a rusted sword",
                "The living shall not pass! I am bound to this place by dark magic, cursed to guard these halls for eternity. Only the holy sword can break my curse and send me to my final rest.",
                DUNGEON,
                Some("holy_sword"),
            ),
            character(
                "Dragon",
                "A massive red dragon guarding the treasure",
                "You dare challenge me, mortal? I am the last of my kind, bound to guard this treasure until the end of days. The dragon slayer is the only weapon that can pierce my scales. Do you have what it takes to face me?",
                TREASURE_ROOM,
                Some("dragon_slayer"),
            ),
        ],
        passages: vec![
            PassageSeed::new(CASTLE_ENTRANCE, Direction::North, GREAT_HALL),
            PassageSeed::new(CASTLE_ENTRANCE, Direction::East, WIZARDS_TOWER),
        ],
        gates: vec![GateSeed {
            keeper: "Guard".to_string(),
            required_item: "Royal Seal".to_string(),
            passages: vec![
                PassageSeed::new(GREAT_HALL, Direction::West, THRONE_ROOM),
                PassageSeed::new(THRONE_ROOM, Direction::South, DUNGEON),
                PassageSeed::new(DUNGEON, Direction::East, TREASURE_ROOM),
                PassageSeed::new(THRONE_ROOM, Direction::West, ARMORY),
            ],
            granted_line: "The Guard says: 'Ah, you have the Royal Seal! You are indeed worthy to enter the throne room. The armory can be accessed through a hidden door in the throne room.'".to_string(),
            refused_line: "The Guard says: 'You need the Royal Seal to enter the throne room.'".to_string(),
        }],
        conditional_lines: vec![ConditionalLineSeed {
            character: "Wizard".to_string(),
            required_item: "Royal Seal".to_string(),
            line: "The Wizard says: 'Ah, I see you've found the Royal Seal! That is a powerful artifact indeed. Take it to the Guard in the Great Hall - he will grant you access to the throne room. The armory can be accessed through a secret door in the throne room.'".to_string(),
        }],
        final_enemies: vec!["Skeleton Warrior".to_string(), "Dragon".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::WorldAggregate;
    use crate::domain::value_objects::{CharacterId, RoomId};

    #[test]
    fn test_castle_builds() {
        let world = WorldAggregate::from_blueprint(&castle_blueprint()).unwrap();
        assert_eq!(world.rooms().len(), 7);
        assert_eq!(world.start_room(), &RoomId::from_name(CASTLE_ENTRANCE));
        assert!(world.final_enemies().contains(&CharacterId::from_name("Dragon")));
        assert!(world.final_enemies().contains(&CharacterId::from_name("Skeleton Warrior")));
    }

    #[test]
    fn test_locked_wing_is_unreachable_at_start() {
        let world = WorldAggregate::from_blueprint(&castle_blueprint()).unwrap();
        let reachable = world.reachable_rooms();
        assert_eq!(reachable.len(), 3);
        for name in [ARMORY, THRONE_ROOM, DUNGEON, TREASURE_ROOM] {
            assert!(!reachable.contains(&RoomId::from_name(name)), "{name} should be locked");
        }
    }

    #[test]
    fn test_guard_gate_opens_whole_wing() {
        let mut world = WorldAggregate::from_blueprint(&castle_blueprint()).unwrap();
        let added = world.open_gate(&CharacterId::from_name("Guard")).unwrap();
        assert_eq!(added, 8);
        assert_eq!(world.reachable_rooms().len(), 7);
    }

    #[test]
    fn test_blueprint_survives_json() {
        let blueprint = castle_blueprint();
        let json = blueprint.to_json().unwrap();
        assert_eq!(WorldBlueprint::from_json(&json).unwrap(), blueprint);
    }
}
