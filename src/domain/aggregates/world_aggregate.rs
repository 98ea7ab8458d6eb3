//! World Aggregate - The live room graph of a single playthrough
//!
//! Rooms are kept in a registry keyed by id and exits point at ids, never at
//! rooms. All modifications to the graph (opening passages, removing items,
//! clearing occupants) go through this aggregate root to keep the graph
//! consistent.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::aggregates::blueprint::{PassageSeed, WorldBlueprint};
use crate::domain::entities::{Character, Inventory, Item, Room};
use crate::domain::error::{require_text, EntityError};
use crate::domain::value_objects::{CharacterId, Direction, ItemId, RoomId};

/// Passages opened by talking to a keeper while carrying an item
#[derive(Debug, Clone)]
pub struct Gate {
    pub keeper: CharacterId,
    pub required_item: ItemId,
    pub edges: Vec<(RoomId, Direction, RoomId)>,
    pub granted_line: String,
    pub refused_line: String,
}

#[derive(Debug, Clone)]
pub struct ConditionalLine {
    pub character: CharacterId,
    pub required_item: ItemId,
    pub line: String,
}

/// The World Aggregate Root
#[derive(Debug, Clone)]
pub struct WorldAggregate {
    name: String,
    /// Rooms in declaration order
    rooms: Vec<Room>,
    start_room: RoomId,
    gates: Vec<Gate>,
    conditional_lines: Vec<ConditionalLine>,
    final_enemies: BTreeSet<CharacterId>,
    opened_gates: BTreeSet<CharacterId>,
}

impl WorldAggregate {
    /// Build a pristine world from its blueprint
    ///
    /// # Invariants
    /// - Every entity passes construction validation
    /// - Room, item and character ids are unique
    /// - Every reference resolves; each item and character is placed once
    /// - No exit direction is bound to two rooms, including after every gate opens
    /// - Final enemies exist and are enemies; gate keepers are not
    /// - Every enemy weakness names a declared item
    pub fn from_blueprint(blueprint: &WorldBlueprint) -> Result<Self, EntityError> {
        require_text("world", "name", &blueprint.name)?;

        let mut rooms: Vec<Room> = Vec::with_capacity(blueprint.rooms.len());
        for seed in &blueprint.rooms {
            let room = Room::new(&seed.name, &seed.description)?;
            if rooms.iter().any(|r| r.id() == room.id()) {
                return Err(EntityError::duplicate("room", room.id()));
            }
            rooms.push(room);
        }

        let start_room = RoomId::from_name(&blueprint.start_room);
        let mut world = Self {
            name: blueprint.name.clone(),
            rooms,
            start_room,
            gates: Vec::new(),
            conditional_lines: Vec::new(),
            final_enemies: BTreeSet::new(),
            opened_gates: BTreeSet::new(),
        };
        if world.find_room(&world.start_room).is_none() {
            return Err(EntityError::unknown("room", &world.start_room));
        }

        let mut items: BTreeSet<ItemId> = BTreeSet::new();
        for seed in &blueprint.items {
            let item = Item::new(&seed.name, &seed.description)?;
            if !items.insert(item.id().clone()) {
                return Err(EntityError::duplicate("item", item.id()));
            }
            world.room_mut_by_name(&seed.room)?.add_item(item);
        }

        let mut characters: BTreeMap<CharacterId, bool> = BTreeMap::new();
        for seed in &blueprint.characters {
            let character = match &seed.weakness {
                Some(weakness) => {
                    Character::enemy(&seed.name, &seed.description, &seed.conversation, weakness)?
                }
                None => Character::npc(&seed.name, &seed.description, &seed.conversation)?,
            };
            if let Some(weakness) = character.weakness() {
                if !items.contains(weakness) {
                    return Err(EntityError::unknown("item", weakness));
                }
            }
            if characters.insert(character.id().clone(), character.is_enemy()).is_some() {
                return Err(EntityError::duplicate("character", character.id()));
            }
            world.room_mut_by_name(&seed.room)?.place_occupant(character)?;
        }

        for passage in &blueprint.passages {
            world.apply_edges(&passage.edges())?;
        }

        for seed in &blueprint.gates {
            let keeper = CharacterId::from_name(&seed.keeper);
            match characters.get(&keeper) {
                Some(false) => {}
                Some(true) => {
                    return Err(EntityError::invalid(
                        "world",
                        format!("gate keeper {} is an enemy", keeper),
                    ))
                }
                None => return Err(EntityError::unknown("character", &keeper)),
            }
            if world.gates.iter().any(|g| g.keeper == keeper) {
                return Err(EntityError::duplicate("gate keeper", &keeper));
            }
            let required_item = ItemId::from_name(&seed.required_item);
            if !items.contains(&required_item) {
                return Err(EntityError::unknown("item", &required_item));
            }
            require_text("gate", "granted line", &seed.granted_line)?;
            world.gates.push(Gate {
                keeper,
                required_item,
                edges: seed.passages.iter().flat_map(PassageSeed::edges).collect(),
                granted_line: seed.granted_line.clone(),
                refused_line: seed.refused_line.clone(),
            });
        }

        for seed in &blueprint.conditional_lines {
            let character = CharacterId::from_name(&seed.character);
            if !characters.contains_key(&character) {
                return Err(EntityError::unknown("character", &character));
            }
            let required_item = ItemId::from_name(&seed.required_item);
            if !items.contains(&required_item) {
                return Err(EntityError::unknown("item", &required_item));
            }
            require_text("conditional line", "line", &seed.line)?;
            world.conditional_lines.push(ConditionalLine {
                character,
                required_item,
                line: seed.line.clone(),
            });
        }

        if blueprint.final_enemies.is_empty() {
            return Err(EntityError::invalid("world", "at least one final enemy is required"));
        }
        for name in &blueprint.final_enemies {
            let id = CharacterId::from_name(name);
            match characters.get(&id) {
                Some(true) => {
                    world.final_enemies.insert(id);
                }
                Some(false) => {
                    return Err(EntityError::invalid(
                        "world",
                        format!("final enemy {} is not an enemy", id),
                    ))
                }
                None => return Err(EntityError::unknown("character", &id)),
            }
        }

        // Every gate must open cleanly on top of the initial layout.
        let mut rehearsal = world.clone();
        for gate in &world.gates {
            rehearsal.apply_edges(&gate.edges)?;
        }

        Ok(world)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_room(&self) -> &RoomId {
        &self.start_room
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn final_enemies(&self) -> &BTreeSet<CharacterId> {
        &self.final_enemies
    }

    pub fn is_gate_open(&self, keeper: &CharacterId) -> bool {
        self.opened_gates.contains(keeper)
    }

    // ========================================================================
    // Finders
    // ========================================================================

    pub fn find_room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == id)
    }

    pub fn find_room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id() == id)
    }

    pub fn gate_for(&self, keeper: &CharacterId) -> Option<&Gate> {
        self.gates.iter().find(|g| &g.keeper == keeper)
    }

    /// The first conditional line for `character` whose item is carried
    pub fn conditional_line(&self, character: &CharacterId, inventory: &Inventory) -> Option<&str> {
        self.conditional_lines
            .iter()
            .find(|l| &l.character == character && inventory.contains(&l.required_item))
            .map(|l| l.line.as_str())
    }

    /// Where an item currently lies, if it is in any room
    pub fn locate_item(&self, item_id: &ItemId) -> Option<&RoomId> {
        self.rooms
            .iter()
            .find(|r| r.has_item(item_id))
            .map(|r| r.id())
    }

    /// Rooms reachable from the start room over the current exits
    pub fn reachable_rooms(&self) -> BTreeSet<RoomId> {
        let mut seen = BTreeSet::new();
        let mut frontier = vec![self.start_room.clone()];
        while let Some(id) = frontier.pop() {
            if !seen.insert(id.clone()) {
                continue;
            }
            if let Some(room) = self.find_room(&id) {
                frontier.extend(room.exits().values().cloned());
            }
        }
        seen
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Add a directed exit. Both rooms must exist.
    pub fn link(&mut self, from: &RoomId, direction: Direction, to: &RoomId) -> Result<bool, EntityError> {
        if self.find_room(to).is_none() {
            return Err(EntityError::unknown("room", to));
        }
        self.find_room_mut(from)
            .ok_or_else(|| EntityError::unknown("room", from))?
            .link(direction, to.clone())
    }

    /// Open the gate held by `keeper`, returning how many exits were added.
    /// Opening an already open gate adds nothing.
    pub fn open_gate(&mut self, keeper: &CharacterId) -> Result<usize, EntityError> {
        let edges = self
            .gate_for(keeper)
            .map(|g| g.edges.clone())
            .ok_or_else(|| EntityError::unknown("gate keeper", keeper))?;
        let added = self.apply_edges(&edges)?;
        self.opened_gates.insert(keeper.clone());
        Ok(added)
    }

    fn apply_edges(&mut self, edges: &[(RoomId, Direction, RoomId)]) -> Result<usize, EntityError> {
        let mut added = 0;
        for (from, direction, to) in edges {
            if self.link(from, *direction, to)? {
                added += 1;
            }
        }
        Ok(added)
    }

    fn room_mut_by_name(&mut self, name: &str) -> Result<&mut Room, EntityError> {
        let id = RoomId::from_name(name);
        self.find_room_mut(&id)
            .ok_or_else(|| EntityError::unknown("room", &id))
    }
}
