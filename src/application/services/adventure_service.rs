//! Adventure Service - The session engine
//!
//! Implements the player's actions against an explicit `GameSession`:
//! movement, taking items, dialogue (including gated passages), combat and
//! the session lifecycle. Every operation either completes or returns a
//! typed `GameError`, leaving the session untouched on failure.

use tracing::{debug, info, instrument, warn};

use crate::application::dto::{
    DialogueResult, FightOutcome, InventoryView, ItemTaken, ItemView, RoomView, WorldSnapshot,
};
use crate::application::services::world_service::WorldService;
use crate::domain::aggregates::{GameSession, Playthrough, SessionState};
use crate::domain::entities::Room;
use crate::domain::error::EntityError;
use crate::domain::events::{DomainEvent, EventMetadata};
use crate::domain::value_objects::{CharacterId, Direction, ItemId};

/// Errors that can occur while playing
#[derive(Debug, Clone, thiserror::Error)]
pub enum GameError {
    #[error("You can't go {direction} from the {room}")]
    InvalidDirection { room: String, direction: Direction },

    #[error("Item not available: {0}")]
    ItemNotAvailable(ItemId),

    #[error("Cannot {operation} while the game is {state}")]
    InvalidSessionState {
        operation: &'static str,
        state: SessionState,
    },

    #[error("Character not present: {0}")]
    CharacterNotPresent(CharacterId),

    #[error("Not an enemy: {0}")]
    NotAnEnemy(CharacterId),

    #[error("World definition error: {0}")]
    World(#[from] EntityError),
}

pub struct AdventureService {
    worlds: WorldService,
}

impl AdventureService {
    pub fn new(worlds: WorldService) -> Self {
        Self { worlds }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Rebuild the world and place the player at the start, from any state
    #[instrument(skip(self, session))]
    pub fn start(&self, session: &mut GameSession) -> Result<WorldSnapshot, GameError> {
        let world = self.worlds.build_world()?;
        let room = session.begin(world).current_room.clone();
        let session_id = session.id();
        session.record(DomainEvent::SessionStarted {
            metadata: EventMetadata::default(),
            session_id,
            room: room.clone(),
        });

        info!(session_id = %session_id, room = %room, "Game started");
        Ok(self.snapshot(session))
    }

    #[instrument(skip(self, session))]
    pub fn reset(&self, session: &mut GameSession) {
        let previous = session.state();
        session.reset();
        info!(session_id = %session.id(), previous = %previous, "Game reset");
    }

    pub fn snapshot(&self, session: &GameSession) -> WorldSnapshot {
        WorldSnapshot::new(session.id(), session.state(), session.playthrough())
    }

    // ========================================================================
    // Exploration
    // ========================================================================

    /// Re-render the current room
    pub fn look(&self, session: &mut GameSession) -> Result<RoomView, GameError> {
        let play = active(session, "look")?;
        Ok(RoomView::from_room(current_room(play)?, &play.world))
    }

    #[instrument(skip(self, session))]
    pub fn move_to(&self, session: &mut GameSession, direction: Direction) -> Result<RoomView, GameError> {
        let play = active(session, "move")?;
        let room = current_room(play)?;
        let Some(target) = room.exit(direction).cloned() else {
            warn!(room = %room.id(), direction = %direction, "No exit in that direction");
            return Err(GameError::InvalidDirection {
                room: room.name().to_string(),
                direction,
            });
        };

        let from = std::mem::replace(&mut play.current_room, target.clone());
        let view = RoomView::from_room(current_room(play)?, &play.world);

        debug!(from = %from, to = %target, "Player moved");
        session.record(DomainEvent::RoomEntered {
            metadata: EventMetadata::default(),
            from,
            direction,
            to: target,
        });
        Ok(view)
    }

    /// Move an item from the current room into the inventory.
    ///
    /// Taking something already held, or not in this room, changes nothing.
    #[instrument(skip(self, session))]
    pub fn take_item(&self, session: &mut GameSession, item_id: &ItemId) -> Result<ItemTaken, GameError> {
        let play = active(session, "take items")?;
        if play.inventory.contains(item_id) {
            warn!(item = %item_id, "Item already held");
            return Err(GameError::ItemNotAvailable(item_id.clone()));
        }

        let room_id = play.current_room.clone();
        let room = play
            .room_mut()
            .ok_or_else(|| EntityError::unknown("room", &room_id))?;
        let Some(item) = room.remove_item(item_id) else {
            warn!(item = %item_id, room = %room_id, "Item not in room");
            return Err(GameError::ItemNotAvailable(item_id.clone()));
        };

        let view = ItemView::from(&item);
        if let Err(item) = play.inventory.insert(item) {
            let id = item.id().clone();
            if let Some(room) = play.room_mut() {
                room.add_item(item);
            }
            return Err(GameError::ItemNotAvailable(id));
        }

        debug!(item = %item_id, room = %room_id, "Item taken");
        session.record(DomainEvent::ItemTaken {
            metadata: EventMetadata::default(),
            item: item_id.clone(),
            room: room_id.clone(),
        });
        Ok(ItemTaken {
            item: view,
            room: room_id,
        })
    }

    #[instrument(skip(self, session))]
    pub fn check_inventory(&self, session: &mut GameSession) -> Result<InventoryView, GameError> {
        let play = active(session, "check inventory")?;
        Ok(InventoryView::from(&play.inventory))
    }

    // ========================================================================
    // Dialogue
    // ========================================================================

    /// Talk to the character in the current room.
    ///
    /// A gate keeper opens their passages when the player carries the
    /// required item; opening is idempotent, so talking again only repeats
    /// the granted line.
    #[instrument(skip(self, session))]
    pub fn talk(&self, session: &mut GameSession, character_id: &CharacterId) -> Result<DialogueResult, GameError> {
        let play = active(session, "talk")?;
        let character = current_room(play)?
            .occupant()
            .filter(|c| c.id() == character_id)
            .cloned()
            .ok_or_else(|| GameError::CharacterNotPresent(character_id.clone()))?;

        let mut unlocked_event = None;
        let (text, unlocked) = match play.world.gate_for(character.id()).cloned() {
            Some(gate) if play.inventory.contains(&gate.required_item) => {
                let first_time = !play.world.is_gate_open(character.id());
                let exits_added = play.world.open_gate(character.id())?;
                if first_time {
                    info!(keeper = %character.id(), exits_added, "Passages unlocked");
                    unlocked_event = Some(DomainEvent::PassageUnlocked {
                        metadata: EventMetadata::default(),
                        keeper: character.id().clone(),
                        exits_added,
                    });
                }
                (gate.granted_line, true)
            }
            Some(gate) if !gate.refused_line.trim().is_empty() => {
                (format!("{}\n{}", character.converse(), gate.refused_line), false)
            }
            _ => match play.world.conditional_line(character.id(), &play.inventory) {
                Some(line) => (line.to_string(), false),
                None => (character.converse(), false),
            },
        };

        session.record(DomainEvent::DialogueSpoken {
            metadata: EventMetadata::default(),
            speaker: character.id().clone(),
            dialogue: text.clone(),
        });
        if let Some(event) = unlocked_event {
            session.record(event);
        }

        Ok(DialogueResult {
            speaker: character.id().clone(),
            speaker_name: character.name().to_string(),
            text,
            unlocked,
        })
    }

    // ========================================================================
    // Combat
    // ========================================================================

    /// Fight the enemy in the current room with whatever the player carries.
    ///
    /// Any single matching item wins. Losing ends the game.
    #[instrument(skip(self, session))]
    pub fn fight(&self, session: &mut GameSession, enemy_id: &CharacterId) -> Result<FightOutcome, GameError> {
        let play = active(session, "fight")?;
        let enemy = current_room(play)?
            .occupant()
            .filter(|c| c.id() == enemy_id)
            .ok_or_else(|| GameError::CharacterNotPresent(enemy_id.clone()))?;
        if !enemy.is_enemy() {
            warn!(character = %enemy_id, "Refusing to fight a neutral character");
            return Err(GameError::NotAnEnemy(enemy_id.clone()));
        }

        let enemy_name = enemy.name().to_string();
        let weapon = play.inventory.find(|item| enemy.fight(item)).map(ItemView::from);

        let Some(weapon) = weapon else {
            session.finish(SessionState::Lost);
            session.record(DomainEvent::GameOver {
                metadata: EventMetadata::default(),
                enemy: enemy_id.clone(),
            });
            info!(enemy = %enemy_id, "Player was defeated");
            return Ok(FightOutcome::GameOver { enemy: enemy_name });
        };

        if let Some(room) = play.room_mut() {
            room.clear_occupant();
        }
        play.defeated.insert(enemy_id.clone());
        let won = play.all_final_enemies_defeated();
        let defeated: Vec<CharacterId> = play.defeated.iter().cloned().collect();

        info!(enemy = %enemy_id, weapon = %weapon.id, "Enemy defeated");
        session.record(DomainEvent::EnemyDefeated {
            metadata: EventMetadata::default(),
            enemy: enemy_id.clone(),
            item: weapon.id.clone(),
        });

        if won {
            session.finish(SessionState::Won);
            session.record(DomainEvent::GameWon {
                metadata: EventMetadata::default(),
                defeated: defeated.clone(),
            });
            info!(session_id = %session.id(), "Game won");
            return Ok(FightOutcome::GameWon {
                enemy: enemy_name,
                weapon: weapon.name,
                defeated,
            });
        }

        Ok(FightOutcome::EnemyDefeated {
            enemy: enemy_name,
            weapon: weapon.name,
        })
    }
}

fn active<'a>(session: &'a mut GameSession, operation: &'static str) -> Result<&'a mut Playthrough, GameError> {
    let state = session.state();
    session.active_mut().ok_or_else(|| {
        warn!(operation, state = %state, "Action rejected");
        GameError::InvalidSessionState { operation, state }
    })
}

fn current_room(play: &Playthrough) -> Result<&Room, GameError> {
    play.room()
        .ok_or_else(|| GameError::World(EntityError::unknown("room", &play.current_room)))
}
