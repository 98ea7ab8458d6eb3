//! Adventure port - The player-facing surface of the game
//!
//! Presentation adapters (the console loop, tests) drive the game through
//! this trait and receive render-ready views back.

use crate::application::dto::{
    DialogueResult, FightOutcome, InventoryView, ItemTaken, RoomView, WorldSnapshot,
};
use crate::application::services::GameError;
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{CharacterId, Direction, ItemId};

/// Port for playing a single game session
pub trait AdventurePort {
    /// Build a fresh world and place the player in the start room.
    ///
    /// Allowed from any state, including after a win or loss.
    fn start(&mut self) -> Result<WorldSnapshot, GameError>;

    /// Follow the exit in `direction` from the current room
    fn move_to(&mut self, direction: Direction) -> Result<RoomView, GameError>;

    /// Pick up an item lying in the current room
    fn take_item(&mut self, item: &ItemId) -> Result<ItemTaken, GameError>;

    /// Talk to the character in the current room
    fn talk(&mut self, character: &CharacterId) -> Result<DialogueResult, GameError>;

    /// Fight the enemy in the current room
    fn fight(&mut self, enemy: &CharacterId) -> Result<FightOutcome, GameError>;

    fn check_inventory(&mut self) -> Result<InventoryView, GameError>;

    fn look(&mut self) -> Result<RoomView, GameError>;

    /// Discard all progress and return to the not-started state
    fn reset(&mut self);

    fn snapshot(&self) -> WorldSnapshot;

    /// Recent events, oldest first
    fn journal(&self) -> Vec<DomainEvent>;
}
