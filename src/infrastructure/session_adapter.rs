//! Session Adapter - Implements AdventurePort for a single local session
//!
//! Owns one `GameSession` together with the service that runs it, so the
//! presentation layer only ever sees the port.

use tracing::info;

use crate::application::dto::{
    DialogueResult, FightOutcome, InventoryView, ItemTaken, RoomView, WorldSnapshot,
};
use crate::application::ports::inbound::AdventurePort;
use crate::application::services::{AdventureService, GameError, WorldService};
use crate::domain::aggregates::GameSession;
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{CharacterId, Direction, ItemId, SessionSettings};

/// Adapter that pairs an AdventureService with the session it drives
pub struct SessionAdapter {
    service: AdventureService,
    session: GameSession,
}

impl SessionAdapter {
    pub fn new(worlds: WorldService, settings: &SessionSettings) -> Self {
        let session = GameSession::new(settings);
        info!(session_id = %session.id(), world = %worlds.blueprint().name, "Session created");
        Self {
            service: AdventureService::new(worlds),
            session,
        }
    }

    /// Get the inner session (for inspection in adapters and tests)
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}

impl AdventurePort for SessionAdapter {
    fn start(&mut self) -> Result<WorldSnapshot, GameError> {
        self.service.start(&mut self.session)
    }

    fn move_to(&mut self, direction: Direction) -> Result<RoomView, GameError> {
        self.service.move_to(&mut self.session, direction)
    }

    fn take_item(&mut self, item: &ItemId) -> Result<ItemTaken, GameError> {
        self.service.take_item(&mut self.session, item)
    }

    fn talk(&mut self, character: &CharacterId) -> Result<DialogueResult, GameError> {
        self.service.talk(&mut self.session, character)
    }

    fn fight(&mut self, enemy: &CharacterId) -> Result<FightOutcome, GameError> {
        self.service.fight(&mut self.session, enemy)
    }

    fn check_inventory(&mut self) -> Result<InventoryView, GameError> {
        self.service.check_inventory(&mut self.session)
    }

    fn look(&mut self) -> Result<RoomView, GameError> {
        self.service.look(&mut self.session)
    }

    fn reset(&mut self) {
        self.service.reset(&mut self.session)
    }

    fn snapshot(&self) -> WorldSnapshot {
        self.service.snapshot(&self.session)
    }

    fn journal(&self) -> Vec<DomainEvent> {
        self.session.journal().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::SessionState;
    use crate::infrastructure::castle::castle_blueprint;

    fn adapter(max_journal_length: usize) -> SessionAdapter {
        let worlds = WorldService::new(castle_blueprint()).unwrap();
        SessionAdapter::new(worlds, &SessionSettings { max_journal_length })
    }

    #[test]
    fn test_port_drives_session() {
        let mut port = adapter(64);
        assert_eq!(port.snapshot().state, SessionState::NotStarted);

        port.start().unwrap();
        let hall = port.move_to(Direction::North).unwrap();
        assert_eq!(hall.name, "Great Hall");
        assert_eq!(port.snapshot().room.map(|r| r.name), Some("Great Hall".to_string()));

        port.reset();
        assert_eq!(port.session().state(), SessionState::NotStarted);
        assert!(port.journal().is_empty());
    }

    #[test]
    fn test_start_assigns_fresh_session_id() {
        let mut port = adapter(64);
        let first = port.start().unwrap().session_id;
        let second = port.start().unwrap().session_id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_journal_is_bounded() {
        let mut port = adapter(3);
        port.start().unwrap();
        for _ in 0..4 {
            port.move_to(Direction::North).unwrap();
            port.move_to(Direction::South).unwrap();
        }

        let journal = port.journal();
        assert_eq!(journal.len(), 3);
        assert!(journal.iter().all(|e| e.event_type() == "RoomEntered"));
    }
}
