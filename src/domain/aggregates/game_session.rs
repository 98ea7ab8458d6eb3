//! Game session - The mutable state of one player's game
//!
//! A session moves through `NotStarted -> InProgress -> {Won, Lost}` and
//! returns to `NotStarted` on reset. The live world, position, inventory and
//! defeated set only exist while a playthrough does.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use serde::Serialize;

use crate::domain::aggregates::WorldAggregate;
use crate::domain::entities::{Inventory, Room};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{CharacterId, RoomId, SessionId, SessionSettings};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::NotStarted => "not started",
            SessionState::InProgress => "in progress",
            SessionState::Won => "won",
            SessionState::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// Everything that changes while playing
#[derive(Debug, Clone)]
pub struct Playthrough {
    pub world: WorldAggregate,
    pub current_room: RoomId,
    pub inventory: Inventory,
    /// Grows monotonically for the life of the playthrough
    pub defeated: BTreeSet<CharacterId>,
}

impl Playthrough {
    /// Start at the world's starting room with empty hands
    pub fn new(world: WorldAggregate) -> Self {
        let current_room = world.start_room().clone();
        Self {
            world,
            current_room,
            inventory: Inventory::new(),
            defeated: BTreeSet::new(),
        }
    }

    pub fn room(&self) -> Option<&Room> {
        self.world.find_room(&self.current_room)
    }

    pub fn room_mut(&mut self) -> Option<&mut Room> {
        self.world.find_room_mut(&self.current_room)
    }

    /// Whether every final enemy has been defeated
    pub fn all_final_enemies_defeated(&self) -> bool {
        self.world.final_enemies().is_subset(&self.defeated)
    }
}

#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    state: SessionState,
    playthrough: Option<Playthrough>,
    journal: VecDeque<DomainEvent>,
    max_journal_length: usize,
}

impl GameSession {
    pub fn new(settings: &SessionSettings) -> Self {
        Self {
            id: SessionId::new(),
            state: SessionState::NotStarted,
            playthrough: None,
            journal: VecDeque::new(),
            max_journal_length: settings.max_journal_length,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The current or most recently finished playthrough
    pub fn playthrough(&self) -> Option<&Playthrough> {
        self.playthrough.as_ref()
    }

    /// The playthrough, only while it is in progress
    pub fn active_mut(&mut self) -> Option<&mut Playthrough> {
        match self.state {
            SessionState::InProgress => self.playthrough.as_mut(),
            _ => None,
        }
    }

    /// Replace any previous state with a fresh playthrough
    pub fn begin(&mut self, world: WorldAggregate) -> &Playthrough {
        self.id = SessionId::new();
        self.state = SessionState::InProgress;
        self.journal.clear();
        self.playthrough.insert(Playthrough::new(world))
    }

    /// End the playthrough in a terminal state; the final world is kept for display
    pub fn finish(&mut self, outcome: SessionState) {
        debug_assert!(outcome.is_terminal());
        self.state = outcome;
    }

    pub fn reset(&mut self) {
        self.state = SessionState::NotStarted;
        self.playthrough = None;
        self.journal.clear();
    }

    // ========================================================================
    // Journal
    // ========================================================================

    /// Append an event, trimming the oldest beyond the configured length
    pub fn record(&mut self, event: DomainEvent) {
        self.journal.push_back(event);
        while self.journal.len() > self.max_journal_length {
            self.journal.pop_front();
        }
    }

    pub fn journal(&self) -> impl Iterator<Item = &DomainEvent> {
        self.journal.iter()
    }

    pub fn journal_length(&self) -> usize {
        self.journal.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::blueprint::{CharacterSeed, ItemSeed, RoomSeed, WorldBlueprint};
    use crate::domain::events::EventMetadata;

    fn tiny_world() -> WorldAggregate {
        let blueprint = WorldBlueprint {
            name: "Shed".to_string(),
            start_room: "Shed".to_string(),
            rooms: vec![RoomSeed {
                name: "Shed".to_string(),
                description: "A garden shed.".to_string(),
            }],
            items: vec![ItemSeed {
                name: "Newspaper".to_string(),
                description: "Yesterday's news, rolled tight".to_string(),
                room: "Shed".to_string(),
            }],
            characters: vec![CharacterSeed {
                name: "Wasp".to_string(),
                description: "an angry wasp".to_string(),
                conversation: "Bzz".to_string(),
                room: "Shed".to_string(),
                weakness: Some("newspaper".to_string()),
            }],
            passages: vec![],
            gates: vec![],
            conditional_lines: vec![],
            final_enemies: vec!["Wasp".to_string()],
        };
        WorldAggregate::from_blueprint(&blueprint).unwrap()
    }

    fn spoken(line: &str) -> DomainEvent {
        DomainEvent::DialogueSpoken {
            metadata: EventMetadata::default(),
            speaker: CharacterId::from_name("Wasp"),
            dialogue: line.to_string(),
        }
    }

    #[test]
    fn test_lifecycle() {
        let mut session = GameSession::new(&SessionSettings::default());
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.active_mut().is_none());

        let first_id = session.id();
        session.begin(tiny_world());
        assert_eq!(session.state(), SessionState::InProgress);
        assert_ne!(session.id(), first_id);
        assert!(session.active_mut().is_some());

        session.finish(SessionState::Lost);
        assert!(session.active_mut().is_none());
        assert!(session.playthrough().is_some());

        session.reset();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.playthrough().is_none());
    }

    #[test]
    fn test_playthrough_starts_at_start_room() {
        let playthrough = Playthrough::new(tiny_world());
        assert_eq!(playthrough.current_room.as_str(), "shed");
        assert!(playthrough.inventory.is_empty());
        assert!(!playthrough.all_final_enemies_defeated());
    }

    #[test]
    fn test_journal_is_bounded() {
        let mut session = GameSession::new(&SessionSettings {
            max_journal_length: 3,
        });
        for i in 1..=5 {
            session.record(spoken(&format!("Line {}", i)));
        }

        assert_eq!(session.journal_length(), 3);
        let first = session.journal().next();
        assert!(matches!(
            first,
            Some(DomainEvent::DialogueSpoken { dialogue, .. }) if dialogue == "Line 3"
        ));
    }

    #[test]
    fn test_begin_clears_journal() {
        let mut session = GameSession::new(&SessionSettings::default());
        session.record(spoken("Bzz"));
        session.begin(tiny_world());
        assert_eq!(session.journal_length(), 0);
    }
}
