//! Aggregates - Cluster of domain objects treated as a single unit

pub mod blueprint;
pub mod game_session;
pub mod world_aggregate;

pub use blueprint::{
    CharacterSeed, ConditionalLineSeed, GateSeed, ItemSeed, PassageSeed, RoomSeed, WorldBlueprint,
};
pub use game_session::{GameSession, Playthrough, SessionState};
pub use world_aggregate::{ConditionalLine, Gate, WorldAggregate};
