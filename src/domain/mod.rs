//! Domain layer - Core game rules with no knowledge of presentation
//!
//! This layer contains:
//! - Entities: Room, Item, Character, Inventory
//! - Value Objects: identifiers, directions, session settings
//! - Aggregates: the world graph, its blueprint, and the game session
//! - Domain Events: state changes recorded in the session journal

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod value_objects;
