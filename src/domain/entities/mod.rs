//! Domain entities - Core game objects with identity

mod character;
mod inventory;
mod item;
mod room;

pub use character::{Character, CharacterKind};
pub use inventory::Inventory;
pub use item::Item;
pub use room::Room;
