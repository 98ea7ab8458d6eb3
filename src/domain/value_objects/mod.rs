//! Value objects - Immutable objects defined by their attributes

mod direction;
mod ids;
mod settings;

pub use direction::{Direction, ParseDirectionError};
pub use ids::*;
pub use settings::SessionSettings;
