//! Castle Adventure - A text adventure about breaking a castle's curse
//!
//! The crate is split the hexagonal way:
//! - `domain`: rooms, items, characters, the world graph and the game session
//! - `application`: the session engine, its ports and render-ready DTOs
//! - `infrastructure`: the built-in castle, blueprint loading, config and the console

pub mod application;
pub mod domain;
pub mod infrastructure;
