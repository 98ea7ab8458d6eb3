//! Data Transfer Objects - For the presentation boundary
//!
//! DTOs live in the application layer so adapters can render or serialize
//! them without reaching into domain entities.

pub mod views;

pub use views::*;
