//! Application services - Use case implementations
//!
//! `WorldService` owns the world definition and builds pristine worlds from
//! it; `AdventureService` runs player actions against a `GameSession`.

pub mod adventure_service;
pub mod world_service;

pub use adventure_service::{AdventureService, GameError};
pub use world_service::WorldService;
