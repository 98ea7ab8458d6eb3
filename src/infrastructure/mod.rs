//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Castle: the built-in world blueprint
//! - Blueprint sources: built-in and JSON file loading
//! - Config: Application configuration
//! - Session adapter: AdventurePort over one local session
//! - Console: line-based text front end

pub mod blueprint_source;
pub mod castle;
pub mod config;
pub mod console;
pub mod session_adapter;
