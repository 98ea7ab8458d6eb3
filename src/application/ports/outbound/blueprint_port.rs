//! Blueprint port - Where world definitions come from
//!
//! The built-in castle and JSON files on disk both implement this trait;
//! startup picks one based on configuration.

use anyhow::Result;

use crate::domain::aggregates::WorldBlueprint;

/// Port for loading the static definition of a world
pub trait BlueprintSource {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    /// Load the blueprint. Validation happens when the world is built.
    fn load_blueprint(&self) -> Result<WorldBlueprint>;
}
