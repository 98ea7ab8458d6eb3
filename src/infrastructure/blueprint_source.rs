//! Blueprint sources - Built-in castle and JSON files on disk

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::outbound::BlueprintSource;
use crate::domain::aggregates::WorldBlueprint;
use crate::infrastructure::castle::castle_blueprint;
use crate::infrastructure::config::AppConfig;

/// The castle shipped with the game
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCastle;

impl BlueprintSource for BuiltinCastle {
    fn describe(&self) -> String {
        "built-in castle".to_string()
    }

    fn load_blueprint(&self) -> Result<WorldBlueprint> {
        Ok(castle_blueprint())
    }
}

/// A `WorldBlueprint` serialized as JSON
#[derive(Debug, Clone)]
pub struct JsonBlueprintFile {
    path: PathBuf,
}

impl JsonBlueprintFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BlueprintSource for JsonBlueprintFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_blueprint(&self) -> Result<WorldBlueprint> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read world file {}", self.path.display()))?;
        let blueprint = WorldBlueprint::from_json(&json)
            .with_context(|| format!("Invalid world file {}", self.path.display()))?;
        info!(path = %self.path.display(), world = %blueprint.name, "Loaded world blueprint");
        Ok(blueprint)
    }
}

/// Pick the blueprint source named by the configuration
pub fn source_from_config(config: &AppConfig) -> Box<dyn BlueprintSource> {
    match &config.world_file {
        Some(path) => Box::new(JsonBlueprintFile::new(path)),
        None => Box::new(BuiltinCastle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_blueprint_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = castle_blueprint().to_json().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let source = JsonBlueprintFile::new(file.path());
        let blueprint = source.load_blueprint().unwrap();
        assert_eq!(blueprint, castle_blueprint());
    }

    #[test]
    fn test_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonBlueprintFile::new(dir.path().join("missing.json"));
        let err = source.load_blueprint().unwrap_err();
        assert!(err.to_string().contains("Failed to read world file"));
    }

    #[test]
    fn test_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"name\": \"Broken\" ").unwrap();

        let err = JsonBlueprintFile::new(file.path()).load_blueprint().unwrap_err();
        assert!(err.to_string().contains("Invalid world file"));
    }

    #[test]
    fn test_config_selects_source() {
        let builtin = source_from_config(&AppConfig::default());
        assert_eq!(builtin.describe(), "built-in castle");

        let config = AppConfig {
            world_file: Some(PathBuf::from("worlds/keep.json")),
            ..AppConfig::default()
        };
        assert_eq!(source_from_config(&config).describe(), "worlds/keep.json");
    }
}
