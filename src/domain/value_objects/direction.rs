//! Compass directions used to label room exits

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};


/// A direction label on a room exit
///
/// Ordering follows the declaration order, which is also the order exits are
/// listed in when a room is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player or file input that names no compass direction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("north".parse::<Direction>().ok(), Some(Direction::North));
        assert_eq!(" West ".parse::<Direction>().ok(), Some(Direction::West));
        assert_eq!("E".parse::<Direction>().ok(), Some(Direction::East));
        assert_eq!(
            "Up".parse::<Direction>(),
            Err(ParseDirectionError("up".to_string()))
        );
    }

    #[test]
    fn test_opposite_is_involutive() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::South).expect("serialization should succeed");
        assert_eq!(json, "\"south\"");
    }
}
