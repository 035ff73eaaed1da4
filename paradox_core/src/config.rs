//! Session configuration, optionally loaded from a TOML file.
//!
//! ```toml
//! inventory_capacity = 10
//!
//! [start]
//! x = 3
//! y = 5
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{GRID_SIZE, Position, inventory::DEFAULT_CAPACITY};

/// Smallest inventory that can still finish the chain.
///
/// The research manual is never consumed, so before the last puzzle the
/// player holds it, three reward items and the strange flower at once.
pub const MIN_CAPACITY: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("start position {0} is outside the mansion grid")]
    StartOutOfBounds(Position),
    #[error("inventory capacity must be at least {min}, got {0}", min = MIN_CAPACITY)]
    CapacityTooSmall(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Where the player stands when the session begins. Empty space outside
    /// the Main Laboratory by default.
    pub start: Position,
    pub inventory_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start: Position::new(3, 5),
            inventory_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start.x >= GRID_SIZE || self.start.y >= GRID_SIZE {
            return Err(ConfigError::StartOutOfBounds(self.start));
        }
        if self.inventory_capacity < MIN_CAPACITY {
            return Err(ConfigError::CapacityTooSmall(self.inventory_capacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start, Position::new(3, 5));
        assert_eq!(config.inventory_capacity, 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("inventory_capacity = 6").unwrap();
        assert_eq!(config.inventory_capacity, 6);
        assert_eq!(config.start, Position::new(3, 5));

        let config = GameConfig::from_toml_str("[start]\nx = 0\ny = 9\n").unwrap();
        assert_eq!(config.start, Position::new(0, 9));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            GameConfig::from_toml_str("[start]\nx = 10\ny = 0\n"),
            Err(ConfigError::StartOutOfBounds(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("inventory_capacity = 1"),
            Err(ConfigError::CapacityTooSmall(1))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("difficulty = \"hard\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_capacity_must_fit_the_whole_chain() {
        assert!(matches!(
            GameConfig::from_toml_str("inventory_capacity = 4"),
            Err(ConfigError::CapacityTooSmall(4))
        ));
        let config = GameConfig::from_toml_str("inventory_capacity = 5").unwrap();
        assert_eq!(config.inventory_capacity, MIN_CAPACITY);
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
