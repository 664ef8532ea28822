//! Configuration system

pub use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration trait
///
/// File format is selected by extension; TOML and RON are supported.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Tunables for the collision detection step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Emit a debug log line for every collision record produced
    pub log_collisions: bool,

    /// Capacity reserved up front for the per-step collision record list
    pub pair_capacity: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            log_collisions: false,
            pair_capacity: 32,
        }
    }
}

impl Config for PhysicsConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physics_config_toml_round_trip() {
        let config = PhysicsConfig {
            log_collisions: true,
            pair_capacity: 128,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: PhysicsConfig = toml::from_str(&serialized).unwrap();

        assert!(restored.log_collisions);
        assert_eq!(restored.pair_capacity, 128);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = std::env::temp_dir().join("collision_engine_config_test.yaml");
        std::fs::write(&path, "log_collisions = true").unwrap();

        let err = PhysicsConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

        std::fs::remove_file(&path).ok();
    }
}
