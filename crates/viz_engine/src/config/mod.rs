//! Configuration system
//!
//! File-backed configuration with TOML and RON support. Subsystem config
//! structs derive serde traits and opt into file loading through [`Config`].

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// File format a config path resolves to
fn format_of(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some("toml"),
        Some("ron") => Some("ron"),
        _ => None,
    }
}

/// Configuration trait
///
/// Any serde-capable config struct with sane defaults can be loaded from and
/// saved to a TOML or RON file; the format is picked from the file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = format_of(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match format {
            "toml" => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = format_of(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let contents = match format {
            "toml" => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            _ => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
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

/// Scene attachment subsystem configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Whether freshly allocated attachments start visible
    pub default_visible: bool,

    /// Capacity reserved for an attachment's shape list up front
    pub shape_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            default_visible: true,
            shape_capacity: 16,
        }
    }
}

impl Config for SceneConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_config_defaults() {
        let config = SceneConfig::default();
        assert!(config.default_visible);
        assert_eq!(config.shape_capacity, 16);
    }

    #[test]
    fn test_scene_config_toml_round_trip() {
        let config = SceneConfig {
            default_visible: false,
            shape_capacity: 4,
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&text).unwrap();

        assert!(!parsed.default_visible);
        assert_eq!(parsed.shape_capacity, 4);
    }

    #[test]
    fn test_unsupported_format() {
        let config = SceneConfig::default();
        let result = config.save_to_file("scene.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
