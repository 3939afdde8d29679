//! Configuration system
//!
//! Settings structs derive serde and implement [`Config`]; the file
//! extension picks the format (`.toml` or `.ron`).

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Load configuration from file, falling back to defaults when the file
    /// does not exist
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading configuration from {}", path.display());
            Self::load_from_file(path)
        } else {
            log::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
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

    /// The file parsed, but a value is unusable
    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct SampleConfig {
        name: String,
        fps: f32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "sample".to_string(),
                fps: 60.0,
            }
        }
    }

    impl Config for SampleConfig {}

    fn scratch_path(file: &str) -> PathBuf {
        std::env::temp_dir().join(format!("okna-config-{}-{file}", std::process::id()))
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let path = scratch_path("partial.toml");
        std::fs::write(&path, "fps = 30.0\n").unwrap();

        let config = SampleConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.name, "sample");
        assert_eq!(config.fps, 30.0);
    }

    #[test]
    fn test_ron_file_is_saved_and_loaded() {
        let path = scratch_path("saved.ron");
        let config = SampleConfig {
            name: "ron".to_string(),
            fps: 144.0,
        };

        config.save_to_file(&path).unwrap();
        let loaded = SampleConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_absent_file_falls_back_to_default() {
        let config = SampleConfig::load_or_default(scratch_path("absent.toml")).unwrap();

        assert_eq!(config, SampleConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_path("broken.toml");
        std::fs::write(&path, "fps = \"fast\"\n").unwrap();

        let result = SampleConfig::load_or_default(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let path = scratch_path("settings.ini");
        std::fs::write(&path, "").unwrap();

        let result = SampleConfig::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
