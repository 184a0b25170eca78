//! Configuration system

pub use serde::Deserialize;

use std::path::Path;

/// Configuration trait
pub trait Config: for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from file, or the defaults when the file is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            log::info!("Loading configuration from {}", path);
            Self::load_from_file(path)
        } else {
            log::info!("No configuration at {}, using defaults", path);
            Ok(Self::default())
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

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are out of range
    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        width: u32,
        title: String,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { width: 640, title: "sample".to_string() }
        }
    }

    impl Config for Sample {}

    fn temp_path(name: &str) -> String {
        std::env::temp_dir().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_toml_loads_from_file() {
        let path = temp_path("rust_engine_config_test.toml");
        std::fs::write(&path, "width = 800\ntitle = \"saved\"\n").unwrap();
        let expected = Sample { width: 800, title: "saved".to_string() };
        assert_eq!(Sample::load_from_file(&path).unwrap(), expected);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let path = temp_path("rust_engine_config_broken.toml");
        std::fs::write(&path, "width = \"wide\"\n").unwrap();
        assert!(matches!(Sample::load_or_default(&path), Err(ConfigError::Parse(_))));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = Sample::load_or_default(&temp_path("rust_engine_config_absent.toml")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let path = temp_path("rust_engine_config_partial.ron");
        std::fs::write(&path, "(width: 1024)").unwrap();
        let loaded = Sample::load_from_file(&path).unwrap();
        assert_eq!(loaded.width, 1024);
        assert_eq!(loaded.title, "sample");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = temp_path("rust_engine_config_test.ini");
        std::fs::write(&path, "width=1").unwrap();
        assert!(matches!(Sample::load_from_file(&path), Err(ConfigError::UnsupportedFormat(_))));
        std::fs::remove_file(&path).unwrap();
    }
}
