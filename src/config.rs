//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\mvnfo\config.toml
//! - macOS: ~/Library/Application Support/mvnfo/config.toml
//! - Linux: ~/.config/mvnfo/config.toml
//!
//! The config file is human-readable and editable. Command-line flags
//! override whatever it contains.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::enrichment::audiodb::DEFAULT_API_KEY;
use crate::enrichment::imvdb::DEFAULT_TITLE_THRESHOLD;
use crate::enrichment::reconcile::DEFAULT_ARTIST_THRESHOLD;
use crate::enrichment::service::IdentifyConfig;
use crate::scanner;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// Match thresholds
    pub matching: MatchingConfig,

    /// Batch run settings
    pub batch: BatchConfig,
}

/// API credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// IMVDb application key
    pub imvdb_api_key: Option<String>,

    /// TheAudioDB key ("2" is the public test key)
    pub audiodb_api_key: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            imvdb_api_key: None,
            audiodb_api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

/// Similarity thresholds, 0 to 100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum title similarity for a fuzzy IMVDb match
    pub title_threshold: f64,

    /// Minimum folder/artist similarity to write an NFO
    pub artist_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            title_threshold: DEFAULT_TITLE_THRESHOLD,
            artist_threshold: DEFAULT_ARTIST_THRESHOLD,
        }
    }
}

/// Batch run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Pause between files that hit the network, in milliseconds
    pub delay_ms: u64,

    /// Ask before processing more than this many files
    pub confirm_above: usize,

    /// Video file extensions to pick up
    pub extensions: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            confirm_above: 20,
            extensions: scanner::default_extensions(),
        }
    }
}

impl BatchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    /// Identification settings, with an optional key override from the CLI.
    pub fn identify_config(&self, imvdb_api_key: Option<&str>) -> IdentifyConfig {
        let imvdb_api_key = imvdb_api_key
            .or(self.credentials.imvdb_api_key.as_deref())
            .unwrap_or_default()
            .to_string();

        IdentifyConfig {
            imvdb_api_key,
            audiodb_api_key: self.credentials.audiodb_api_key.clone(),
            title_threshold: self.matching.title_threshold,
            artist_threshold: self.matching.artist_threshold,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mvnfo"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    load_from(&path)
}

/// Load configuration from a specific file, falling back to defaults
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    // Ensure directory exists
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[matching]"));
        assert!(toml.contains("[batch]"));
        assert!(toml.contains("delay_ms = 3000"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.credentials.imvdb_api_key = Some("test-key-123".to_string());
        config.matching.artist_threshold = 90.0;
        config.batch.extensions.push("webm".to_string());

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // Config with only some fields
        let toml = r#"
[credentials]
imvdb_api_key = "my-key"

[batch]
delay_ms = 0
"#;
        let config: Config = toml::from_str(toml).unwrap();

        // Specified fields are set
        assert_eq!(config.credentials.imvdb_api_key, Some("my-key".to_string()));
        assert_eq!(config.batch.delay(), Duration::ZERO);

        // Other fields use defaults
        assert_eq!(config.credentials.audiodb_api_key, "2");
        assert_eq!(config.matching.title_threshold, 70.0);
        assert_eq!(config.matching.artist_threshold, 80.0);
        assert_eq!(config.batch.confirm_above, 20);
        assert_eq!(config.batch.extensions.len(), 6);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.batch.confirm_above = 5;

        save_to(&config, &path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(load_from(&path), config);
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        assert_eq!(load_from(&path), Config::default());
    }

    #[test]
    fn test_identify_config_override() {
        let mut config = Config::default();
        config.credentials.imvdb_api_key = Some("from-file".to_string());

        assert_eq!(config.identify_config(None).imvdb_api_key, "from-file");
        assert_eq!(
            config.identify_config(Some("from-cli")).imvdb_api_key,
            "from-cli"
        );
        assert_eq!(
            Config::default().identify_config(None).imvdb_api_key,
            ""
        );
    }
}
