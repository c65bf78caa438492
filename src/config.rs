use crate::converter::{VersionMapping, MAJOR_OFFSET, MINOR_OFFSET, MINOR_ROLLOVER};
use crate::error::{Result, VersionMapError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "gdataversion.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".gdataversion.toml";

/// Represents the complete configuration for gdata-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub mapping: MappingConfig,
}

fn default_major_offset() -> u64 {
    MAJOR_OFFSET
}

fn default_minor_offset() -> u64 {
    MINOR_OFFSET
}

fn default_minor_rollover() -> u64 {
    MINOR_ROLLOVER
}

/// Offsets applied when mapping a Lightning version.
///
/// Each key is optional and falls back to the built-in value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MappingConfig {
    #[serde(default = "default_major_offset")]
    pub major_offset: u64,

    #[serde(default = "default_minor_offset")]
    pub minor_offset: u64,

    #[serde(default = "default_minor_rollover")]
    pub minor_rollover: u64,
}

impl Default for MappingConfig {
    fn default() -> Self {
        MappingConfig {
            major_offset: default_major_offset(),
            minor_offset: default_minor_offset(),
            minor_rollover: default_minor_rollover(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mapping.minor_rollover == 0 {
            return Err(VersionMapError::config(
                "mapping.minor_rollover must be greater than zero",
            ));
        }
        Ok(())
    }

    /// The version mapping described by this configuration
    pub fn mapping(&self) -> VersionMapping {
        VersionMapping::new(
            self.mapping.major_offset,
            self.mapping.minor_offset,
            self.mapping.minor_rollover,
        )
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gdataversion.toml` in current directory
/// 3. `.gdataversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = resolve_config_path(config_path) else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    Config::from_toml(&config_str).map_err(|e| match e {
        VersionMapError::Config(msg) => {
            VersionMapError::config(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = Config::default();
        assert_eq!(config.mapping(), VersionMapping::default());
    }

    #[test]
    fn test_partial_mapping_table() {
        let config = Config::from_toml("[mapping]\nmajor_offset = 3\n").unwrap();
        assert_eq!(config.mapping.major_offset, 3);
        assert_eq!(config.mapping.minor_offset, 1);
        assert_eq!(config.mapping.minor_rollover, 10);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_rollover_rejected() {
        let err = Config::from_toml("[mapping]\nminor_rollover = 0\n").unwrap_err();
        assert!(err.to_string().contains("minor_rollover"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = Config::from_toml("[mapping\n").unwrap_err();
        assert!(matches!(err, VersionMapError::Config(_)));
    }

    #[test]
    fn test_negative_offset_rejected() {
        assert!(Config::from_toml("[mapping]\nmajor_offset = -1\n").is_err());
    }
}
