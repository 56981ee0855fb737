//! Configuration schema (patchguard.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of the vendored upstream source trees
///
/// Both trees must be source checkouts; a stripped or compiled
/// distribution has no source text to fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorConfig {
    /// Root containing the `botocore/` package directory
    #[serde(default = "VendorConfig::default_sdk_root")]
    pub sdk_root: PathBuf,

    /// Root containing the `aiohttp/` package directory
    #[serde(default = "VendorConfig::default_http_root")]
    pub http_root: PathBuf,
}

impl VendorConfig {
    fn default_sdk_root() -> PathBuf {
        PathBuf::from("vendor/botocore")
    }

    fn default_http_root() -> PathBuf {
        PathBuf::from("vendor/aiohttp")
    }
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            sdk_root: Self::default_sdk_root(),
            http_root: Self::default_http_root(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vendored tree locations
    #[serde(default)]
    pub vendor: VendorConfig,

    /// Project root path (for resolving relative paths)
    #[serde(skip)]
    pub project_root: PathBuf,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let mut config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Set project root to parent of config file
        if let Some(parent) = path.parent() {
            config.project_root = parent.to_path_buf();
        }

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Vendored SDK root resolved against the project root
    pub fn sdk_root(&self) -> PathBuf {
        self.project_root.join(&self.vendor.sdk_root)
    }

    /// Vendored HTTP client root resolved against the project root
    pub fn http_root(&self) -> PathBuf {
        self.project_root.join(&self.vendor.http_root)
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.vendor.sdk_root, PathBuf::from("vendor/botocore"));
        assert_eq!(config.vendor.http_root, PathBuf::from("vendor/aiohttp"));
    }

    #[test]
    fn config_from_toml() {
        let config = Config::from_toml(
            r#"
            [vendor]
            sdk_root = "third_party/botocore"
            http_root = "third_party/aiohttp"
            "#,
        )
        .unwrap();

        assert_eq!(config.vendor.sdk_root, PathBuf::from("third_party/botocore"));
        assert_eq!(config.vendor.http_root, PathBuf::from("third_party/aiohttp"));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [vendor]
            sdk_root = "checkouts/botocore"
            "#,
        )
        .unwrap();

        assert_eq!(config.vendor.sdk_root, PathBuf::from("checkouts/botocore"));
        assert_eq!(config.vendor.http_root, PathBuf::from("vendor/aiohttp"));
    }

    #[test]
    fn roots_resolve_against_project_root() {
        let mut config = Config::default();
        config.project_root = PathBuf::from("/srv/wrapper");
        assert_eq!(config.sdk_root(), PathBuf::from("/srv/wrapper/vendor/botocore"));
    }
}
