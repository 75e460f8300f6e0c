//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "invalid color mode '{}', expected auto, always or never",
                other
            )),
        }
    }
}

/// Where account homes and the metadata cache index live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Homes live at `<data_dir>/<account_id>`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Cache index file, relative to `data_dir` unless absolute
    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cache_file: default_cache_file(),
        }
    }
}

impl StorageConfig {
    /// Resolved location of the cache index
    pub fn cache_path(&self) -> PathBuf {
        if self.cache_file.is_absolute() {
            self.cache_file.clone()
        } else {
            self.data_dir.join(&self.cache_file)
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_cache_file() -> PathBuf {
    PathBuf::from(".filecache.json")
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// A configured user backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// Accounts listed inline
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        users: Vec<String>,
    },
    /// Accounts read from a passwd-style file
    Passwd { path: PathBuf },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub backends: Vec<BackendConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> crate::error::CleanupResult<Self> {
        super::loader::load_with_warnings(path).map(|(config, _warnings)| config)
    }

    /// Resolve the config file (explicit path, env, user config dir) and load it
    pub fn discover(
        explicit: Option<&Path>,
    ) -> crate::error::CleanupResult<(Self, Vec<super::ConfigWarning>)> {
        super::loader::discover(explicit)
    }

    /// Apply `USER_CLEANUP_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        super::loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }
}
