//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleanupError, CleanupResult};

use super::types::{ColorMode, Config};

/// Names the config file explicitly
pub const CONFIG_ENV: &str = "USER_CLEANUP_CONFIG";
/// Overrides `storage.data_dir`
pub const DATA_DIR_ENV: &str = "USER_CLEANUP_DATA_DIR";
/// Overrides `output.color`
pub const COLOR_ENV: &str = "USER_CLEANUP_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CleanupResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CleanupError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CleanupError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the configuration.
///
/// Order: explicit path, `USER_CLEANUP_CONFIG`, the user config dir, then
/// built-in defaults. Explicitly named files must exist.
pub fn discover(explicit: Option<&Path>) -> CleanupResult<(Config, Vec<ConfigWarning>)> {
    discover_with(explicit, |key| std::env::var(key).ok(), user_config_path())
}

pub(crate) fn discover_with<F>(
    explicit: Option<&Path>,
    get_env: F,
    user_config: Option<PathBuf>,
) -> CleanupResult<(Config, Vec<ConfigWarning>)>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    if let Some(path) = get_env(CONFIG_ENV).filter(|p| !p.trim().is_empty()) {
        return load_with_warnings(Path::new(&path));
    }

    match user_config {
        Some(path) if path.is_file() => load_with_warnings(&path),
        _ => Ok((Config::default(), Vec::new())),
    }
}

/// `<config_dir>/user-cleanup/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("user-cleanup").join("config.toml"))
}

pub(crate) fn apply_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = get_env(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
        config.storage.data_dir = PathBuf::from(dir);
    }

    if let Some(color) = get_env(COLOR_ENV) {
        // Unknown values keep the configured mode
        if let Ok(mode) = color.parse::<ColorMode>() {
            config.output.color = mode;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "cache_file",
        "output",
        "color",
        "backends",
        "kind",
        "name",
        "users",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
