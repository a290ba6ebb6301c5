use std::path::PathBuf;

use serde::Deserialize;

use crate::clean::CleanOptions;
use crate::paths;
use crate::rules::RetentionRules;

/// Parsed representation of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rule tables for the retention filter.
    pub rules: RetentionRules,
    /// Defaults for the clean pass.
    pub clean: CleanSection,
}

/// `[clean]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleanSection {
    /// Keep only the most recent occurrence of each command.
    pub dedup: bool,
    /// Drop commands longer than this many characters. Absent = no length filter.
    pub max_length: Option<usize>,
}

impl Default for CleanSection {
    fn default() -> Self {
        Self {
            dedup: true,
            max_length: None,
        }
    }
}

impl From<&CleanSection> for CleanOptions {
    fn from(section: &CleanSection) -> Self {
        Self {
            dedup: section.dedup,
            max_length: section.max_length,
        }
    }
}

/// Candidate config files in priority order (currently just the user-level one).
pub fn config_search_paths() -> Vec<PathBuf> {
    paths::user_dir()
        .map(|dir| dir.join("config.toml"))
        .into_iter()
        .collect()
}

/// Load the user config, falling back to defaults.
pub fn load() -> Config {
    load_from(&config_search_paths()).unwrap_or_default()
}

/// Testable version that accepts explicit paths. First readable file wins.
///
/// A file that exists but fails to parse yields a warning and `None`, so the
/// caller falls back to defaults rather than aborting.
pub fn load_from(paths: &[PathBuf]) -> Option<Config> {
    for path in paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            match toml::from_str(&content) {
                Ok(config) => return Some(config),
                Err(e) => {
                    eprintln!(
                        "[histcompress] warning: failed to parse {}: {e}",
                        path.display()
                    );
                    return None;
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests;
