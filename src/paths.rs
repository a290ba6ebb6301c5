//! User-directory and history-file resolution.
//!
//! Priority for the config directory:
//!   1. `HISTCOMPRESS_HOME` env var (if set and non-empty)
//!   2. `dirs::config_dir().map(|d| d.join("histcompress"))`

use std::path::{Path, PathBuf};

use crate::shell::ShellKind;

/// Returns the histcompress config directory (holds `config.toml`).
pub fn user_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HISTCOMPRESS_HOME")
        && !home.is_empty()
    {
        return Some(PathBuf::from(home));
    }
    dirs::config_dir().map(|d| d.join("histcompress"))
}

/// Conventional history file for `shell` under `home`.
pub fn history_file_in(home: &Path, shell: ShellKind) -> PathBuf {
    home.join(shell.history_file_name())
}

/// Resolve the history file to clean, failing if it does not exist.
///
/// `explicit` (from `--file`) takes precedence over the conventional
/// `~/.zsh_history` / `~/.bash_history` location.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or the
/// resolved file does not exist.
pub fn resolve_history_file(shell: ShellKind, explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let home = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("can't determine home directory"))?;
            history_file_in(&home, shell)
        }
    };
    if !path.exists() {
        anyhow::bail!("can't find shell history file {}", path.display());
    }
    Ok(path)
}
