//! Shell variants and their on-disk history formats.
//!
//! Each supported shell carries the binary name used to recognise it in
//! `$SHELL`, the conventional history filename under the home directory, and
//! the strategy used to pull the command text out of a raw history line.

use std::path::Path;

use anyhow::Context as _;
use regex::Regex;

/// Extended-history prefix written by zsh: `: <start>:<elapsed>;<command>`.
const ZSH_EXTENDED_PATTERN: &str = r": \d+:\d+;(.*)";

/// A supported shell.
#[derive(clap::ValueEnum, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    Zsh,
    Bash,
}

impl ShellKind {
    /// Binary name as it appears at the end of `$SHELL`.
    pub const fn binary_name(self) -> &'static str {
        match self {
            Self::Zsh => "zsh",
            Self::Bash => "bash",
        }
    }

    /// History filename relative to the home directory.
    pub const fn history_file_name(self) -> &'static str {
        match self {
            Self::Zsh => ".zsh_history",
            Self::Bash => ".bash_history",
        }
    }

    /// Map a shell binary path (e.g. `/usr/bin/zsh`) to a known variant.
    ///
    /// Only the final path component is considered.
    pub fn from_binary_path(shell: &str) -> Option<Self> {
        let name = Path::new(shell).file_name()?.to_str()?;
        [Self::Zsh, Self::Bash]
            .into_iter()
            .find(|kind| kind.binary_name() == name)
    }

    /// Detect the active shell from the `SHELL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHELL` is unset or empty, or names a shell that is
    /// not supported.
    pub fn detect() -> anyhow::Result<Self> {
        let shell = std::env::var("SHELL").unwrap_or_default();
        Self::from_env_value(&shell)
    }

    /// Testable half of [`ShellKind::detect`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`ShellKind::detect`].
    pub fn from_env_value(shell: &str) -> anyhow::Result<Self> {
        if shell.is_empty() {
            anyhow::bail!("can't determine type of shell, SHELL is not set");
        }
        Self::from_binary_path(shell)
            .ok_or_else(|| anyhow::anyhow!("unsupported shell type {shell}"))
    }
}

impl std::fmt::Display for ShellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Strip the line terminator (`\n` or `\r\n`) from a raw history line.
pub fn line_content(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Extracts command text from raw history lines for one shell variant.
#[derive(Debug, Clone)]
pub struct EntryParser {
    shell: ShellKind,
    extended: Option<Regex>,
}

impl EntryParser {
    /// Build the parser for `shell`, compiling its line pattern once.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in pattern fails to compile.
    pub fn new(shell: ShellKind) -> anyhow::Result<Self> {
        let extended = match shell {
            ShellKind::Zsh => Some(
                Regex::new(ZSH_EXTENDED_PATTERN).context("failed to compile zsh history pattern")?,
            ),
            ShellKind::Bash => None,
        };
        Ok(Self { shell, extended })
    }

    pub const fn shell(&self) -> ShellKind {
        self.shell
    }

    /// Parse one raw line. Returns `None` when the line does not carry the
    /// shell's metadata and cannot be interpreted as a command.
    ///
    /// zsh lines without the `: <digits>:<digits>;` prefix (continuation lines
    /// of multi-line commands, truncated writes) are unparseable. Bash lines
    /// are always parseable and come back unchanged apart from the terminator.
    pub fn parse<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let line = line_content(raw);
        match &self.extended {
            Some(re) => re
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
            None => Some(line),
        }
    }
}
