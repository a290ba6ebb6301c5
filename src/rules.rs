use serde::Deserialize;

/// Commands that carry no information once run.
const DEFAULT_EXACT: &[&str] = &[
    "python", "clear", "ls", "pwd", "cd ~", "cd /", "cd", "cd ..", "cd .",
];

/// Bare editor invocations.
const DEFAULT_EDITORS: &[&str] = &["nano", "vim", "nvim", "subl", "code", "emacs"];

/// Commands dropped regardless of their arguments.
const DEFAULT_PREFIXES: &[&str] = &["source", "git commit"];

/// Default threshold for [`within_length`].
pub const DEFAULT_MAX_LENGTH: usize = 60;

/// Which rule group rejected a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Exact,
    Editor,
    Prefix,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact match",
            Self::Editor => "editor",
            Self::Prefix => "prefix",
        })
    }
}

/// Rule tables deciding which parsed commands are retained.
///
/// Deserialized from the `[rules]` table of `config.toml`; a list that is
/// present replaces the corresponding default list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetentionRules {
    /// Commands rejected on exact match.
    pub exact: Vec<String>,
    /// Editor names rejected on exact match.
    pub editors: Vec<String>,
    /// Commands rejected when they start with any of these.
    pub prefixes: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

impl Default for RetentionRules {
    fn default() -> Self {
        Self {
            exact: owned(DEFAULT_EXACT),
            editors: owned(DEFAULT_EDITORS),
            prefixes: owned(DEFAULT_PREFIXES),
        }
    }
}

impl RetentionRules {
    /// First rule group that rejects `command`, checked in the order exact,
    /// editor, prefix. `None` means the command is kept.
    pub fn rejection(&self, command: &str) -> Option<Rejection> {
        if self.exact.iter().any(|s| s == command) {
            Some(Rejection::Exact)
        } else if self.editors.iter().any(|s| s == command) {
            Some(Rejection::Editor)
        } else if self.prefixes.iter().any(|p| command.starts_with(p.as_str())) {
            Some(Rejection::Prefix)
        } else {
            None
        }
    }

    pub fn keep(&self, command: &str) -> bool {
        self.rejection(command).is_none()
    }
}

/// Returns `false` iff `command` is longer than `max_length` characters.
pub fn within_length(command: &str, max_length: usize) -> bool {
    command.chars().count() <= max_length
}
