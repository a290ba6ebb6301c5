use std::collections::HashSet;

use serde::Serialize;

use crate::rules::{Rejection, RetentionRules, within_length};
use crate::shell::EntryParser;

/// Knobs for one clean pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Retain only the most recent occurrence of each parsed command.
    pub dedup: bool,
    /// Drop parsed commands longer than this many characters. `None` leaves
    /// the length filter out of the pass.
    pub max_length: Option<usize>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            dedup: true,
            max_length: None,
        }
    }
}

/// Counters describing what a clean pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    pub total: usize,
    pub kept: usize,
    /// Kept as-is because the line could not be parsed.
    pub unparseable: usize,
    pub dropped_by_rule: usize,
    pub dropped_by_length: usize,
    pub dropped_duplicates: usize,
}

impl CleanSummary {
    pub const fn dropped(&self) -> usize {
        self.dropped_by_rule + self.dropped_by_length + self.dropped_duplicates
    }
}

/// Why a single entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Rule(Rejection),
    TooLong,
    Duplicate,
}

/// Output of [`clean`]: surviving raw entries in chronological order.
#[derive(Debug, Clone, Default)]
pub struct Cleaned<'a> {
    pub entries: Vec<&'a str>,
    pub summary: CleanSummary,
}

/// Clean a chronological list of raw history entries.
///
/// Walks newest to oldest so that the most recent occurrence of a command is
/// the one retained, then restores chronological order. Unparseable entries
/// are always kept verbatim. Entries rejected by `rules` (or by length, when
/// enabled) are dropped without being recorded as seen.
pub fn clean<'a, S: AsRef<str>>(
    raw: &'a [S],
    parser: &EntryParser,
    rules: &RetentionRules,
    opts: CleanOptions,
) -> Cleaned<'a> {
    clean_with(raw, parser, rules, opts, |_, _| {})
}

/// [`clean`] with a callback invoked for every dropped entry.
pub fn clean_with<'a, S, F>(
    raw: &'a [S],
    parser: &EntryParser,
    rules: &RetentionRules,
    opts: CleanOptions,
    mut on_drop: F,
) -> Cleaned<'a>
where
    S: AsRef<str>,
    F: FnMut(&str, DropReason),
{
    let mut summary = CleanSummary {
        total: raw.len(),
        ..CleanSummary::default()
    };
    let mut entries = Vec::new();
    // Unparseable lines occupy the `None` slot; they are retained regardless.
    let mut seen: HashSet<Option<&str>> = HashSet::new();

    for entry in raw.iter().rev() {
        let entry = entry.as_ref();
        let parsed = parser.parse(entry);

        if let Some(command) = parsed {
            let drop = if let Some(rejection) = rules.rejection(command) {
                Some(DropReason::Rule(rejection))
            } else if opts
                .max_length
                .is_some_and(|max| !within_length(command, max))
            {
                Some(DropReason::TooLong)
            } else if opts.dedup && seen.contains(&parsed) {
                Some(DropReason::Duplicate)
            } else {
                None
            };

            if let Some(drop) = drop {
                match drop {
                    DropReason::Rule(_) => summary.dropped_by_rule += 1,
                    DropReason::TooLong => summary.dropped_by_length += 1,
                    DropReason::Duplicate => summary.dropped_duplicates += 1,
                }
                on_drop(entry, drop);
                continue;
            }
        } else {
            summary.unparseable += 1;
        }

        entries.push(entry);
        seen.insert(parsed);
    }

    entries.reverse();
    summary.kept = entries.len();
    Cleaned { entries, summary }
}
