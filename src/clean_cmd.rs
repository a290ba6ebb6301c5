use std::path::{Path, PathBuf};

use serde::Serialize;

use histcompress::clean::{self, CleanOptions, CleanSummary, DropReason};
use histcompress::config::{self, Config};
use histcompress::fs as hfs;
use histcompress::paths;
use histcompress::shell::{EntryParser, ShellKind, line_content};

#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally booleans
pub struct CleanArgs {
    pub shell: Option<ShellKind>,
    pub file: Option<PathBuf>,
    pub no_dedup: bool,
    pub max_length: Option<usize>,
    pub dry_run: bool,
    pub json: bool,
    pub verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    shell: ShellKind,
    history_file: &'a Path,
    backup: Option<&'a Path>,
    dry_run: bool,
    #[serde(flatten)]
    summary: &'a CleanSummary,
}

/// Merge CLI flags over the config's `[clean]` defaults.
fn effective_options(config: &Config, args: &CleanArgs) -> CleanOptions {
    let mut opts = CleanOptions::from(&config.clean);
    if args.no_dedup {
        opts.dedup = false;
    }
    if args.max_length.is_some() {
        opts.max_length = args.max_length;
    }
    opts
}

fn describe_drop(reason: DropReason) -> String {
    match reason {
        DropReason::Rule(rejection) => format!("rule ({rejection})"),
        DropReason::TooLong => "too long".to_string(),
        DropReason::Duplicate => "duplicate".to_string(),
    }
}

pub fn cmd_clean(args: &CleanArgs) -> anyhow::Result<i32> {
    let shell = match args.shell {
        Some(shell) => shell,
        None => ShellKind::detect()?,
    };
    let history_file = paths::resolve_history_file(shell, args.file.as_deref())?;

    if args.verbose {
        eprintln!("[histcompress] shell: {shell}");
        eprintln!("[histcompress] history file: {}", history_file.display());
        for path in config::config_search_paths() {
            eprintln!("[histcompress] config: {}", path.display());
        }
    }

    let config = config::load();
    let opts = effective_options(&config, args);
    if opts.max_length.is_none() && args.verbose {
        eprintln!("[histcompress] length filter disabled");
    }

    let raw = hfs::read_entries(&history_file)?;
    let parser = EntryParser::new(shell)?;
    let cleaned = clean::clean_with(&raw, &parser, &config.rules, opts, |entry, reason| {
        if args.verbose {
            eprintln!(
                "[histcompress] drop [{}]: {}",
                describe_drop(reason),
                line_content(entry)
            );
        }
    });

    let backup = if args.dry_run {
        None
    } else {
        let backup = hfs::backup(&history_file)?;
        hfs::write_entries(&history_file, &cleaned.entries)?;
        Some(backup)
    };

    let summary = &cleaned.summary;
    if args.verbose || args.dry_run {
        eprintln!(
            "[histcompress] kept {} of {} entries ({} unparseable), dropped {} by rule, {} by length, {} duplicates",
            summary.kept,
            summary.total,
            summary.unparseable,
            summary.dropped_by_rule,
            summary.dropped_by_length,
            summary.dropped_duplicates,
        );
    }
    if args.verbose
        && let Some(ref path) = backup
    {
        eprintln!("[histcompress] backup written to {}", path.display());
    }

    if args.json {
        let report = Report {
            shell,
            history_file: &history_file,
            backup: backup.as_deref(),
            dry_run: args.dry_run,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(0)
}
