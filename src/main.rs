mod clean_cmd;

use std::path::PathBuf;

use clap::Parser;

use histcompress::rules::DEFAULT_MAX_LENGTH;
use histcompress::shell::ShellKind;

#[derive(Parser)]
#[command(
    name = "histcompress",
    version,
    about = "Compress shell history down to the commands worth keeping"
)]
struct Cli {
    /// Shell whose history format to use (default: detected from $SHELL)
    #[arg(long, value_enum)]
    shell: Option<ShellKind>,

    /// History file to clean (default: ~/.zsh_history or ~/.bash_history)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Keep every occurrence of a command instead of only the most recent
    #[arg(long)]
    no_dedup: bool,

    /// Also drop commands longer than this many characters (60 if no value given)
    #[arg(long, value_name = "CHARS", num_args = 0..=1)]
    max_length: Option<Option<usize>>,

    /// Report what would change without backing up or rewriting the file
    #[arg(long)]
    dry_run: bool,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Show resolution details and every dropped entry
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let args = clean_cmd::CleanArgs {
        shell: cli.shell,
        file: cli.file,
        no_dedup: cli.no_dedup,
        max_length: cli
            .max_length
            .map(|chars| chars.unwrap_or(DEFAULT_MAX_LENGTH)),
        dry_run: cli.dry_run,
        json: cli.json,
        verbose: cli.verbose,
    };
    let exit_code = clean_cmd::cmd_clean(&args).unwrap_or_else(|e| {
        eprintln!("[histcompress] error: {e:#}");
        1
    });
    std::process::exit(exit_code);
}
