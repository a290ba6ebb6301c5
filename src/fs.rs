use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;

/// Read a history file as raw entries, each keeping its line terminator.
///
/// A final line without a trailing newline is returned as-is.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_entries(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(split_entries(&content))
}

/// Split text into lines the way they were written, terminators included.
pub fn split_entries(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// `<path>.<epoch>.bak`
pub fn backup_path(path: &Path, epoch_secs: u64) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{epoch_secs}.bak"));
    PathBuf::from(name)
}

/// Copy `path` to a timestamped sibling and return the backup's location.
///
/// # Errors
///
/// Returns an error if the system clock is before the Unix epoch or the copy
/// fails.
pub fn backup(path: &Path) -> anyhow::Result<PathBuf> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?
        .as_secs();
    let dest = backup_path(path, secs);
    fs::copy(path, &dest).with_context(|| {
        format!(
            "failed to back up {} to {}",
            path.display(),
            dest.display()
        )
    })?;
    Ok(dest)
}

/// Overwrite `path` with `entries` concatenated verbatim.
///
/// An existing file keeps its permissions; a new one is created 0600 on Unix
/// since shell history is private.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn write_entries(path: &Path, entries: &[&str]) -> anyhow::Result<()> {
    use std::io::Write;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let file = options
        .open(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    for entry in entries {
        writer.write_all(entry.as_bytes())?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
