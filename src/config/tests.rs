#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::*;

// --- deserialization ---

#[test]
fn empty_config_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert!(config.clean.dedup);
    assert_eq!(config.clean.max_length, None);
}

#[test]
fn full_config() {
    let toml_str = r#"
[rules]
exact = ["ls", "exit"]
editors = ["hx"]
prefixes = ["export SECRET"]

[clean]
dedup = false
max_length = 80
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.rules.exact, vec!["ls", "exit"]);
    assert_eq!(config.rules.editors, vec!["hx"]);
    assert_eq!(config.rules.prefixes, vec!["export SECRET"]);
    assert!(!config.clean.dedup);
    assert_eq!(config.clean.max_length, Some(80));
}

#[test]
fn clean_section_only_keeps_default_rules() {
    let config: Config = toml::from_str("[clean]\nmax_length = 40\n").unwrap();
    assert_eq!(config.rules, RetentionRules::default());
    assert!(config.clean.dedup);
    assert_eq!(config.clean.max_length, Some(40));
}

#[test]
fn clean_section_converts_to_options() {
    let section = CleanSection {
        dedup: false,
        max_length: Some(10),
    };
    let opts = CleanOptions::from(&section);
    assert!(!opts.dedup);
    assert_eq!(opts.max_length, Some(10));
}

// --- load_from ---

#[test]
fn load_first_found_wins() {
    let dir1 = TempDir::new().unwrap();
    let dir2 = TempDir::new().unwrap();
    let path1 = dir1.path().join("config.toml");
    let path2 = dir2.path().join("config.toml");
    fs::write(&path1, "[clean]\ndedup = false\n").unwrap();
    fs::write(&path2, "[clean]\nmax_length = 5\n").unwrap();

    let config = load_from(&[path1, path2]).unwrap();
    assert!(!config.clean.dedup);
    assert_eq!(config.clean.max_length, None);
}

#[test]
fn load_skips_missing_files() {
    let dir = TempDir::new().unwrap();
    let present = dir.path().join("config.toml");
    fs::write(&present, "[rules]\neditors = []\n").unwrap();

    let config = load_from(&[PathBuf::from("/no/such/config.toml"), present]).unwrap();
    assert!(config.rules.editors.is_empty());
}

#[test]
fn load_nonexistent_returns_none() {
    assert!(load_from(&[PathBuf::from("/no/such/config.toml")]).is_none());
}

#[test]
fn load_invalid_toml_returns_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not valid [[[").unwrap();
    assert!(load_from(&[path]).is_none());
}

#[test]
fn load_wrong_type_returns_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[clean]\ndedup = \"yes\"\n").unwrap();
    assert!(load_from(&[path]).is_none());
}

// --- load ---

#[test]
#[serial]
fn load_reads_from_histcompress_home() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[clean]\nmax_length = 99\n").unwrap();
    // SAFETY: test-only env mutation; #[serial] prevents races.
    unsafe { std::env::set_var("HISTCOMPRESS_HOME", dir.path()) };
    let config = load();
    unsafe { std::env::remove_var("HISTCOMPRESS_HOME") };
    assert_eq!(config.clean.max_length, Some(99));
}

#[test]
#[serial]
fn load_defaults_when_home_has_no_config() {
    let dir = TempDir::new().unwrap();
    unsafe { std::env::set_var("HISTCOMPRESS_HOME", dir.path()) };
    let config = load();
    unsafe { std::env::remove_var("HISTCOMPRESS_HOME") };
    assert_eq!(config, Config::default());
}
