//! Config load error messages, defaults and file-safety tests.
//! Layout: ~/.leetsync/config.yaml

use assert_fs::prelude::*;
use leetsync_core::{config, ConfigError, SnippetScope, SyncConfig};
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::PathBuf;

fn write_config(home: &assert_fs::TempDir, yaml: &str) {
    home.child(".leetsync/config.yaml")
        .write_str(yaml)
        .expect("write config");
}

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_missing_config_returns_not_found() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("config not found"));
    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_config(&home, ": : corrupt : yaml : !!!\n  - broken: [unclosed");

    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn load_without_username_is_parse_error() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_config(&home, "limit: 5\n");

    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

#[test]
fn load_invalid_limit_is_rejected() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_config(&home, "username: alice\nlimit: 0\n");

    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Defaults
// ---------------------------------------------------------------------------

#[test]
fn minimal_config_fills_every_default() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_config(&home, "username: alice\n");

    let loaded = config::load_at(home.path()).expect("load");
    assert_eq!(loaded, SyncConfig::new("alice"));
}

#[test]
fn partial_publish_section_keeps_other_defaults() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_config(
        &home,
        "username: alice\npublish:\n  branch: solutions\n  repo_dir: /srv/leetcode\n",
    );

    let loaded = config::load_at(home.path()).expect("load");
    assert_eq!(loaded.publish.branch, "solutions");
    assert_eq!(loaded.publish.repo_dir, PathBuf::from("/srv/leetcode"));
    assert_eq!(loaded.publish.remote, "origin");
    assert_eq!(loaded.publish.message, "Update LeetCode solutions");
    assert!(loaded.publish.enabled);
}

#[rstest]
#[case("all", SnippetScope::All)]
#[case("submitted", SnippetScope::Submitted)]
fn snippet_scope_parses_from_yaml(#[case] raw: &str, #[case] expected: SnippetScope) {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_config(&home, &format!("username: alice\nsnippet_scope: {raw}\n"));

    let loaded = config::load_at(home.path()).expect("load");
    assert_eq!(loaded.snippet_scope, expected);
}

// ---------------------------------------------------------------------------
// 3. Save safety
// ---------------------------------------------------------------------------

#[test]
fn save_cleans_up_tmp_file() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let path = config::save_at(home.path(), &SyncConfig::new("alice"), false).expect("save");

    home.child(".leetsync/config.yaml.tmp")
        .assert(predicate::path::missing());
    assert_eq!(path, config::config_path_at(home.path()));
}

#[test]
fn saved_file_is_readable_yaml_with_username() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    config::save_at(home.path(), &SyncConfig::new("alice"), false).expect("save");

    home.child(".leetsync/config.yaml")
        .assert(predicate::str::contains("username: alice"));
}

#[test]
fn save_rejects_invalid_config() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let mut bad = SyncConfig::new("alice");
    bad.endpoint = "ftp://example.com".to_string();

    let err = config::save_at(home.path(), &bad, false).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
    assert!(!config::config_path_at(home.path()).exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let home = assert_fs::TempDir::new().expect("tempdir");
    let path = config::save_at(home.path(), &SyncConfig::new("alice"), false).expect("save");

    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
