//! Unit tests for config file discovery

use ahoy::config::locate::{config_dir, locate_config};
use ahoy::error::AhoyError;
use ahoy::system::MockSystem;
use std::path::{Path, PathBuf};

#[test]
fn test_finds_config_in_ancestor() {
    let system = MockSystem::new()
        .with_current_dir("/a/b/c")
        .with_file("/a/.ahoy.yml", b"commands: {}\n");

    let found = locate_config(&system, None).unwrap();
    assert_eq!(found, Some(PathBuf::from("/a/.ahoy.yml")));
    assert_eq!(config_dir(&found.unwrap()), PathBuf::from("/a"));
}

#[test]
fn test_nearest_config_wins() {
    let system = MockSystem::new()
        .with_current_dir("/a/b/c")
        .with_file("/a/.ahoy.yml", b"")
        .with_file("/a/b/.ahoy.yml", b"");

    assert_eq!(
        locate_config(&system, None).unwrap(),
        Some(PathBuf::from("/a/b/.ahoy.yml"))
    );
}

#[test]
fn test_config_in_current_dir() {
    let system = MockSystem::new()
        .with_current_dir("/project")
        .with_file("/project/.ahoy.yml", b"");

    assert_eq!(
        locate_config(&system, None).unwrap(),
        Some(PathBuf::from("/project/.ahoy.yml"))
    );
}

#[test]
fn test_no_config_anywhere() {
    let system = MockSystem::new()
        .with_current_dir("/a/b/c")
        .with_file("/a/b/c/other.yml", b"");

    assert_eq!(locate_config(&system, None).unwrap(), None);
}

#[test]
fn test_directory_named_like_config_is_skipped() {
    let system = MockSystem::new()
        .with_current_dir("/a/b")
        .with_dir("/a/b/.ahoy.yml")
        .with_file("/a/.ahoy.yml", b"");

    assert_eq!(
        locate_config(&system, None).unwrap(),
        Some(PathBuf::from("/a/.ahoy.yml"))
    );
}

#[test]
fn test_explicit_path_used_as_is() {
    let system = MockSystem::new()
        .with_current_dir("/a/b/c")
        .with_file("/a/.ahoy.yml", b"")
        .with_file("/elsewhere/custom.yml", b"");

    assert_eq!(
        locate_config(&system, Some(Path::new("/elsewhere/custom.yml"))).unwrap(),
        Some(PathBuf::from("/elsewhere/custom.yml"))
    );
}

#[test]
fn test_explicit_relative_path() {
    let system = MockSystem::new()
        .with_current_dir("/work")
        .with_file("/work/custom.yml", b"");

    let found = locate_config(&system, Some(Path::new("custom.yml"))).unwrap();
    assert_eq!(found, Some(PathBuf::from("custom.yml")));
    assert_eq!(config_dir(&found.unwrap()), PathBuf::from("."));
}

#[test]
fn test_explicit_path_missing_is_fatal() {
    let system = MockSystem::new()
        .with_current_dir("/a")
        .with_file("/a/.ahoy.yml", b"");

    let err = locate_config(&system, Some(Path::new("/missing.yml"))).unwrap_err();
    match err.downcast_ref::<AhoyError>() {
        Some(AhoyError::ConfigNotFound { path }) => {
            assert_eq!(path, Path::new("/missing.yml"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
