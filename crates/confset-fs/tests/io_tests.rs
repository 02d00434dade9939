//! Tests for atomic I/O operations

use confset_fs::{append_line, create_if_missing, read, write_atomic};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_write_atomic_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");

    write_atomic(&path, "CC=gcc\n".as_bytes()).unwrap();
    assert_eq!(read(&path).unwrap(), "CC=gcc\n");
}

#[test]
fn test_write_atomic_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");

    write_atomic(&path, b"a=1\n").unwrap();
    write_atomic(&path, b"a=2\n").unwrap();
    assert_eq!(read(&path).unwrap(), "a=2\n");
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");

    write_atomic(&path, b"a=1\n").unwrap();
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["app.conf"]);
}

#[test]
fn test_read_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.conf");

    let err = read(&path).unwrap_err();
    assert!(err.to_string().contains("nope.conf"));
}

#[test]
fn test_create_if_missing_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.conf");

    create_if_missing(&path).unwrap();
    assert_eq!(read(&path).unwrap(), "");
}

#[test]
fn test_create_if_missing_keeps_existing_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keep.conf");

    write_atomic(&path, b"a=1\n").unwrap();
    create_if_missing(&path).unwrap();
    assert_eq!(read(&path).unwrap(), "a=1\n");
}

#[test]
fn test_append_line_to_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");

    write_atomic(&path, b"").unwrap();
    append_line(&path, "x=2").unwrap();
    assert_eq!(read(&path).unwrap(), "x=2\n");
}

#[test]
fn test_append_line_after_terminated_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");

    write_atomic(&path, b"a=1\n").unwrap();
    append_line(&path, "b=2").unwrap();
    assert_eq!(read(&path).unwrap(), "a=1\nb=2\n");
}

#[test]
fn test_append_line_terminates_dangling_final_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");

    write_atomic(&path, b"a=1").unwrap();
    append_line(&path, "b=2").unwrap();
    assert_eq!(read(&path).unwrap(), "a=1\nb=2\n");
}
