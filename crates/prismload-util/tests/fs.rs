use std::path::Path;

use prismload_util::fs::{find_ancestor_with, read_to_string, resolve_relative};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("prismload.toml"), "").unwrap();
    let result = find_ancestor_with(tmp.path(), "prismload.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("prismload.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "prismload.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_resolve_relative_joins_base() {
    let resolved = resolve_relative(Path::new("/srv/site"), Path::new("components.json"));
    assert_eq!(resolved, Path::new("/srv/site/components.json"));
}

#[test]
fn test_resolve_relative_keeps_absolute() {
    let tmp = TempDir::new().unwrap();
    let abs = tmp.path().join("components.json");
    assert_eq!(resolve_relative(Path::new("/elsewhere"), &abs), abs);
}

#[test]
fn test_read_to_string_missing_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_to_string(&tmp.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_read_to_string_reads_content() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("a.json");
    std::fs::write(&path, "{}").unwrap();
    assert_eq!(read_to_string(&path).unwrap(), "{}");
}
