use std::io::{Read, Write};

use crate::io::{FileBackend, InMemoryBackend, StoreBackend};

fn read_all(backend: &dyn StoreBackend) -> String {
    let mut s = String::new();
    backend.open_read().unwrap().read_to_string(&mut s).unwrap();
    s
}

#[test]
fn memory_clones_share_contents() {
    let backend = InMemoryBackend::new("mem");
    let clone = backend.clone();

    clone.open_overwrite().unwrap().write_all(b"abc").unwrap();

    assert_eq!(backend.contents_string(), "abc");
    assert_eq!(read_all(&backend), "abc");
}

#[test]
fn memory_overwrite_replaces_contents() {
    let backend = InMemoryBackend::with_contents("mem", "old content");
    backend.open_overwrite().unwrap().write_all(b"new").unwrap();
    assert_eq!(backend.contents_string(), "new");

    backend.clear();
    assert!(backend.contents().is_empty());
    assert_eq!(backend.id(), "mem");
    assert!(backend.path().is_none());
}

#[test]
fn file_backend_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a").join("b").join("config.yaml");
    let backend = FileBackend::new(&path);

    assert!(!backend.exists());
    let mut w = backend.open_overwrite().unwrap();
    w.write_all(b"inputMethod: CSV\n").unwrap();
    w.flush().unwrap();
    drop(w);

    assert!(backend.exists());
    assert_eq!(backend.path(), Some(path.as_path()));
    assert_eq!(read_all(&backend), "inputMethod: CSV\n");
}

#[test]
fn file_backend_truncates_on_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "a much longer previous document\n").expect("write");

    let backend = FileBackend::new(&path);
    backend.open_overwrite().unwrap().write_all(b"short\n").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
}

#[test]
fn missing_file_fails_to_open() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = FileBackend::new(dir.path().join("absent.yaml"));
    assert!(backend.open_read().is_err());
}
