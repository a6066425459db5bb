use export_fs::{NormalizedPath, io};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn write_then_read_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = NormalizedPath::new(dir.path().join("element.js"));

    io::write_text(&path, "export const x = 1;").unwrap();
    assert_eq!(io::read_text(&path).unwrap(), "export const x = 1;");
}

#[test]
fn write_atomic_creates_missing_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = NormalizedPath::new(dir.path().join("out/MyApp/element.js"));

    io::write_atomic(&path, b"content").unwrap();
    assert!(path.is_file());
}

#[test]
fn write_atomic_overwrites_existing_content() {
    let dir = TempDir::new().unwrap();
    let path = NormalizedPath::new(dir.path().join("element.js"));

    io::write_text(&path, "old").unwrap();
    io::write_text(&path, "new").unwrap();
    assert_eq!(io::read_text(&path).unwrap(), "new");
}

#[test]
fn write_atomic_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let path = NormalizedPath::new(dir.path().join("element.js"));

    io::write_text(&path, "content").unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["element.js"]);
}

#[test]
fn read_text_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = NormalizedPath::new(dir.path().join("absent.js"));

    let err = io::read_text(&path).unwrap_err();
    assert!(matches!(err, export_fs::Error::Io { .. }));
}
