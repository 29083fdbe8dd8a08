use super::mock::MockFs;
use super::*;
use tempfile::TempDir;

#[test]
fn test_mock_fs_read_counts_each_read() {
    let fs = MockFs::new();
    fs.add_file_bytes("/brushes/a.png", &[0x89, b'P', b'N', b'G']);

    assert_eq!(fs.read_count("/brushes/a.png"), 0);
    let bytes = fs.read(Path::new("/brushes/a.png")).unwrap();
    assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    fs.read(Path::new("/brushes/a.png")).unwrap();

    assert_eq!(fs.read_count("/brushes/a.png"), 2);
    assert_eq!(fs.total_reads(), 2);
}

#[test]
fn test_mock_fs_read_missing_is_not_found() {
    let fs = MockFs::new();
    let err = fs.read(Path::new("/missing.png")).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(fs.total_reads(), 0);
}

#[test]
fn test_mock_fs_read_dir_direct_children_only() {
    let fs = MockFs::new();
    fs.add_dir("/brushes");
    fs.add_file("/brushes/a.png", "a");
    fs.add_dir("/brushes/sub");
    fs.add_file("/brushes/sub/b.png", "b");

    let mut entries = fs.read_dir(Path::new("/brushes")).unwrap();
    entries.sort();

    assert_eq!(
        entries,
        vec![PathBuf::from("/brushes/a.png"), PathBuf::from("/brushes/sub")]
    );
}

#[test]
fn test_mock_fs_read_dir_on_file_fails() {
    let fs = MockFs::new();
    fs.add_file("/a.png", "a");
    assert!(fs.read_dir(Path::new("/a.png")).is_err());
}

#[test]
fn test_mock_fs_read_dir_missing_fails() {
    let fs = MockFs::new();
    let err = fs.read_dir(Path::new("/nowhere")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_real_fs_read_dir_and_read() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("a.png"), b"png").unwrap();
    std::fs::create_dir(temp.path().join("nested")).unwrap();

    let fs = RealFs;
    let mut entries = fs.read_dir(temp.path()).unwrap();
    entries.sort();
    assert_eq!(
        entries,
        vec![temp.path().join("a.png"), temp.path().join("nested")]
    );

    assert_eq!(fs.read(&temp.path().join("a.png")).unwrap(), b"png");
    assert!(fs.exists(&temp.path().join("a.png")));
}

#[test]
fn test_real_fs_read_dir_on_file_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a.png");
    std::fs::write(&file, b"png").unwrap();

    assert!(RealFs.read_dir(&file).is_err());
}
