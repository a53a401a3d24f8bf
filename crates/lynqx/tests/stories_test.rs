//! Tests for loading story files.

use lynqx::{LynqxErrorKind, read_stories, story_lines};
use std::io::Write;

#[test]
fn test_read_stories_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "As a user I can log in").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "As a user I can log out").unwrap();

    let text = read_stories(file.path()).unwrap();

    assert_eq!(
        story_lines(&text),
        vec!["As a user I can log in", "As a user I can log out"]
    );
}

#[test]
fn test_read_missing_story_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let err = read_stories(&missing).unwrap_err();

    assert!(matches!(err.kind(), LynqxErrorKind::Io(_)));
    assert!(err.user_message().contains("missing.txt"));
}
