//! File ingestion through the course manager, sync and async.

use std::io::Write;

use coursedb::{CourseManager, IngestError};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const COURSES: &str = "\
CMSC100 21101 2 DL Janet E. Joy
CMSC110 21561 3 SC451 Jill B. Who-Dunit

CMSC203 20589 4 SC450 Joey Bag-O-Donuts
CMSC204 21101 4 SC450 Duplicate Of The First
CMSC207 22471 3 DL
";

fn course_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp course file");
    file.write_all(contents.as_bytes())
        .expect("write temp course file");
    file
}

fn sorted(mut lines: Vec<String>) -> Vec<String> {
    lines.sort();
    lines
}

#[test]
fn read_file_loads_and_dedups() {
    let file = course_file(COURSES);
    let mut manager = CourseManager::new();
    let parsed = manager.read_file(file.path()).unwrap();

    assert_eq!(parsed, 5);
    assert_eq!(manager.store().len(), 4);
    assert_eq!(
        manager.get(21101).to_string(),
        "Course:CMSC100 CRN:21101 Credits:2 Instructor:Janet E. Joy Room:DL"
    );
    assert_eq!(manager.get(22471).instructor(), "");
    assert_eq!(
        sorted(manager.show_all()),
        vec![
            "Course:CMSC100 CRN:21101 Credits:2 Instructor:Janet E. Joy Room:DL",
            "Course:CMSC110 CRN:21561 Credits:3 Instructor:Jill B. Who-Dunit Room:SC451",
            "Course:CMSC203 CRN:20589 Credits:4 Instructor:Joey Bag-O-Donuts Room:SC450",
            "Course:CMSC207 CRN:22471 Credits:3 Instructor: Room:DL",
        ]
    );
}

#[test]
fn earlier_records_win_over_file_contents() {
    let file = course_file(COURSES);
    let mut manager = CourseManager::new();
    manager.add("MATH100", 21101, 3, "MA1", "Hypatia");
    manager.read_file(file.path()).unwrap();
    assert_eq!(manager.get(21101).course_id(), "MATH100");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let mut manager = CourseManager::new();
    match manager.read_file(&path) {
        Err(IngestError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_line_inserts_nothing() {
    let file = course_file("CMSC100 21101 2 DL Janet E. Joy\nCMSC110 abc 3 SC451 Jill\n");
    let mut manager = CourseManager::new();
    match manager.read_file(file.path()) {
        Err(IngestError::MalformedLine { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "CMSC110 abc 3 SC451 Jill");
        }
        other => panic!("expected malformed line, got {other:?}"),
    }
    assert!(manager.store().is_empty());
}

#[tokio::test]
async fn async_read_matches_sync_read() {
    let file = course_file(COURSES);

    let mut sync_manager = CourseManager::new();
    sync_manager.read_file(file.path()).unwrap();

    let mut async_manager = CourseManager::new();
    let parsed = async_manager.read_file_async(file.path()).await.unwrap();

    assert_eq!(parsed, 5);
    assert_eq!(async_manager.show_all(), sync_manager.show_all());
}

#[tokio::test]
async fn async_read_without_trailing_newline() {
    let file = course_file("CMSC100 21101 2 DL Janet E. Joy\nCMSC110 21561 3 SC451 Jill");
    let mut manager = CourseManager::new();
    assert_eq!(manager.read_file_async(file.path()).await.unwrap(), 2);
    assert_eq!(manager.get(21561).instructor(), "Jill");
}

#[tokio::test]
async fn async_read_reports_global_line_numbers() {
    let mut contents = String::new();
    for crn in 0..1000 {
        contents.push_str(&format!("CMSC{crn} {crn} 3 R{crn} Staff Member\n"));
    }
    contents.push_str("CMSC1000 not-a-crn 3 R1 Staff\n");
    let file = course_file(&contents);

    let mut manager = CourseManager::with_capacity(1000).unwrap();
    match manager.read_file_async(file.path()).await {
        Err(IngestError::MalformedLine { line, .. }) => assert_eq!(line, 1001),
        other => panic!("expected malformed line, got {other:?}"),
    }
}

#[tokio::test]
async fn async_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = CourseManager::new();
    assert!(matches!(
        manager.read_file_async(dir.path().join("absent.txt")).await,
        Err(IngestError::Io { .. })
    ));
}
