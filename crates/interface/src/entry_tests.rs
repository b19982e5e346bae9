use super::*;
use crate::{FsError, MockDirectoryInfo, MockFileInfo};
use chrono::{Local, TimeZone, Utc};

fn file_entry(path: &str) -> FileSystemEntry {
    FileSystemEntry::File(Box::new(MockFileInfo::at(path)))
}

fn dir_entry(path: &str) -> FileSystemEntry {
    FileSystemEntry::Directory(Box::new(MockDirectoryInfo::at(path)))
}

#[test]
fn variant_queries_match_the_tag() {
    let file = file_entry("/srv/app/config.toml");
    let dir = dir_entry("/srv/app/logs");

    assert!(file.is_file() && !file.is_directory());
    assert!(dir.is_directory() && !dir.is_file());
    assert!(file.as_file().is_some() && file.as_directory().is_none());
    assert!(dir.as_directory().is_some() && dir.as_file().is_none());
}

#[test]
fn info_exposes_shared_accessors_for_both_variants() {
    let file = file_entry("/srv/app/config.toml");
    let dir = dir_entry("/srv/app/logs");

    assert_eq!(file.name(), "config.toml");
    assert_eq!(file.info().extension(), ".toml");
    assert_eq!(dir.name(), "logs");
    assert_eq!(dir.info().extension(), "");
}

#[test]
fn into_conversions_keep_or_drop_by_variant() {
    assert!(file_entry("/a.txt").into_file().is_some());
    assert!(file_entry("/a.txt").into_directory().is_none());
    assert!(dir_entry("/a").into_directory().is_some());
    assert!(dir_entry("/a").into_file().is_none());
}

#[test]
fn debug_shows_variant_and_path() {
    assert_eq!(format!("{:?}", file_entry("/a.txt")), "File(\"/a.txt\")");
    assert_eq!(format!("{:?}", dir_entry("/a")), "Directory(\"/a\")");
}

#[test]
fn local_time_accessors_are_derived_from_utc() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    let mut file = MockFileInfo::at("/a.txt");
    file.expect_last_write_time_utc()
        .returning(move || Ok(instant));
    file.expect_set_creation_time_utc()
        .withf(move |t| *t == instant)
        .times(1)
        .returning(|_| Ok(()));

    let local = file.last_write_time().expect("local time");
    assert_eq!(local, instant.with_timezone(&Local));

    file.set_creation_time(instant.with_timezone(&Local))
        .expect("setter forwards to utc");
}

#[test]
fn errors_from_mocks_flow_through_unchanged() {
    let mut dir = MockDirectoryInfo::at("/missing");
    dir.expect_get_files()
        .returning(|| Err(FsError::not_found("get_files", "/missing")));

    let err = match dir.get_files() {
        Err(e) => e,
        Ok(_) => panic!("expected an error"),
    };
    assert!(err.is_not_found());
}
