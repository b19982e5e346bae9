use super::*;
use crate::printer::OutputFormat;
use chrono::{TimeZone, Utc};
use syswrap_interface::{FileAttributes, FsError, MockDirectoryInfo};

fn mocked_directory() -> FileSystemEntry {
    let t = Utc
        .with_ymd_and_hms(2020, 5, 1, 12, 0, 0)
        .single()
        .expect("valid time");
    let mut dir = MockDirectoryInfo::at("/srv/logs");
    dir.expect_refresh().times(1).returning(|| Ok(()));
    dir.expect_exists().return_const(true);
    dir.expect_attributes()
        .returning(|| Ok(FileAttributes::DIRECTORY));
    dir.expect_creation_time_utc().returning(move || Ok(t));
    dir.expect_last_access_time_utc().returning(move || Ok(t));
    dir.expect_last_write_time_utc().returning(move || Ok(t));
    FileSystemEntry::Directory(Box::new(dir))
}

#[test]
fn describes_a_directory_without_size() {
    let entry = mocked_directory();
    let mut printer = EntryPrinter::new(Vec::new(), OutputFormat::Human);

    describe(&entry, &mut printer).expect("describe");

    let out = String::from_utf8(printer.into_inner()).expect("utf8");
    assert!(out.contains("Kind: directory"));
    assert!(out.contains("Attributes: DIRECTORY"));
    assert!(!out.contains("Size:"));
}

#[test]
fn refresh_failure_is_reported_as_the_fs_error() {
    let mut dir = MockDirectoryInfo::at("/srv/gone");
    dir.expect_refresh()
        .returning(|| Err(FsError::not_found("refresh", "/srv/gone")));
    let entry = FileSystemEntry::Directory(Box::new(dir));
    let mut printer = EntryPrinter::new(Vec::new(), OutputFormat::Json);

    let err = describe(&entry, &mut printer).expect_err("refresh fails");

    assert!(err.downcast_ref::<FsError>().is_some_and(FsError::is_not_found));
    assert!(printer.into_inner().is_empty());
}

#[test]
fn stat_of_a_real_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("notes.md");
    std::fs::write(&path, b"hello").expect("write file");

    let entry = syswrap_fs::open_entry(&path).expect("open");
    let mut printer = EntryPrinter::new(Vec::new(), OutputFormat::Json);
    describe(&entry, &mut printer).expect("describe");

    let out = String::from_utf8(printer.into_inner()).expect("utf8");
    let value: serde_json::Value = serde_json::from_str(out.trim()).expect("json");
    assert_eq!(value["kind"], "file");
    assert_eq!(value["name"], "notes.md");
    assert_eq!(value["extension"], ".md");
    assert_eq!(value["exists"], true);
    assert_eq!(value["length"], 5);
}
