use super::*;
use std::fs::{create_dir, write};

fn present(state: State) -> Snapshot {
    match state {
        State::Present(s) => s,
        other => panic!("expected a snapshot, got {other:?}"),
    }
}

#[test]
fn load_reports_missing_for_absent_path() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let state = load(&tmp.path().join("nope.txt")).expect("load");
    assert_eq!(state, State::Missing);
}

#[test]
fn load_reports_missing_for_path_through_a_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("plain.txt");
    write(&file, b"x").expect("write file");

    let state = load(&file.join("child")).expect("load");
    assert_eq!(state, State::Missing);
}

#[test]
fn load_captures_length_and_plain_file_attributes() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("notes.txt");
    write(&path, b"hello world").expect("write file");

    let snap = present(load(&path).expect("load"));

    assert_eq!(snap.length, 11);
    assert!(!snap.attributes.is_directory());
    assert!(!snap.attributes.is_read_only());
    assert!(snap.modified > UNIX_EPOCH);
}

#[test]
fn load_marks_directories_with_zero_length() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("sub");
    create_dir(&path).expect("create dir");

    let snap = present(load(&path).expect("load"));

    assert!(snap.attributes.is_directory());
    assert_eq!(snap.length, 0);
}

#[cfg(unix)]
#[test]
fn unix_attributes_are_derived_from_name_mode_and_link() {
    use std::os::unix::fs::{PermissionsExt, symlink};

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    let plain = root.join("plain.txt");
    write(&plain, b"x").expect("write plain");
    assert_eq!(
        present(load(&plain).expect("load")).attributes,
        FileAttributes::NORMAL
    );

    let hidden = root.join(".env");
    write(&hidden, b"x").expect("write hidden");
    assert_eq!(
        present(load(&hidden).expect("load")).attributes,
        FileAttributes::HIDDEN
    );

    let locked = root.join("locked.txt");
    write(&locked, b"x").expect("write locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).expect("chmod");
    assert_eq!(
        present(load(&locked).expect("load")).attributes,
        FileAttributes::READ_ONLY
    );

    let link = root.join("link.txt");
    symlink(&plain, &link).expect("symlink");
    let link_snap = present(load(&link).expect("load"));
    assert_eq!(link_snap.attributes, FileAttributes::REPARSE_POINT);
    assert_eq!(link_snap.length, 1);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_present_not_missing() {
    use std::os::unix::fs::symlink;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let link = tmp.path().join("dangling");
    symlink(tmp.path().join("gone"), &link).expect("symlink");

    let snap = present(load(&link).expect("load"));
    assert!(snap.attributes.contains(FileAttributes::REPARSE_POINT));
}
