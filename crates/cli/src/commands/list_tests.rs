use super::*;
use crate::printer::OutputFormat;
use syswrap_interface::{
    EntryIter, FileInfo, FileSystemEntry, FsError, FsResult, MockDirectoryInfo, MockFileInfo,
};

fn files(paths: &'static [&'static str]) -> FsResult<EntryIter<Box<dyn FileInfo>>> {
    Ok(Box::new(paths.iter().map(|p| {
        Ok(Box::new(MockFileInfo::at(p)) as Box<dyn FileInfo>)
    })))
}

fn printer() -> EntryPrinter<Vec<u8>> {
    EntryPrinter::new(Vec::new(), OutputFormat::Human)
}

fn output(printer: EntryPrinter<Vec<u8>>) -> String {
    String::from_utf8(printer.into_inner()).expect("utf8")
}

fn args(files: bool, dirs: bool) -> ListArgs {
    ListArgs {
        dir: PathBuf::from("."),
        pattern: DEFAULT_SEARCH_PATTERN.to_owned(),
        recursive: false,
        files,
        dirs,
        output: OutputOptions::default(),
    }
}

#[test]
fn flags_select_the_listing() {
    assert_eq!(args(false, false).listing(), Listing::Everything);
    assert_eq!(args(true, false).listing(), Listing::Files);
    assert_eq!(args(false, true).listing(), Listing::Directories);
}

#[test]
fn files_listing_passes_pattern_and_option_through() {
    let mut dir = MockDirectoryInfo::at("/src");
    dir.expect_enumerate_files().times(1).returning(|pattern, option| {
        assert_eq!(pattern, "*.rs");
        assert_eq!(option, SearchOption::AllDirectories);
        files(&["/src/lib.rs", "/src/nested/mod.rs"])
    });
    let mut out = printer();

    let count = list(&dir, "*.rs", SearchOption::AllDirectories, Listing::Files, &mut out)
        .expect("list");

    assert_eq!(count, 2);
    assert_eq!(output(out), "- /src/lib.rs\n- /src/nested/mod.rs\n");
}

#[test]
fn directories_listing_uses_directory_enumeration() {
    let mut dir = MockDirectoryInfo::at("/src");
    dir.expect_enumerate_directories().returning(|_, _| {
        Ok(Box::new(std::iter::once(Ok(
            Box::new(MockDirectoryInfo::at("/src/nested")) as Box<dyn DirectoryInfo>
        ))))
    });
    let mut out = printer();

    let count = list(&dir, "*", SearchOption::TopDirectoryOnly, Listing::Directories, &mut out)
        .expect("list");

    assert_eq!(count, 1);
    assert_eq!(output(out), "d /src/nested\n");
}

#[test]
fn mixed_listing_tags_each_entry() {
    let mut dir = MockDirectoryInfo::at("/src");
    dir.expect_enumerate_file_system_infos().returning(|_, _| {
        let entries: Vec<FsResult<FileSystemEntry>> = vec![
            Ok(FileSystemEntry::Directory(Box::new(MockDirectoryInfo::at("/src/bin")))),
            Ok(FileSystemEntry::File(Box::new(MockFileInfo::at("/src/main.rs")))),
        ];
        Ok(Box::new(entries.into_iter()))
    });
    let mut out = printer();

    list(&dir, "*", SearchOption::TopDirectoryOnly, Listing::Everything, &mut out).expect("list");

    assert_eq!(output(out), "d /src/bin\n- /src/main.rs\n");
}

#[test]
fn error_mid_walk_stops_the_listing() {
    let mut dir = MockDirectoryInfo::at("/src");
    dir.expect_enumerate_files().returning(|_, _| {
        let items: Vec<FsResult<Box<dyn FileInfo>>> = vec![
            Ok(Box::new(MockFileInfo::at("/src/a.rs"))),
            Err(FsError::from_io(
                "enumerate",
                "/src/locked",
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            )),
            Ok(Box::new(MockFileInfo::at("/src/z.rs"))),
        ];
        Ok(Box::new(items.into_iter()))
    });
    let mut out = printer();

    let err = list(&dir, "*", SearchOption::AllDirectories, Listing::Files, &mut out)
        .expect_err("walk error");

    assert!(matches!(
        err.downcast_ref::<FsError>(),
        Some(FsError::Access { .. })
    ));
    assert_eq!(output(out), "- /src/a.rs\n");
}

#[test]
fn invalid_pattern_fails_before_any_output() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    std::fs::write(tmp.path().join("a.txt"), b"").expect("write file");
    let dir = DirectoryInfoWrap::new(tmp.path());
    let mut out = printer();

    let err = list(&dir, "sub/*.txt", SearchOption::TopDirectoryOnly, Listing::Files, &mut out)
        .expect_err("bad pattern");

    assert!(matches!(
        err.downcast_ref::<FsError>(),
        Some(FsError::InvalidPattern { .. })
    ));
    assert!(output(out).is_empty());
}

#[test]
fn real_directory_recursive_listing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    std::fs::create_dir(tmp.path().join("docs")).expect("create docs");
    std::fs::write(tmp.path().join("top.md"), b"").expect("write top");
    std::fs::write(tmp.path().join("docs").join("guide.md"), b"").expect("write guide");
    std::fs::write(tmp.path().join("docs").join("logo.png"), b"").expect("write logo");
    let dir = DirectoryInfoWrap::new(tmp.path());
    let mut out = EntryPrinter::new(Vec::new(), OutputFormat::Json);

    let count = list(&dir, "*.md", SearchOption::AllDirectories, Listing::Files, &mut out)
        .expect("list");

    assert_eq!(count, 2);
    let text = output(out);
    assert!(text.contains("top.md") && text.contains("guide.md"));
    assert!(!text.contains("logo.png"));
}
