//! `mockall` doubles for the accessor traits.
//!
//! Only the required methods are mocked. The local-time accessors keep their
//! provided implementations, so setting expectations on the `*_utc` methods
//! covers both forms.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use mockall::mock;

use crate::{
    DirectoryInfo, EntryIter, FileAttributes, FileInfo, FileSystemEntry, FileSystemInfo,
    FsResult, SearchOption,
};

mock! {
    pub FileSystemInfo {}

    impl FileSystemInfo for FileSystemInfo {
        fn attributes(&self) -> FsResult<FileAttributes>;
        fn set_attributes(&self, attributes: FileAttributes) -> FsResult<()>;
        fn creation_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_creation_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn last_access_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_last_access_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn last_write_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_last_write_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn exists(&self) -> bool;
        fn extension(&self) -> String;
        fn full_name(&self) -> PathBuf;
        fn name(&self) -> String;
        fn delete(&self) -> FsResult<()>;
        fn refresh(&self) -> FsResult<()>;
        fn original_path(&self) -> String;
    }
}

mock! {
    pub FileInfo {}

    impl FileSystemInfo for FileInfo {
        fn attributes(&self) -> FsResult<FileAttributes>;
        fn set_attributes(&self, attributes: FileAttributes) -> FsResult<()>;
        fn creation_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_creation_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn last_access_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_last_access_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn last_write_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_last_write_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn exists(&self) -> bool;
        fn extension(&self) -> String;
        fn full_name(&self) -> PathBuf;
        fn name(&self) -> String;
        fn delete(&self) -> FsResult<()>;
        fn refresh(&self) -> FsResult<()>;
        fn original_path(&self) -> String;
    }

    impl FileInfo for FileInfo {
        fn length(&self) -> FsResult<u64>;
        fn directory_name(&self) -> Option<PathBuf>;
        fn directory(&self) -> Option<Box<dyn DirectoryInfo>>;
        fn is_read_only(&self) -> FsResult<bool>;
        fn set_is_read_only(&self, read_only: bool) -> FsResult<()>;
    }
}

mock! {
    pub DirectoryInfo {}

    impl FileSystemInfo for DirectoryInfo {
        fn attributes(&self) -> FsResult<FileAttributes>;
        fn set_attributes(&self, attributes: FileAttributes) -> FsResult<()>;
        fn creation_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_creation_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn last_access_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_last_access_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn last_write_time_utc(&self) -> FsResult<DateTime<Utc>>;
        fn set_last_write_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;
        fn exists(&self) -> bool;
        fn extension(&self) -> String;
        fn full_name(&self) -> PathBuf;
        fn name(&self) -> String;
        fn delete(&self) -> FsResult<()>;
        fn refresh(&self) -> FsResult<()>;
        fn original_path(&self) -> String;
    }

    impl DirectoryInfo for DirectoryInfo {
        fn parent(&self) -> Option<Box<dyn DirectoryInfo>>;
        fn root(&self) -> Box<dyn DirectoryInfo>;
        fn create(&self) -> FsResult<()>;
        fn create_subdirectory(&self, name: &str) -> FsResult<Box<dyn DirectoryInfo>>;
        fn delete_recursive(&self, recursive: bool) -> FsResult<()>;
        fn get_directories(&self) -> FsResult<Vec<Box<dyn DirectoryInfo>>>;
        fn get_files(&self) -> FsResult<Vec<Box<dyn FileInfo>>>;
        fn get_file_system_infos(&self) -> FsResult<Vec<FileSystemEntry>>;
        fn enumerate_directories(
            &self,
            pattern: &str,
            option: SearchOption,
        ) -> FsResult<EntryIter<Box<dyn DirectoryInfo>>>;
        fn enumerate_files(
            &self,
            pattern: &str,
            option: SearchOption,
        ) -> FsResult<EntryIter<Box<dyn FileInfo>>>;
        fn enumerate_file_system_infos(
            &self,
            pattern: &str,
            option: SearchOption,
        ) -> FsResult<EntryIter<FileSystemEntry>>;
    }
}

impl MockFileInfo {
    /// A mock answering the path-derived accessors for `path`.
    pub fn at(path: &str) -> Self {
        let mut mock = Self::new();
        let path = PathBuf::from(path);
        let name = file_name_of(&path);
        let extension = name
            .rfind('.')
            .filter(|i| i + 1 < name.len())
            .map(|i| name[i..].to_owned())
            .unwrap_or_default();
        mock.expect_name().return_const(name);
        mock.expect_extension().return_const(extension);
        mock.expect_original_path()
            .return_const(path.to_string_lossy().into_owned());
        mock.expect_full_name().return_const(path);
        mock
    }
}

impl MockDirectoryInfo {
    /// A mock answering the path-derived accessors for `path`.
    pub fn at(path: &str) -> Self {
        let mut mock = Self::new();
        let path = PathBuf::from(path);
        mock.expect_name().return_const(file_name_of(&path));
        mock.expect_extension().return_const(String::new());
        mock.expect_original_path()
            .return_const(path.to_string_lossy().into_owned());
        mock.expect_full_name().return_const(path);
        mock
    }
}

fn file_name_of(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
