//! Capability-based helpers for reading request files.
//!
//! Paths are split into an ambient parent directory handle and a file name so
//! every read goes through a `cap-std` directory capability.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open the parent directory of `path` and return it with the file name.
///
/// A bare file name resolves against the current directory.
pub fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Whether `path` is a regular file.
///
/// Fails with [`io::ErrorKind::NotFound`] when nothing exists at `path`.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Read the whole of `path` as UTF-8 text.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.read_to_string(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn utf8_join(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 temp path")
    }

    #[rstest]
    fn reads_file_contents(temp_dir: TempDir) {
        let path = utf8_join(&temp_dir, "request.json");
        std::fs::write(&path, r#"{"origin_city":"London"}"#).expect("write request");

        let contents = read_utf8_file(&path).expect("read request");

        assert_eq!(contents, r#"{"origin_city":"London"}"#);
        assert!(file_is_file(&path).expect("stat request"));
    }

    #[rstest]
    fn missing_files_report_not_found(temp_dir: TempDir) {
        let path = utf8_join(&temp_dir, "absent.json");

        let err = file_is_file(&path).expect_err("stat should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        let err = read_utf8_file(&path).expect_err("read should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn directories_are_not_files(temp_dir: TempDir) {
        let path = utf8_join(&temp_dir, "nested");
        std::fs::create_dir(&path).expect("create nested dir");

        assert!(!file_is_file(&path).expect("stat directory"));
    }

    #[rstest]
    fn root_has_no_file_name() {
        let err = parent_dir_and_name(Utf8Path::new("/")).expect_err("root is not a file");

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
