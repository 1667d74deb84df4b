//! Small filesystem helpers shared by the store and the default pointer.
//!
//! New directories get mode 0755 and new files 0644 on Unix (subject to the
//! process umask).  Existing entries are never chmod-ed.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Creates `dir` and any missing parents.
pub(crate) fn ensure_dir(dir: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
    }

    #[cfg(not(unix))]
    {
        fs::create_dir_all(dir)
    }
}

/// Opens `path` for writing, creating it or truncating an existing file.
pub(crate) fn create_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}

/// Removes the file at `path`.  A missing file counts as success.
pub(crate) fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_remove_if_exists_ignores_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        remove_if_exists(&dir.path().join("ghost")).expect("missing file is not an error");
    }

    #[test]
    fn test_create_file_truncates_existing_contents() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("f.hcl");
        fs::write(&path, "a much longer previous body").expect("seed");

        // Act
        let mut f = create_file(&path).expect("create");
        f.write_all(b"short").expect("write");
        drop(f);

        // Assert
        assert_eq!(fs::read(&path).expect("read"), b"short");
    }

    #[test]
    fn test_ensure_dir_creates_nested_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b").join("c");
        ensure_dir(&nested).expect("create nested");
        assert!(nested.is_dir());
        // Second call on an existing directory is fine.
        ensure_dir(&nested).expect("idempotent");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_is_at_most_0644() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("m.hcl");
        drop(create_file(&path).expect("create"));

        let mode = fs::metadata(&path).expect("stat").permissions().mode() & 0o777;
        assert_eq!(mode & !0o644, 0, "unexpected permission bits {mode:o}");
    }
}
