//! The `_default.hcl` indicator.
//!
//! The indicator is in one of three states:
//!
//! ```text
//! Absent  ──set──►  Symlink(<dir>/<name>.hcl)   (preferred)
//!                   PlainFile("<name>")         (symlinks disabled or failed)
//!    ▲                     │
//!    └──────clear──────────┘
//! ```
//!
//! Both representations decode to the same name: a symlink by stripping the
//! extension from its target's base name, a plain file by taking its full
//! contents.  [`DefaultPointer::read`] never follows the link, so a default
//! whose context file was removed still reports its name.
//!
//! The plain-file write is not atomic.  The indicator is tiny and
//! hand-editable, and a torn write is repaired by the next `set`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::StoreError;
use super::fs_util::{create_file, remove_if_exists};
use super::path_policy::PathPolicy;

/// Reads and writes the default indicator at a fixed path.
#[derive(Debug, Clone)]
pub struct DefaultPointer {
    path: PathBuf,
    use_symlinks: bool,
}

impl DefaultPointer {
    /// `use_symlinks = false` always writes the plain-file form.  Existing
    /// symlink indicators stay readable either way.
    pub fn new(path: impl Into<PathBuf>, use_symlinks: bool) -> Self {
        Self {
            path: path.into(),
            use_symlinks,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn uses_symlinks(&self) -> bool {
        self.use_symlinks
    }

    /// Points the indicator at the context file `src` named `name`.
    ///
    /// Tries a symlink first (when enabled) and falls back to a plain file
    /// holding `name` if the link could not be created.
    pub fn set(&self, src: &Path, name: &str) -> Result<(), StoreError> {
        self.set_with(src, name, create_symlink)
    }

    /// [`set`](Self::set) with the link-creating call supplied by the caller.
    pub(crate) fn set_with<F>(&self, src: &Path, name: &str, link: F) -> Result<(), StoreError>
    where
        F: FnOnce(&Path, &Path) -> io::Result<()>,
    {
        if self.use_symlinks {
            match self.link_to(src, link) {
                Ok(()) => {
                    debug!("default indicator linked to {}", src.display());
                    return Ok(());
                }
                Err(e) => warn!(
                    "could not link {} to {}: {e}; writing plain default indicator",
                    self.path.display(),
                    src.display()
                ),
            }
        }

        self.write_plain(name)
            .map_err(|source| StoreError::io(&self.path, source))?;
        debug!("default indicator written as plain file naming {name:?}");
        Ok(())
    }

    /// Removes the indicator.  An absent indicator is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        remove_if_exists(&self.path).map_err(|source| StoreError::io(&self.path, source))
    }

    /// Returns the name the indicator designates, or `None` when there is no
    /// default.
    pub fn read(&self) -> Result<Option<String>, StoreError> {
        let meta = match fs::symlink_metadata(&self.path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if meta.file_type().is_symlink() {
            let target =
                fs::read_link(&self.path).map_err(|source| StoreError::io(&self.path, source))?;
            return Ok(Some(PathPolicy::name_from_path(&target)));
        }

        let bytes = fs::read(&self.path).map_err(|source| StoreError::io(&self.path, source))?;
        let name = String::from_utf8(bytes).map_err(|e| {
            StoreError::io(&self.path, io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        if name.is_empty() {
            return Ok(None);
        }
        Ok(Some(name))
    }

    /// Replaces the indicator with a symlink to `src`.
    ///
    /// Some platforms report failure even though the link was created, so the
    /// result is decided by reading the link back: a readback equal to `src`
    /// wins over the creation error.
    fn link_to<F>(&self, src: &Path, link: F) -> io::Result<()>
    where
        F: FnOnce(&Path, &Path) -> io::Result<()>,
    {
        remove_if_exists(&self.path)?;

        let created = link(src, &self.path);
        match fs::read_link(&self.path) {
            Ok(target) if target == src => Ok(()),
            _ => created,
        }
    }

    fn write_plain(&self, name: &str) -> io::Result<()> {
        // Writing through a leftover symlink would overwrite the context file
        // it points at.
        remove_if_exists(&self.path)?;

        let mut file = create_file(&self.path)?;
        file.write_all(name.as_bytes())?;
        file.flush()
    }
}

#[cfg(unix)]
fn create_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

#[cfg(windows)]
fn create_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_src: &Path, _dst: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
