//! The context store façade.
//!
//! [`Store`] composes a [`PathPolicy`], a [`Codec`] and a [`DefaultPointer`]
//! into the list / load / set / rename / delete / default operations.
//!
//! # Concurrency
//!
//! There is no locking of any kind.  Two mutating calls against the same
//! directory, from one process or several, may interleave and lose writes or
//! leave a dangling default.  Callers that need that guarantee must hold
//! their own lock around the store.
//!
//! # Partial failure
//!
//! Operations issue several syscalls that are not atomic as a group and
//! nothing is rolled back.  "Not found" on removal is treated as success so
//! an interrupted operation can simply be repeated.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::default_pointer::DefaultPointer;
use super::error::StoreError;
use super::fs_util::{create_file, ensure_dir, remove_if_exists};
use super::path_policy::PathPolicy;
use crate::codec::Codec;
use crate::domain::name::{is_reserved, CONTEXT_EXTENSION};

/// Construction options for [`Store::new`].
///
/// Options are applied in order, so a later option overrides an earlier
/// one of the same kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOption {
    /// Base directory for context files.  Required.  It does not have to
    /// exist yet; [`Store::set`] creates it on first use.
    Directory(PathBuf),
    /// Always write the default indicator as a plain file.  Symlink
    /// indicators written earlier remain readable.
    DisableSymlinks(bool),
}

/// Filesystem-backed collection of named contexts with one optional default.
#[derive(Debug)]
pub struct Store<C> {
    codec: C,
    paths: PathPolicy,
    pointer: DefaultPointer,
}

impl<C: Codec> Store<C> {
    /// Builds a store from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingDirectory`] if no
    /// [`StoreOption::Directory`] was given, or [`StoreError::Io`] if a
    /// relative directory cannot be resolved against the working directory.
    pub fn new(
        codec: C,
        options: impl IntoIterator<Item = StoreOption>,
    ) -> Result<Self, StoreError> {
        let mut dir = None;
        let mut disable_symlinks = false;
        for option in options {
            match option {
                StoreOption::Directory(d) => dir = Some(d),
                StoreOption::DisableSymlinks(v) => disable_symlinks = v,
            }
        }

        let dir = absolute_dir(dir.ok_or(StoreError::MissingDirectory)?)?;
        let paths = PathPolicy::new(dir);
        let pointer = DefaultPointer::new(paths.default_path(), !disable_symlinks);
        Ok(Self {
            codec,
            paths,
            pointer,
        })
    }

    /// The base directory of the store.
    pub fn dir(&self) -> &Path {
        self.paths.dir()
    }

    /// Names of all stored contexts, in directory order.
    ///
    /// A missing base directory yields an empty list.  Reserved entries
    /// (leading `_`), entries without the `.hcl` extension, and entries
    /// whose names are not valid UTF-8 are skipped.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let dir = self.paths.dir();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(dir, e)),
        };

        let suffix = format!(".{CONTEXT_EXTENSION}");
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::io(dir, source))?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                debug!("skipping non-UTF-8 entry {:?}", entry.path());
                continue;
            };
            if is_reserved(file_name) || !file_name.ends_with(&suffix) {
                continue;
            }
            names.push(PathPolicy::name_from_path(Path::new(file_name)));
        }
        Ok(names)
    }

    /// Loads the context `name`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the context file is absent; any other
    /// codec failure as [`StoreError::Codec`].
    pub fn load(&self, name: &str) -> Result<C::Config, StoreError> {
        self.codec
            .read_path(&self.paths.config_path(name))
            .map_err(|e| {
                if e.is_not_found() {
                    StoreError::not_found(name)
                } else {
                    StoreError::Codec(e)
                }
            })
    }

    /// Returns `true` if a context file for `name` exists.
    pub fn exists(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.paths.config_path(name);
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    /// Writes `config` as context `name`, replacing any existing one.
    ///
    /// If the store has no default afterwards, `name` becomes the default.
    /// A failure while promoting is returned but the written context stays
    /// in place.
    pub fn set(&self, name: &str, config: &C::Config) -> Result<(), StoreError> {
        let path = self.paths.config_path(name);
        let dir = path.parent().unwrap_or_else(|| self.paths.dir());
        ensure_dir(dir).map_err(|source| StoreError::io(dir, source))?;

        {
            let mut file = create_file(&path).map_err(|source| StoreError::io(&path, source))?;
            self.codec.write_to(config, &mut file)?;
        }
        debug!("wrote context {name:?} to {}", path.display());

        if self.default_name()?.is_none() {
            info!("no default context; promoting {name:?}");
            self.set_default(name)?;
        }
        Ok(())
    }

    /// Renames context `from` to `to`, overwriting `to` if it exists.
    ///
    /// If `from` was the default, `to` becomes the default.  If `to` was the
    /// default and `from` was not, the store is left without a default.
    ///
    /// Names are compared byte for byte.  On a case-insensitive filesystem
    /// `rename("A", "a")` deletes the destination first, which is the source
    /// file itself, and the context is lost.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `from` does not exist; the store is then
    /// unchanged.
    pub fn rename(&self, from: &str, to: &str) -> Result<(), StoreError> {
        let from_path = self.paths.config_path(from);
        self.require_context(from, &from_path)?;
        if from == to {
            return Ok(());
        }

        self.delete(to)?;

        let to_path = self.paths.config_path(to);
        fs::rename(&from_path, &to_path).map_err(|source| StoreError::io(&from_path, source))?;
        debug!("renamed context {from:?} to {to:?}");

        if self.default_name()?.as_deref() == Some(from) {
            info!("default context renamed; pointing default at {to:?}");
            self.set_default(to)?;
        }
        Ok(())
    }

    /// Like [`rename`](Self::rename) but refuses to overwrite an existing
    /// destination.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `from` does not exist,
    /// [`StoreError::AlreadyExists`] if `to` does.
    pub fn rename_no_clobber(&self, from: &str, to: &str) -> Result<(), StoreError> {
        self.require_context(from, &self.paths.config_path(from))?;
        if from != to && self.exists(to)? {
            return Err(StoreError::AlreadyExists {
                name: to.to_string(),
            });
        }
        self.rename(from, to)
    }

    /// Deletes context `name`.  Deleting a missing context succeeds.
    ///
    /// Deleting the default context also clears the default.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.paths.config_path(name);
        remove_if_exists(&path).map_err(|source| StoreError::io(&path, source))?;
        debug!("deleted context {name:?}");

        if self.default_name()?.as_deref() == Some(name) {
            info!("deleted the default context; clearing default");
            self.unset_default()?;
        }
        Ok(())
    }

    /// Makes `name` the default context.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the context does not exist.
    pub fn set_default(&self, name: &str) -> Result<(), StoreError> {
        let src = self.paths.config_path(name);
        self.require_context(name, &src)?;
        self.pointer.set(&src, name)
    }

    /// Clears the default.  Succeeds when there is no default.
    pub fn unset_default(&self) -> Result<(), StoreError> {
        self.pointer.clear()
    }

    /// Name of the default context, or `None` if there is none.
    ///
    /// The name is not checked against the context files; a dangling default
    /// surfaces as [`StoreError::NotFound`] on the next [`load`](Self::load).
    pub fn default_name(&self) -> Result<Option<String>, StoreError> {
        self.pointer.read()
    }

    fn require_context(&self, name: &str, path: &Path) -> Result<(), StoreError> {
        match fs::metadata(path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::not_found(name)),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

/// Resolves a relative store directory against the working directory.
///
/// Indicator symlinks store their target as given and the OS resolves it
/// from the link's own directory, so the base must be absolute.
fn absolute_dir(dir: PathBuf) -> Result<PathBuf, StoreError> {
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = std::env::current_dir().map_err(|source| StoreError::io(&dir, source))?;
    Ok(cwd.join(dir))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
