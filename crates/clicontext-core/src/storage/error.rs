//! Error type returned by [`Store`](super::store::Store) operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::CodecError;

/// Error type for context store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named context has no file on disk.
    #[error("context {name:?} does not exist")]
    NotFound { name: String },

    /// The destination of a no-clobber rename is already taken.
    #[error("context {name:?} already exists")]
    AlreadyExists { name: String },

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The codec failed to read or write the document.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// No `StoreOption::Directory` was supplied.
    #[error("no context directory configured")]
    MissingDirectory,
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn not_found(name: &str) -> Self {
        StoreError::NotFound {
            name: name.to_string(),
        }
    }

    /// Returns `true` for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_context() {
        let err = StoreError::not_found("staging");
        assert_eq!(err.to_string(), "context \"staging\" does not exist");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_error_message_includes_path() {
        let err = StoreError::io(
            Path::new("/tmp/ctx/prod.hcl"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().contains("/tmp/ctx/prod.hcl"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_codec_error_message_is_passed_through() {
        let inner = CodecError::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        let expected = inner.to_string();
        let err = StoreError::from(inner);
        assert_eq!(err.to_string(), expected);
    }
}
