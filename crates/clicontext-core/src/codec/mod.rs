//! Serialization seam between the store and the context document.
//!
//! The store only ever asks a [`Codec`] to write a config into an open file
//! or to read one back from a path.  It never looks at the bytes, so any
//! on-disk representation works as long as the file keeps the `.hcl`
//! extension.
//!
//! Two implementations ship with the crate:
//!
//! - [`RawCodec`] – the document is an opaque `Vec<u8>`.
//! - [`TomlCodec`] – the document is any serde type, stored as TOML.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

pub mod raw;
pub mod toml_codec;

pub use raw::RawCodec;
pub use toml_codec::TomlCodec;

/// Error type for codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Reading or writing the underlying file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be parsed.
    #[error("failed to parse context document: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document could not be serialized.
    #[error("failed to serialize context document: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl CodecError {
    /// Returns `true` if the error reports a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CodecError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Converts a context document to and from its on-disk form.
pub trait Codec {
    /// The in-memory document type.
    type Config;

    /// Serializes `config` into `sink`.
    fn write_to(&self, config: &Self::Config, sink: &mut dyn Write) -> Result<(), CodecError>;

    /// Reads a document from the file at `path`.
    fn read_path(&self, path: &Path) -> Result<Self::Config, CodecError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_error_is_not_found() {
        let err = CodecError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_permission_error_is_not_not_found() {
        let err = CodecError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_parse_error_is_not_not_found() {
        let parse_err = toml::from_str::<toml::Table>("[[[ nope").unwrap_err();
        assert!(!CodecError::from(parse_err).is_not_found());
    }
}
