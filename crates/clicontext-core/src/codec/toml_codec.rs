//! TOML codec for serde documents.
//!
//! Uses `toml::to_string_pretty` on the way out and `toml::from_str` on the
//! way in, the same pair the settings file uses.

use std::fmt;
use std::io::Write;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Codec, CodecError};

/// Stores any `T: Serialize + DeserializeOwned` as a TOML document.
pub struct TomlCodec<T> {
    _doc: PhantomData<fn() -> T>,
}

impl<T> TomlCodec<T> {
    pub fn new() -> Self {
        Self { _doc: PhantomData }
    }
}

impl<T> Default for TomlCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TomlCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TomlCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TomlCodec").finish()
    }
}

impl<T> Codec for TomlCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Config = T;

    fn write_to(&self, config: &T, sink: &mut dyn Write) -> Result<(), CodecError> {
        let text = toml::to_string_pretty(config)?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn read_path(&self, path: &Path) -> Result<T, CodecError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::{ContextConfig, ServerConfig};

    #[test]
    fn test_written_document_reads_back_equal() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prod.hcl");
        let cfg = ContextConfig {
            server: ServerConfig {
                address: "prod.example.com:9701".to_string(),
                tls: true,
                auth_token: Some("s3cret".to_string()),
                require_auth: true,
                ..ServerConfig::default()
            },
        };
        let codec = TomlCodec::<ContextConfig>::new();

        // Act
        let mut file = std::fs::File::create(&path).expect("create");
        codec.write_to(&cfg, &mut file).expect("write");
        drop(file);
        let restored = codec.read_path(&path).expect("read");

        // Assert
        assert_eq!(restored, cfg);
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.hcl");
        std::fs::write(&path, "[[[ not valid toml").expect("write");

        // Act
        let err = TomlCodec::<ContextConfig>::new()
            .read_path(&path)
            .expect_err("malformed document must fail");

        // Assert
        assert!(matches!(err, CodecError::Parse(_)));
    }
}
