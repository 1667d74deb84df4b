//! Opaque byte codec.

use std::io::Write;
use std::path::Path;

use super::{Codec, CodecError};

/// Stores the document bytes verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCodec;

impl Codec for RawCodec {
    type Config = Vec<u8>;

    fn write_to(&self, config: &Vec<u8>, sink: &mut dyn Write) -> Result<(), CodecError> {
        sink.write_all(config)?;
        sink.flush()?;
        Ok(())
    }

    fn read_path(&self, path: &Path) -> Result<Vec<u8>, CodecError> {
        Ok(std::fs::read(path)?)
    }
}
