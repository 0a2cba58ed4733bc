//! Per-item wire codec.
//!
//! A container save is `[i32 version][i32 count][count x item]`. The header is
//! fixed; the item records are produced by an [`ItemCodec`], so a host with its
//! own item registry can plug in a different record format while keeping the
//! container layout.
mod binary;

pub use binary::BincodeItemCodec;

use std::io::{Read, Write};

use thiserror::Error;

use crate::error::{ErrorSeverity, InventoryError};
use crate::item::Item;

/// Errors raised while encoding or decoding a single record.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encoding(String),
}

impl InventoryError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Recoverable,
            Self::Encoding(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "CODEC_IO",
            Self::Encoding(_) => "CODEC_ENCODING",
        }
    }
}

/// Reads and writes one item record.
///
/// Records are keyed by variant tag, and the tag assignment must stay stable
/// across releases. `read_item` returns `Ok(None)` for an explicit null slot.
pub trait ItemCodec {
    fn write_item(&self, item: &Item, writer: &mut dyn Write) -> Result<(), CodecError>;

    fn read_item(&self, reader: &mut dyn Read) -> Result<Option<Item>, CodecError>;
}

pub(crate) fn write_i32(writer: &mut dyn Write, value: i32) -> Result<(), CodecError> {
    bincode::serialize_into(writer, &value).map_err(binary::into_codec_error)
}

pub(crate) fn read_i32(reader: &mut dyn Read) -> Result<i32, CodecError> {
    bincode::deserialize_from(reader).map_err(binary::into_codec_error)
}
