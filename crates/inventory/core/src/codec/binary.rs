use std::io::{Read, Write};

use bincode::ErrorKind;

use super::{CodecError, ItemCodec};
use crate::item::Item;

/// Default record format: the item as a bincode `Option<Item>`.
///
/// Layout: presence byte (0 = null slot), then a `u32` variant index in
/// declaration order, then the variant fields fixed-width little-endian.
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeItemCodec;

impl ItemCodec for BincodeItemCodec {
    fn write_item(&self, item: &Item, writer: &mut dyn Write) -> Result<(), CodecError> {
        bincode::serialize_into(writer, &Some(item)).map_err(into_codec_error)
    }

    fn read_item(&self, reader: &mut dyn Read) -> Result<Option<Item>, CodecError> {
        bincode::deserialize_from(reader).map_err(into_codec_error)
    }
}

pub(super) fn into_codec_error(err: bincode::Error) -> CodecError {
    match *err {
        ErrorKind::Io(io) => CodecError::Io(io),
        other => CodecError::Encoding(other.to_string()),
    }
}
