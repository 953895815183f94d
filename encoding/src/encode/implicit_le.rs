//! Implicit VR Little Endian encoding implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{encode_tag_and_length, Encode, Result};
use dcmcodec_core::{DataElementHeader, Tag};
use std::io::Write;

/// A concrete encoder for the transfer syntax ImplicitVRLittleEndian.
///
/// The value representation is not written,
/// readers resolve it from a data dictionary.
#[derive(Debug, Default, Clone)]
pub struct ImplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl Encode for ImplicitVRLittleEndianEncoder {
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        encode_tag_and_length(&self.basic, to, de.tag, de.len.0)?;
        Ok(8)
    }

    fn encode_item_tag<W>(&self, to: W, tag: Tag, len: u32) -> Result<()>
    where
        W: Write,
    {
        encode_tag_and_length(&self.basic, to, tag, len)
    }
}
