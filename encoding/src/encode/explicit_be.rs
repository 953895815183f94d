//! Explicit VR Big Endian encoding implementation

use crate::encode::basic::BigEndianBasicEncoder;
use crate::encode::{encode_explicit_header, encode_tag_and_length, Encode, Result};
use dcmcodec_core::{DataElementHeader, Tag};
use std::io::Write;

/// A concrete encoder for the transfer syntax ExplicitVRBigEndian
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianEncoder {
    basic: BigEndianBasicEncoder,
}

impl Encode for ExplicitVRBigEndianEncoder {
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        encode_explicit_header(&self.basic, to, de)
    }

    fn encode_item_tag<W>(&self, to: W, tag: Tag, len: u32) -> Result<()>
    where
        W: Write,
    {
        encode_tag_and_length(&self.basic, to, tag, len)
    }
}
