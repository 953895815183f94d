//! Explicit VR Little Endian encoding implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{encode_explicit_header, encode_tag_and_length, Encode, Result};
use dcmcodec_core::{DataElementHeader, Tag};
use std::io::Write;

/// A concrete encoder for the transfer syntax ExplicitVRLittleEndian
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl Encode for ExplicitVRLittleEndianEncoder {
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

#[cfg(test)]
mod tests {
    use super::ExplicitVRLittleEndianEncoder;
    use crate::encode::{Encode, Error};
    use dcmcodec_core::header::{DataElementHeader, Length};
    use dcmcodec_core::{Tag, VR};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x02, 0x00,     // (0002,0002) Media Storage SOP Class UID
            b'U', b'I',             // VR: UI
            0x1A, 0x00,             // Length: 26 bytes
        0x08, 0x00, 0x1B, 0x04,     // (0008,041B) RecordKey
            b'O', b'B',             // VR: OB
            0x00, 0x00,             // Reserved, always 0
            0x02, 0x00, 0x00, 0x00, // Length: 2 bytes
        0xFE, 0xFF, 0x00, 0xE0,     // Item
            0x10, 0x00, 0x00, 0x00, // Length: 16 bytes
        0xFE, 0xFF, 0x0D, 0xE0,     // Item delimiter
            0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0xDD, 0xE0,     // Sequence delimiter
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn encode_headers() {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();

        let bytes = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0002, 0x0002), VR::UI, Length(26)),
            )
            .unwrap();
        assert_eq!(bytes, 8);
        let bytes = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0008, 0x041B), VR::OB, Length(2)),
            )
            .unwrap();
        assert_eq!(bytes, 12);
        enc.encode_item_header(&mut out, 16).unwrap();
        enc.encode_item_delimiter(&mut out).unwrap();
        enc.encode_sequence_delimiter(&mut out).unwrap();

        assert_eq!(&out[..], RAW);
    }

    #[test]
    fn short_length_overflow_is_an_error() {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        let res = enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(0x1_0000)),
        );
        assert!(matches!(res, Err(Error::LengthOverflow { .. })));
    }
}
