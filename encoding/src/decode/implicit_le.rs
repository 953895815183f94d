//! Header decoding of Implicit VR Little Endian,
//! where value representations come from a data dictionary.

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{decode_length, decode_sequence_item_header, decode_tag, Decode, Result};
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::header::{DataElementHeader, SequenceItemHeader};
use dcmcodec_core::{Tag, VR};
use dcmcodec_dictionary_std::StandardDataDictionary;
use std::fmt;
use std::io::Read;

/// The implicit VR decoder of the standard dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A header decoder for Implicit VR Little Endian.
///
/// Tags unknown to the dictionary get the VR `UN`.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
    basic: LittleEndianBasicDecoder,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &format_args!("{}", std::any::type_name::<D>()))
            .field("basic", &self.basic)
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// A decoder consulting the standard dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// A decoder consulting `dictionary`.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: dictionary,
            basic: LittleEndianBasicDecoder,
        }
    }

    /// Resolve the value representation of an element
    /// encoded without one.
    fn resolve_vr(&self, tag: Tag) -> VR {
        if tag.is_delimitation() {
            return VR::UN;
        }
        self.dict.vr_of(tag)
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        let tag = decode_tag(&self.basic, source)?;
        let len = decode_length(&self.basic, source)?;
        Ok((DataElementHeader::new(tag, self.resolve_vr(tag), len), 8))
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        decode_sequence_item_header(&self.basic, source)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use dcmcodec_core::dictionary::empty::EmptyDataDictionary;
    use dcmcodec_core::header::{Length, SequenceItemHeader};
    use dcmcodec_core::{Tag, VR};

    #[rustfmt::skip]
    static DATA: &[u8] = &[
        // (0008,0060) Modality, 2 bytes
        0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00,
            b'M', b'R',
        // (0018,0050) Slice Thickness, 4 bytes
        0x18, 0x00, 0x50, 0x00, 0x04, 0x00, 0x00, 0x00,
            b'1', b'.', b'5', b' ',
        // (0029,1010) private, 2 bytes
        0x29, 0x00, 0x10, 0x10, 0x02, 0x00, 0x00, 0x00,
            0xAB, 0xCD,
        // (6002,3000) Overlay Data of a repeating group, 2 bytes
        0x02, 0x60, 0x00, 0x30, 0x02, 0x00, 0x00, 0x00,
            0x01, 0x00,
        // (7FE0,0010) Pixel Data, undefined length
        0xE0, 0x7F, 0x10, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // item delimiter
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn value_representations_come_from_the_dictionary() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let mut cursor = DATA;
        let mut next = |skip: usize| {
            let (header, read) = dec.decode_header(&mut cursor).unwrap();
            assert_eq!(read, 8);
            if let Some(len) = header.length().get() {
                assert_eq!(len as usize, skip);
            }
            cursor = &cursor[skip..];
            header
        };

        let header = next(2);
        assert_eq!((header.tag(), header.vr()), (Tag(0x0008, 0x0060), VR::CS));
        assert_eq!(next(4).vr(), VR::DS);
        assert_eq!(next(2).vr(), VR::UN);
        assert_eq!(next(2).vr(), VR::OW);
        let header = next(0);
        assert_eq!((header.tag(), header.vr()), (Tag::PIXEL_DATA, VR::OW));
        assert!(header.length().is_undefined());

        assert_eq!(
            dec.decode_item_header(&mut cursor).unwrap(),
            SequenceItemHeader::ItemDelimiter
        );
    }

    #[test]
    fn unknown_without_a_dictionary() {
        let dec = ImplicitVRLittleEndianDecoder::with_dict(EmptyDataDictionary);
        let mut cursor = DATA;
        let (header, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x0008, 0x0060));
        assert_eq!(header.vr(), VR::UN);
        assert_eq!(header.length(), Length(2));
    }
}
