//! Heuristics for recognizing the encoding of a data set
//! from its first bytes.

use crate::stream::{InputStream, Result};
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::{Tag, VR};
use dcmcodec_dictionary_std::uids;
use dcmcodec_encoding::transfer_syntax::Endianness;
use tracing::debug;

/// The encoding of a data set, as guessed from its first element.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum DetectedSyntax {
    /// implicit VR, little endian
    ImplicitVRLittleEndian,
    /// explicit VR, little endian
    ExplicitVRLittleEndian,
    /// implicit VR, big endian: recognized, but never supported
    ImplicitVRBigEndian,
    /// explicit VR, big endian
    ExplicitVRBigEndian,
}

impl DetectedSyntax {
    fn new(endianness: Endianness, explicit_vr: bool) -> Self {
        match (endianness, explicit_vr) {
            (Endianness::Little, false) => DetectedSyntax::ImplicitVRLittleEndian,
            (Endianness::Little, true) => DetectedSyntax::ExplicitVRLittleEndian,
            (Endianness::Big, false) => DetectedSyntax::ImplicitVRBigEndian,
            (Endianness::Big, true) => DetectedSyntax::ExplicitVRBigEndian,
        }
    }

    /// The byte order of the encoding.
    pub fn endianness(self) -> Endianness {
        match self {
            DetectedSyntax::ImplicitVRLittleEndian | DetectedSyntax::ExplicitVRLittleEndian => {
                Endianness::Little
            }
            DetectedSyntax::ImplicitVRBigEndian | DetectedSyntax::ExplicitVRBigEndian => {
                Endianness::Big
            }
        }
    }

    /// Whether value representations are explicit.
    pub fn is_explicit_vr(self) -> bool {
        matches!(
            self,
            DetectedSyntax::ExplicitVRLittleEndian | DetectedSyntax::ExplicitVRBigEndian
        )
    }

    /// The UID of the matching standard transfer syntax,
    /// none for implicit VR big endian.
    pub fn uid(self) -> Option<&'static str> {
        match self {
            DetectedSyntax::ImplicitVRLittleEndian => Some(uids::IMPLICIT_VR_LITTLE_ENDIAN),
            DetectedSyntax::ExplicitVRLittleEndian => Some(uids::EXPLICIT_VR_LITTLE_ENDIAN),
            DetectedSyntax::ExplicitVRBigEndian => Some(uids::EXPLICIT_VR_BIG_ENDIAN),
            DetectedSyntax::ImplicitVRBigEndian => None,
        }
    }
}

/// Check whether the two bytes name a standard value representation.
pub fn found_vr(bytes: [u8; 2]) -> bool {
    bytes.iter().all(u8::is_ascii_alphabetic) && VR::from_binary(bytes).is_some()
}

/// Guess the encoding of a data set from the first six bytes
/// of its first element: the tag and, if explicit, the VR.
///
/// Both byte orders of the tag are looked up in the dictionary.
/// When only one of them is known, that byte order wins.
/// When both are known,
/// big endian is chosen only if it yields a group number
/// up to `0x00FF` while little endian does not.
/// When neither is known, little endian is assumed.
///
/// Missing bytes are read as zeros.
pub fn detect_transfer_syntax<D>(bytes: &[u8], dict: &D) -> DetectedSyntax
where
    D: ?Sized + DataDictionary,
{
    let mut head = [0u8; 6];
    let n = bytes.len().min(6);
    head[..n].copy_from_slice(&bytes[..n]);

    let little = Tag(
        u16::from_le_bytes([head[0], head[1]]),
        u16::from_le_bytes([head[2], head[3]]),
    );
    let big = Tag(
        u16::from_be_bytes([head[0], head[1]]),
        u16::from_be_bytes([head[2], head[3]]),
    );
    let explicit_vr = found_vr([head[4], head[5]]);

    let endianness = match (dict.contains(little), dict.contains(big)) {
        (true, false) => Endianness::Little,
        (false, true) => Endianness::Big,
        (false, false) => Endianness::Little,
        (true, true) => {
            if little.group() > 0xff && big.group() <= 0xff {
                Endianness::Big
            } else {
                Endianness::Little
            }
        }
    };

    let detected = DetectedSyntax::new(endianness, explicit_vr);
    debug!("Detected {:?} from first tag {}", detected, little);
    detected
}

/// Guess the encoding of the data set at the cursor of the stream,
/// without consuming any bytes.
pub fn check_transfer_syntax<D>(stream: &mut InputStream, dict: &D) -> Result<DetectedSyntax>
where
    D: ?Sized + DataDictionary,
{
    stream.fill(6)?;
    Ok(detect_transfer_syntax(stream.peek(), dict))
}

/// Check whether the two bytes at the start of `bytes`
/// read as group `0x0002` in either byte order.
pub fn next_tag_is_meta(bytes: &[u8]) -> bool {
    matches!(bytes, [0x02, 0x00, ..] | [0x00, 0x02, ..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_dictionary_std::StandardDataDictionary;

    #[rustfmt::skip]
    const EXPLICIT_LE: &[u8] = &[
        0x08, 0x00, 0x16, 0x00, // (0008,0016) SOPClassUID
        b'U', b'I',
    ];

    #[rustfmt::skip]
    const EXPLICIT_BE: &[u8] = &[
        0x00, 0x08, 0x00, 0x16,
        b'U', b'I',
    ];

    #[rustfmt::skip]
    const IMPLICIT_LE: &[u8] = &[
        0x08, 0x00, 0x16, 0x00,
        0x1a, 0x00, 0x00, 0x00, // length 26
    ];

    #[test]
    fn recognizes_standard_vrs() {
        assert!(found_vr(*b"UI"));
        assert!(found_vr(*b"OB"));
        assert!(!found_vr(*b"XX"));
        assert!(!found_vr([0x1a, 0x00]));
        assert!(!found_vr(*b"ui"));
    }

    #[test]
    fn detects_the_three_base_encodings() {
        let dict = StandardDataDictionary;
        assert_eq!(
            detect_transfer_syntax(EXPLICIT_LE, &dict),
            DetectedSyntax::ExplicitVRLittleEndian
        );
        assert_eq!(
            detect_transfer_syntax(EXPLICIT_BE, &dict),
            DetectedSyntax::ExplicitVRBigEndian
        );
        assert_eq!(
            detect_transfer_syntax(IMPLICIT_LE, &dict),
            DetectedSyntax::ImplicitVRLittleEndian
        );
    }

    #[test]
    fn unknown_tags_default_to_little_endian() {
        let dict = StandardDataDictionary;
        // (0009,1001), private, in both byte orders
        let bytes = [0x09, 0x00, 0x01, 0x10, b'L', b'O'];
        let detected = detect_transfer_syntax(&bytes, &dict);
        assert_eq!(detected, DetectedSyntax::ExplicitVRLittleEndian);
        assert_eq!(detected.uid(), Some("1.2.840.10008.1.2.1"));
    }

    #[test]
    fn group_test_breaks_ties() {
        let dict = StandardDataDictionary;
        // (0002,0000) in big endian order reads as (0200,0000) in little endian,
        // both of which are group lengths known to the dictionary
        let bytes = [0x00, 0x02, 0x00, 0x00, b'U', b'L'];
        assert_eq!(
            detect_transfer_syntax(&bytes, &dict),
            DetectedSyntax::ExplicitVRBigEndian
        );
        let bytes = [0x02, 0x00, 0x00, 0x00, b'U', b'L'];
        assert_eq!(
            detect_transfer_syntax(&bytes, &dict),
            DetectedSyntax::ExplicitVRLittleEndian
        );
    }

    #[test]
    fn implicit_big_endian_has_no_uid() {
        assert_eq!(DetectedSyntax::ImplicitVRBigEndian.uid(), None);
        assert_eq!(
            DetectedSyntax::ImplicitVRBigEndian.endianness(),
            Endianness::Big
        );
        assert!(!DetectedSyntax::ImplicitVRBigEndian.is_explicit_vr());
    }

    #[test]
    fn meta_group_in_either_byte_order() {
        assert!(next_tag_is_meta(&[0x02, 0x00, 0x10, 0x00]));
        assert!(next_tag_is_meta(&[0x00, 0x02]));
        assert!(!next_tag_is_meta(&[0x08, 0x00]));
        assert!(!next_tag_is_meta(&[0x02]));
    }

    #[test]
    fn checks_without_consuming() {
        let mut stream = InputStream::from_bytes(IMPLICIT_LE.to_vec());
        let detected = check_transfer_syntax(&mut stream, &StandardDataDictionary).unwrap();
        assert_eq!(detected, DetectedSyntax::ImplicitVRLittleEndian);
        assert_eq!(stream.tell(), 0);
    }
}
