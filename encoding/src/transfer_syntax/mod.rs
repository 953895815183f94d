//! Module containing the DICOM Transfer Syntax data structure and related methods.
//! The `TransferSyntax` describes
//! everything the codec needs to know to decode and encode
//! a data set in a certain transfer syntax:
//! the byte order, whether value representations are explicit,
//! and whether the data set or its pixel data are further encoded.
//!
//! This crate does not host the specific transfer syntaxes. Instead, they are
//! listed in the `dcmcodec-transfer-syntax-registry` crate,
//! which implements [`TransferSyntaxIndex`].

use crate::decode::explicit_be::ExplicitVRBigEndianDecoder;
use crate::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use crate::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use crate::decode::DecodeFrom;
use crate::encode::explicit_be::ExplicitVRBigEndianEncoder;
use crate::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use crate::encode::implicit_le::ImplicitVRLittleEndianEncoder;
use crate::encode::EncodeTo;
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::VR;
use dcmcodec_dictionary_std::StandardDataDictionary;
use std::io::{Read, Write};

pub use byteordered::Endianness;

/// A decoder with its type erased,
/// usable with a borrowed source of any lifetime.
pub type DynDecoder = Box<dyn for<'r> DecodeFrom<dyn Read + 'r>>;

/// An encoder with its type erased,
/// usable with a borrowed writer of any lifetime.
pub type DynEncoder = Box<dyn for<'w> EncodeTo<dyn Write + 'w>>;

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements beyond the element encoding.
    codec: Codec,
}

/// Trait for containers of transfer syntax specifiers.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of a trailing null character (`\0`) or space in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

/// What a transfer syntax requires on top of plain element encoding.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Codec {
    /// Nothing else is required.
    None,
    /// The data set after the file meta group
    /// is compressed with the raw deflate algorithm.
    Deflated,
    /// Pixel data is encapsulated in fragments.
    /// The data set can be read and written,
    /// pixel data samples are kept in their encoded form.
    EncapsulatedPixelData,
    /// The data set cannot be decoded by this codec.
    Unsupported,
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Check whether this transfer syntax specifier has explicit value representations.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain the extra requirements of this transfer syntax.
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// Check whether the data set after the file meta group is deflated.
    pub fn is_deflated(&self) -> bool {
        self.codec == Codec::Deflated
    }

    /// Check whether pixel data is encapsulated in this transfer syntax.
    pub fn is_encapsulated_pixel_data(&self) -> bool {
        self.codec == Codec::EncapsulatedPixelData
    }

    /// Check whether data sets in this transfer syntax
    /// can be decoded and encoded.
    /// Implicit VR Big Endian is never supported.
    pub fn is_supported(&self) -> bool {
        self.codec != Codec::Unsupported
            && (self.explicit_vr || self.byte_order == Endianness::Little)
    }

    /// The size in bytes of an element header with the given VR.
    pub fn header_size(&self, vr: VR) -> u32 {
        if self.explicit_vr && vr.has_long_length() {
            12
        } else {
            8
        }
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax,
    /// using the standard data dictionary for implicit VR.
    /// Can yield none if the transfer syntax is not supported.
    pub fn decoder(&self) -> Option<DynDecoder> {
        self.decoder_for(StandardDataDictionary)
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax
    /// and given data dictionary.
    /// Can yield none if the transfer syntax is not supported.
    pub fn decoder_for<D>(&self, dict: D) -> Option<DynDecoder>
    where
        D: 'static + DataDictionary,
    {
        if !self.is_supported() {
            return None;
        }
        match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Some(Box::new(ImplicitVRLittleEndianDecoder::with_dict(dict))),
            (Endianness::Little, true) => Some(Box::new(ExplicitVRLittleEndianDecoder::default())),
            (Endianness::Big, true) => Some(Box::new(ExplicitVRBigEndianDecoder::default())),
            _ => None,
        }
    }

    /// Retrieve the appropriate data element encoder for this transfer syntax.
    /// Can yield none if the transfer syntax is not supported.
    pub fn encoder(&self) -> Option<DynEncoder> {
        if !self.is_supported() {
            return None;
        }
        match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Some(Box::new(ImplicitVRLittleEndianEncoder::default())),
            (Endianness::Little, true) => Some(Box::new(ExplicitVRLittleEndianEncoder::default())),
            (Endianness::Big, true) => Some(Box::new(ExplicitVRBigEndianEncoder::default())),
            _ => None,
        }
    }
}
