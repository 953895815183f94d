//! Decoding of data element headers and sequence item headers.
//!
//! Decoders only interpret headers.
//! Value bytes are consumed by the caller,
//! which knows how much of a value is available at any time.

use byteordered::Endianness;
use dcmcodec_core::header::{
    DataElementHeader, Length, SequenceItemHeader, SequenceItemHeaderError,
};
use dcmcodec_core::{Tag, VR};
use snafu::{Backtrace, ResultExt, Snafu};
use std::fmt;
use std::io::{self, Read};

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

/// The field of a header which could not be read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HeaderField {
    /// attribute tag
    Tag,
    /// two letter value representation
    Vr,
    /// reserved bytes of the 32-bit length form
    Reserved,
    /// value length
    Length,
    /// tag and length of an item or delimiter
    ItemHeader,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            HeaderField::Tag => "tag",
            HeaderField::Vr => "value representation",
            HeaderField::Reserved => "reserved bytes",
            HeaderField::Length => "value length",
            HeaderField::ItemHeader => "item header",
        })
    }
}

/// An error while decoding a header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read the {} of a header", field))]
    ReadField {
        field: HeaderField,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader { source: SequenceItemHeaderError },
}

impl Error {
    /// Whether the source ended before the header was complete,
    /// in which case decoding may be retried once more bytes are available.
    pub fn is_eof(&self) -> bool {
        match self {
            Error::ReadField { source, .. } => source.kind() == io::ErrorKind::UnexpectedEof,
            Error::BadSequenceHeader { .. } => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reading of the binary numbers which make up a header,
/// in a fixed byte order.
///
/// Only the little endian and big endian decoders of [`basic`]
/// implement this, so it does not need to be object safe.
pub trait BasicDecode {
    /// The byte order read by this decoder.
    fn endianness(&self) -> Endianness;

    /// Read an unsigned 16-bit integer.
    fn decode_us<S>(&self, source: S) -> io::Result<u16>
    where
        S: Read;

    /// Read an unsigned 32-bit integer.
    fn decode_ul<S>(&self, source: S) -> io::Result<u32>
    where
        S: Read;

    /// Read a tag, group number first.
    fn decode_tag<S>(&self, mut source: S) -> io::Result<Tag>
    where
        S: Read,
    {
        let group = self.decode_us(&mut source)?;
        let element = self.decode_us(source)?;
        Ok(Tag(group, element))
    }
}

/// Decoding of the headers of one transfer syntax.
pub trait Decode {
    /// Decode the next element header,
    /// along with the number of bytes it took.
    ///
    /// The source is left at the start of the value.
    /// Items and delimiters decode as well, with the VR `UN`.
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read;

    /// Decode the header of an item or delimiter within a sequence,
    /// which never has a VR.
    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read;
}

/// The object safe form of [`Decode`] for a given source type,
/// implemented for every decoder.
///
/// Transfer syntaxes hand out their decoders in this form.
pub trait DecodeFrom<S: ?Sized + Read> {
    /// See [`Decode::decode_header`].
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)>;

    /// See [`Decode::decode_item_header`].
    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader>;
}

impl<S: ?Sized, T: ?Sized> DecodeFrom<S> for T
where
    S: Read,
    T: Decode,
{
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        Decode::decode_header(self, source)
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        Decode::decode_item_header(self, source)
    }
}

/// Decode an explicit VR element header in the byte order of `basic`.
///
/// The VRs with a 16-bit length field are followed by it directly,
/// all others by two reserved bytes and a 32-bit length field.
/// Items and delimiters never carry a VR.
/// A VR code which is not known is read as `UN`,
/// which also has the 32-bit length form.
pub(crate) fn decode_explicit_header<B, S>(
    basic: &B,
    source: &mut S,
) -> Result<(DataElementHeader, usize)>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    let tag = decode_tag(basic, source)?;

    if tag.is_delimitation() {
        let len = decode_length(basic, source)?;
        return Ok((DataElementHeader::new(tag, VR::UN, len), 8));
    }

    let mut vr_code = [0u8; 2];
    source
        .read_exact(&mut vr_code)
        .context(ReadFieldSnafu { field: HeaderField::Vr })?;
    let vr = VR::from_binary(vr_code).unwrap_or(VR::UN);

    if !vr.has_long_length() {
        let len = basic
            .decode_us(&mut *source)
            .context(ReadFieldSnafu { field: HeaderField::Length })?;
        return Ok((DataElementHeader::new(tag, vr, Length(u32::from(len))), 8));
    }

    let mut reserved = [0u8; 2];
    source
        .read_exact(&mut reserved)
        .context(ReadFieldSnafu { field: HeaderField::Reserved })?;
    let len = decode_length(basic, source)?;
    Ok((DataElementHeader::new(tag, vr, len), 12))
}

/// Decode an item header or delimiter.
/// These are the same in every syntax apart from the byte order.
pub(crate) fn decode_sequence_item_header<B, S>(
    basic: &B,
    source: &mut S,
) -> Result<SequenceItemHeader>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    let field = ReadFieldSnafu { field: HeaderField::ItemHeader };
    let tag = basic.decode_tag(&mut *source).context(field)?;
    let len = basic.decode_ul(&mut *source).context(field)?;
    SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
}

pub(crate) fn decode_tag<B, S>(basic: &B, source: &mut S) -> Result<Tag>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    basic
        .decode_tag(&mut *source)
        .context(ReadFieldSnafu { field: HeaderField::Tag })
}

/// A 32-bit length field.
pub(crate) fn decode_length<B, S>(basic: &B, source: &mut S) -> Result<Length>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    basic
        .decode_ul(&mut *source)
        .map(Length)
        .context(ReadFieldSnafu { field: HeaderField::Length })
}
