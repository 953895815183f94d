//! Encoding of data element headers, item headers and delimiters.
use byteordered::Endianness;
use dcmcodec_core::{DataElementHeader, Tag, VR};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

pub use crate::decode::HeaderField;

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

/// An error while encoding a header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not write the {} of a header", field))]
    WriteField {
        field: HeaderField,
        backtrace: Backtrace,
        source: io::Error,
    },
    /// The value of an element with a 16-bit length field is too long.
    #[snafu(display(
        "Length {} of element {} does not fit the 16-bit length field of {}",
        len,
        tag,
        vr
    ))]
    LengthOverflow {
        tag: Tag,
        vr: VR,
        len: u32,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Writing of the binary numbers which make up a header,
/// in a fixed byte order.
pub trait BasicEncode {
    /// The byte order written by this encoder.
    fn endianness(&self) -> Endianness;

    /// Write an unsigned 16-bit integer.
    fn encode_us<W>(&self, to: W, value: u16) -> io::Result<()>
    where
        W: Write;

    /// Write an unsigned 32-bit integer.
    fn encode_ul<W>(&self, to: W, value: u32) -> io::Result<()>
    where
        W: Write;

    /// Write a tag, group number first.
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> io::Result<()>
    where
        W: Write,
    {
        self.encode_us(&mut to, tag.0)?;
        self.encode_us(to, tag.1)
    }
}

/// Encoding of the headers of one transfer syntax.
///
/// Items and delimiters are written the same way by every syntax
/// up to the byte order,
/// so only [`encode_item_tag`](Encode::encode_item_tag) is required for them.
pub trait Encode {
    /// Write an element header,
    /// returning the number of bytes written.
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write;

    /// Write a tag of group `FFFE` followed by its 32-bit length.
    fn encode_item_tag<W>(&self, to: W, tag: Tag, len: u32) -> Result<()>
    where
        W: Write;

    /// Write the header of an item of length `len`,
    /// which may be the undefined length.
    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        self.encode_item_tag(to, Tag::ITEM, len)
    }

    /// Write the delimiter closing an item of undefined length.
    fn encode_item_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        self.encode_item_tag(to, Tag::ITEM_DELIMITER, 0)
    }

    /// Write the delimiter closing a sequence of undefined length.
    fn encode_sequence_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        self.encode_item_tag(to, Tag::SEQUENCE_DELIMITER, 0)
    }
}

/// The object safe form of [`Encode`] for a given writer type,
/// implemented for every encoder.
pub trait EncodeTo<W: ?Sized> {
    /// See [`Encode::encode_element_header`].
    fn encode_element_header(&self, to: &mut W, de: DataElementHeader) -> Result<usize>;

    /// See [`Encode::encode_item_header`].
    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()>;

    /// See [`Encode::encode_item_delimiter`].
    fn encode_item_delimiter(&self, to: &mut W) -> Result<()>;

    /// See [`Encode::encode_sequence_delimiter`].
    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()>;
}

impl<T: ?Sized, W: ?Sized> EncodeTo<W> for T
where
    T: Encode,
    W: Write,
{
    fn encode_element_header(&self, to: &mut W, de: DataElementHeader) -> Result<usize> {
        Encode::encode_element_header(self, to, de)
    }

    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()> {
        Encode::encode_item_header(self, to, len)
    }

    fn encode_item_delimiter(&self, to: &mut W) -> Result<()> {
        Encode::encode_item_delimiter(self, to)
    }

    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()> {
        Encode::encode_sequence_delimiter(self, to)
    }
}

/// Encode an explicit VR element header in the byte order of `basic`.
pub(crate) fn encode_explicit_header<B, W>(
    basic: &B,
    mut to: W,
    de: DataElementHeader,
) -> Result<usize>
where
    B: BasicEncode,
    W: Write,
{
    if de.tag.is_delimitation() {
        encode_tag_and_length(basic, to, de.tag, de.len.0)?;
        return Ok(8);
    }
    basic
        .encode_tag(&mut to, de.tag)
        .context(WriteFieldSnafu { field: HeaderField::Tag })?;
    to.write_all(&de.vr.to_bytes())
        .context(WriteFieldSnafu { field: HeaderField::Vr })?;

    if de.vr.has_long_length() {
        to.write_all(&[0, 0])
            .context(WriteFieldSnafu { field: HeaderField::Reserved })?;
        basic
            .encode_ul(&mut to, de.len.0)
            .context(WriteFieldSnafu { field: HeaderField::Length })?;
        return Ok(12);
    }

    ensure!(
        de.len.0 <= u32::from(u16::MAX),
        LengthOverflowSnafu {
            tag: de.tag,
            vr: de.vr,
            len: de.len.0,
        }
    );
    basic
        .encode_us(&mut to, de.len.0 as u16)
        .context(WriteFieldSnafu { field: HeaderField::Length })?;
    Ok(8)
}

/// A tag and a 32-bit length in the byte order of `basic`,
/// the layout of implicit VR headers and of items.
pub(crate) fn encode_tag_and_length<B, W>(basic: &B, mut to: W, tag: Tag, len: u32) -> Result<()>
where
    B: BasicEncode,
    W: Write,
{
    let field = if tag.is_delimitation() {
        HeaderField::ItemHeader
    } else {
        HeaderField::Tag
    };
    basic
        .encode_tag(&mut to, tag)
        .context(WriteFieldSnafu { field })?;
    basic
        .encode_ul(to, len)
        .context(WriteFieldSnafu { field: HeaderField::Length })
}

#[cfg(test)]
mod tests {
    use super::explicit_be::ExplicitVRBigEndianEncoder;
    use super::*;

    #[test]
    fn encoders_are_object_safe_per_writer() {
        let encoder: Box<dyn for<'w> EncodeTo<dyn Write + 'w>> =
            Box::new(ExplicitVRBigEndianEncoder::default());
        let mut out: Vec<u8> = Vec::new();
        encoder.encode_item_delimiter(&mut out).unwrap();
        encoder.encode_sequence_delimiter(&mut out).unwrap();
        assert_eq!(
            out,
            vec![0xFF, 0xFE, 0xE0, 0x0D, 0, 0, 0, 0, 0xFF, 0xFE, 0xE0, 0xDD, 0, 0, 0, 0]
        );
    }

    fn write_delimiters(encoder: &dyn for<'w> EncodeTo<dyn Write + 'w>, to: &mut dyn Write) {
        encoder.encode_item_header(to, 4).unwrap();
        encoder.encode_item_delimiter(to).unwrap();
    }

    #[test]
    fn encoders_write_to_borrowed_writers() {
        let encoder: Box<dyn for<'w> EncodeTo<dyn Write + 'w>> =
            Box::new(ExplicitVRBigEndianEncoder::default());
        let mut buffer: Vec<u8> = Vec::new();
        {
            let mut wrapped = io::BufWriter::new(&mut buffer);
            write_delimiters(&*encoder, &mut wrapped);
            wrapped.flush().unwrap();
        }
        assert_eq!(
            buffer,
            vec![0xFF, 0xFE, 0xE0, 0x00, 0, 0, 0, 4, 0xFF, 0xFE, 0xE0, 0x0D, 0, 0, 0, 0]
        );
    }

    #[test]
    fn write_errors_name_the_field() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::WriteZero, "full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = Encode::encode_item_header(&ExplicitVRBigEndianEncoder::default(), Full, 0)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::WriteField { field: HeaderField::ItemHeader, .. }
        ));
    }
}
