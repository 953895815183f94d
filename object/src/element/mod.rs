//! Data elements holding a primitive value.
//!
//! An [`Element`] keeps its value as raw bytes in little endian order,
//! whatever the transfer syntax it was read from.
//! The capability record of its VR ([`VrInfo`](dcmcodec_core::VrInfo))
//! tells how the bytes are interpreted:
//! as text split by backslashes,
//! as an array of fixed size scalars,
//! or as an opaque byte sequence.

pub mod offset;
pub mod text;

use crate::transfer::{read_value_bytes, ReadContext, ReadProgress, TransferState, ValueRead, WriteContext};
use crate::{
    NoValueSnafu, NotInitializedSnafu, ParseNumberSnafu, Result, ShortValueSnafu, ValueIndexSnafu,
    ValueLengthSnafu, ValueTooLongSnafu, VrMismatchSnafu, WriteHeaderSnafu, WriteValueSnafu,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmcodec_core::vr::Scalar;
use dcmcodec_core::{DataElementHeader, Length, Tag, VrCategory, VR};
use dcmcodec_encoding::decode::basic::swap_value_bytes;
use dcmcodec_encoding::transfer_syntax::{Endianness, TransferSyntax};
use dcmcodec_parser::stream::InputStream;
use snafu::{ensure, OptionExt, ResultExt};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::io::Write;
use tracing::warn;

pub use self::text::check_string_value;

/// A data element with a primitive value.
#[derive(Debug, Clone)]
pub struct Element {
    tag: Tag,
    vr: VR,
    /// length of the value in bytes
    length: u32,
    /// value bytes in little endian, absent until loaded
    value: Option<Vec<u8>>,
    state: TransferState,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.vr == other.vr
            && self.length == other.length
            && self.value == other.value
    }
}

macro_rules! scalar_access {
    (
        $ty:ty, $scalar:expr, $name:literal,
        $get:ident, $array:ident, $put:ident,
        $read_one:path, $read_into:path, $write_into:path
    ) => {
        #[doc = concat!("Retrieve the `", $name, "` value at index `pos`.")]
        pub fn $get(&self, pos: usize) -> Result<$ty> {
            let bytes = self.scalar_bytes($scalar, $name)?;
            let size = std::mem::size_of::<$ty>();
            let vm = bytes.len() / size;
            ensure!(pos < vm, ValueIndexSnafu { tag: self.tag, pos, vm });
            Ok($read_one(&bytes[pos * size..]))
        }

        #[doc = concat!("Retrieve all `", $name, "` values.")]
        pub fn $array(&self) -> Result<Vec<$ty>> {
            let bytes = self.scalar_bytes($scalar, $name)?;
            let size = std::mem::size_of::<$ty>();
            let mut values = vec![<$ty>::default(); bytes.len() / size];
            $read_into(&bytes[..values.len() * size], &mut values);
            Ok(values)
        }

        #[doc = concat!("Replace the value by the given `", $name, "` values.")]
        pub fn $put(&mut self, values: &[$ty]) -> Result<()> {
            self.check_scalar($scalar, $name)?;
            let mut bytes = vec![0u8; values.len() * std::mem::size_of::<$ty>()];
            $write_into(values, &mut bytes);
            self.set_value(bytes);
            Ok(())
        }
    };
}

impl Element {
    /// Create an element with an empty value.
    pub fn new(tag: Tag, vr: VR) -> Self {
        Element::from_bytes(tag, vr, Vec::new())
    }

    /// Create an element whose value of `length` bytes
    /// is still to be read from a stream.
    pub fn placeholder(tag: Tag, vr: VR, length: u32) -> Self {
        Element {
            tag,
            vr,
            length,
            value: None,
            state: TransferState::Init,
        }
    }

    /// Create an element from its value bytes in little endian.
    pub fn from_bytes(tag: Tag, vr: VR, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        Element {
            tag,
            vr,
            length: bytes.len() as u32,
            value: Some(bytes),
            state: TransferState::Ready,
        }
    }

    /// Create a textual element.
    pub fn with_string(tag: Tag, vr: VR, value: &str) -> Result<Self> {
        let mut e = Element::new(tag, vr);
        e.put_string(value)?;
        Ok(e)
    }

    /// Create an element of 16-bit unsigned integers.
    pub fn with_u16s(tag: Tag, vr: VR, values: &[u16]) -> Result<Self> {
        let mut e = Element::new(tag, vr);
        e.put_u16_array(values)?;
        Ok(e)
    }

    /// Create an element of 32-bit unsigned integers.
    pub fn with_u32s(tag: Tag, vr: VR, values: &[u32]) -> Result<Self> {
        let mut e = Element::new(tag, vr);
        e.put_u32_array(values)?;
        Ok(e)
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The length of the value in bytes, without padding.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The value bytes in little endian,
    /// or `None` if the value is not loaded.
    pub fn value_bytes(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Take the value bytes out of this element.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        self.value
    }

    /// Whether the value was read completely.
    pub fn is_loaded(&self) -> bool {
        self.value.is_some() && self.state == TransferState::Ready
    }

    pub fn transfer_state(&self) -> TransferState {
        self.state
    }

    /// The value multiplicity.
    ///
    /// Textual values are counted by backslash separators,
    /// except in `LT`, `ST`, `UT` and `UR`,
    /// which always hold one value (or none when empty).
    /// Binary arrays such as `OB` and `OW` hold one value.
    pub fn vm(&self) -> usize {
        let bytes = match self.value.as_deref() {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return 0,
        };
        let info = self.vr.info();
        match info.category {
            VrCategory::Text => text::count_values(self.vr, bytes),
            VrCategory::Numeric => bytes.len() / info.value_size(),
            VrCategory::Binary => 1,
            VrCategory::Sequence => 0,
        }
    }

    /// Replace the value by the given bytes in little endian.
    pub fn set_value(&mut self, bytes: Vec<u8>) {
        self.length = bytes.len() as u32;
        self.value = Some(bytes);
        self.state = TransferState::Ready;
    }

    /// Replace the value by the first `len` bytes of `bytes`.
    ///
    /// Fails if fewer than `len` bytes are given.
    pub fn put_value_bytes(&mut self, bytes: &[u8], len: u32) -> Result<()> {
        ensure!(
            bytes.len() >= len as usize,
            ShortValueSnafu {
                tag: self.tag,
                expected: len,
                given: bytes.len(),
            }
        );
        self.set_value(bytes[..len as usize].to_vec());
        Ok(())
    }

    fn loaded_bytes(&self) -> Result<&[u8]> {
        self.value.as_deref().context(NoValueSnafu { tag: self.tag })
    }

    fn check_scalar(&self, scalar: Scalar, requested: &'static str) -> Result<()> {
        ensure!(
            self.vr.info().scalar == Some(scalar),
            VrMismatchSnafu {
                tag: self.tag,
                vr: self.vr,
                requested,
            }
        );
        Ok(())
    }

    fn scalar_bytes(&self, scalar: Scalar, requested: &'static str) -> Result<&[u8]> {
        self.check_scalar(scalar, requested)?;
        self.loaded_bytes()
    }

    fn check_text(&self, requested: &'static str) -> Result<()> {
        ensure!(
            self.vr.info().is_text(),
            VrMismatchSnafu {
                tag: self.tag,
                vr: self.vr,
                requested,
            }
        );
        Ok(())
    }

    scalar_access!(
        u16, Scalar::U16, "u16", get_u16, u16_array, put_u16_array,
        LittleEndian::read_u16, LittleEndian::read_u16_into, LittleEndian::write_u16_into
    );
    scalar_access!(
        i16, Scalar::I16, "i16", get_i16, i16_array, put_i16_array,
        LittleEndian::read_i16, LittleEndian::read_i16_into, LittleEndian::write_i16_into
    );
    scalar_access!(
        u32, Scalar::U32, "u32", get_u32, u32_array, put_u32_array,
        LittleEndian::read_u32, LittleEndian::read_u32_into, LittleEndian::write_u32_into
    );
    scalar_access!(
        i32, Scalar::I32, "i32", get_i32_value, i32_array, put_i32_array,
        LittleEndian::read_i32, LittleEndian::read_i32_into, LittleEndian::write_i32_into
    );
    scalar_access!(
        u64, Scalar::U64, "u64", get_u64, u64_array, put_u64_array,
        LittleEndian::read_u64, LittleEndian::read_u64_into, LittleEndian::write_u64_into
    );
    scalar_access!(
        i64, Scalar::I64, "i64", get_i64, i64_array, put_i64_array,
        LittleEndian::read_i64, LittleEndian::read_i64_into, LittleEndian::write_i64_into
    );
    scalar_access!(
        f32, Scalar::F32, "f32", get_f32, f32_array, put_f32_array,
        LittleEndian::read_f32, LittleEndian::read_f32_into, LittleEndian::write_f32_into
    );
    scalar_access!(
        f64, Scalar::F64, "f64", get_f64_value, f64_array, put_f64_array,
        LittleEndian::read_f64, LittleEndian::read_f64_into, LittleEndian::write_f64_into
    );

    /// Retrieve the attribute tag at index `pos` of an `AT` element.
    pub fn get_tag(&self, pos: usize) -> Result<Tag> {
        let tags = self.tag_array()?;
        let vm = tags.len();
        tags.get(pos)
            .copied()
            .context(ValueIndexSnafu { tag: self.tag, pos, vm })
    }

    /// Retrieve all attribute tags of an `AT` element.
    pub fn tag_array(&self) -> Result<Vec<Tag>> {
        let bytes = self.scalar_bytes(Scalar::Tag, "tag")?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| Tag(LittleEndian::read_u16(&c[0..2]), LittleEndian::read_u16(&c[2..4])))
            .collect())
    }

    /// Replace the value of an `AT` element.
    pub fn put_tag_array(&mut self, tags: &[Tag]) -> Result<()> {
        self.check_scalar(Scalar::Tag, "tag")?;
        let mut bytes = Vec::with_capacity(tags.len() * 4);
        for tag in tags {
            bytes.extend_from_slice(&tag.group().to_le_bytes());
            bytes.extend_from_slice(&tag.element().to_le_bytes());
        }
        self.set_value(bytes);
        Ok(())
    }

    /// The whole textual value, without its trailing padding.
    ///
    /// Bytes which do not form valid UTF-8 are replaced.
    pub fn get_str(&self) -> Result<Cow<'_, str>> {
        self.check_text("string")?;
        let bytes = self.loaded_bytes()?;
        let end = bytes
            .iter()
            .rposition(|&c| c != b' ' && c != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        Ok(String::from_utf8_lossy(&bytes[..end]))
    }

    /// The normalized textual value at index `pos`.
    pub fn get_string(&self, pos: usize) -> Result<String> {
        self.check_text("string")?;
        let values = text::split_values(self.vr, self.loaded_bytes()?);
        let vm = values.len();
        let value = values
            .get(pos)
            .context(ValueIndexSnafu { tag: self.tag, pos, vm })?;
        Ok(String::from_utf8_lossy(value).into_owned())
    }

    /// All normalized textual values.
    pub fn get_strings(&self) -> Result<Vec<String>> {
        self.check_text("string")?;
        Ok(text::split_values(self.vr, self.loaded_bytes()?)
            .into_iter()
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .collect())
    }

    /// Replace the value of a textual element.
    ///
    /// The value is kept as given,
    /// padding to even length happens on write.
    pub fn put_string(&mut self, value: &str) -> Result<()> {
        self.check_text("string")?;
        self.set_value(value.as_bytes().to_vec());
        Ok(())
    }

    /// Replace the value of a textual element by several values.
    pub fn put_strings<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        let joined: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
        self.put_string(&joined.join("\\"))
    }

    /// Retrieve a floating point value:
    /// parsed from a decimal string (`DS`),
    /// or read from a `FD` or `OD` element.
    pub fn get_f64(&self, pos: usize) -> Result<f64> {
        if self.vr == VR::DS {
            let value = self.get_string(pos)?;
            value.trim().parse().ok().context(ParseNumberSnafu {
                tag: self.tag,
                value,
            })
        } else {
            self.get_f64_value(pos)
        }
    }

    /// Retrieve a signed integer:
    /// parsed from an integer string (`IS`),
    /// or read from a `SL` element.
    pub fn get_i32(&self, pos: usize) -> Result<i32> {
        if self.vr == VR::IS {
            let value = self.get_string(pos)?;
            let trimmed = value.trim();
            let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
            trimmed.parse().ok().context(ParseNumberSnafu {
                tag: self.tag,
                value,
            })
        } else {
            self.get_i32_value(pos)
        }
    }

    /// Check the value against the constraints of its VR.
    ///
    /// The length of a scalar array must be a multiple of the scalar size.
    /// Each textual value must fit the maximum length of the VR.
    /// With `autocorrect`,
    /// an array is truncated to its last complete scalar
    /// and long textual values are cut to the maximum length,
    /// in which case no error is reported.
    pub fn verify(&mut self, autocorrect: bool) -> Result<()> {
        let info = self.vr.info();
        let (tag, vr) = (self.tag, self.vr);
        let bytes = self.value.as_mut().context(NoValueSnafu { tag })?;

        if info.has_fixed_value_size() {
            let size = info.value_size();
            let excess = bytes.len() % size;
            if excess != 0 {
                ensure!(
                    autocorrect,
                    ValueLengthSnafu {
                        tag,
                        vr,
                        len: bytes.len() as u32,
                        size,
                    }
                );
                warn!("Truncating {} {} to {} bytes", vr, tag, bytes.len() - excess);
                bytes.truncate(bytes.len() - excess);
            }
        } else if let (true, Some(max)) = (info.is_text(), info.max_length) {
            let max = max as usize;
            let parts: Vec<&[u8]> = if info.multi_valued {
                bytes.split(|&c| c == b'\\').collect()
            } else {
                vec![&bytes[..]]
            };
            if let Some((pos, part)) = parts.iter().enumerate().find(|(_, p)| p.len() > max) {
                ensure!(
                    autocorrect,
                    ValueTooLongSnafu {
                        tag,
                        vr,
                        pos,
                        len: part.len(),
                        max: max as u32,
                    }
                );
                let corrected: Vec<u8> = parts
                    .iter()
                    .map(|p| &p[..p.len().min(max)])
                    .collect::<Vec<_>>()
                    .join(&b'\\');
                warn!("Truncating values of {} {} to {} characters", vr, tag, max);
                *bytes = corrected;
            }
        }
        self.length = bytes.len() as u32;
        Ok(())
    }

    /// Compare two elements.
    ///
    /// Elements are ordered by tag first.
    /// An element with a different VR is always less.
    /// Then the element with fewer values is less.
    /// Otherwise values are compared one by one:
    /// numerically for numbers,
    /// by character for text
    /// and by byte for binary data.
    pub fn compare(&self, rhs: &Element) -> Ordering {
        match self.tag.cmp(&rhs.tag) {
            Ordering::Equal => {}
            o => return o,
        }
        if self.vr != rhs.vr {
            return Ordering::Less;
        }
        match self.vm().cmp(&rhs.vm()) {
            Ordering::Equal => {}
            o => return o,
        }
        let lhs_bytes = self.value.as_deref().unwrap_or_default();
        let rhs_bytes = rhs.value.as_deref().unwrap_or_default();
        let info = self.vr.info();
        match info.category {
            VrCategory::Text => compare_text(self.vr, lhs_bytes, rhs_bytes),
            VrCategory::Numeric => match info.scalar {
                Some(scalar) => compare_scalars(scalar, lhs_bytes, rhs_bytes),
                None => lhs_bytes.cmp(rhs_bytes),
            },
            VrCategory::Binary | VrCategory::Sequence => lhs_bytes.cmp(rhs_bytes),
        }
    }

    /// The number of bytes of the encoded element,
    /// header and padding included.
    pub fn calc_element_length(&self, ts: &TransferSyntax) -> u32 {
        ts.header_size(self.vr) + padded(self.length)
    }

    /// Read the value from the stream, resuming a previous partial read.
    pub(crate) fn read(&mut self, stream: &mut InputStream, ctx: &ReadContext) -> Result<ReadProgress> {
        match self.state {
            TransferState::NotInitialized => return NotInitializedSnafu.fail(),
            TransferState::Ready => return Ok(ReadProgress::Complete),
            TransferState::Init => {
                self.value = Some(Vec::new());
                self.state = TransferState::InWork;
            }
            TransferState::InWork => {}
        }
        let length = self.length as usize;
        let buf = self.value.get_or_insert_with(Vec::new);
        match read_value_bytes(stream, buf, length, ctx.chunk_size())? {
            ValueRead::Suspended => return Ok(ReadProgress::Suspended),
            ValueRead::Truncated => {
                warn!(
                    "Stream ends within {}, {} of {} value bytes read",
                    self.tag,
                    buf.len(),
                    length
                );
                self.length = buf.len() as u32;
            }
            ValueRead::Complete => {}
        }
        if ctx.endianness() == Endianness::Big {
            swap_value_bytes(buf, self.vr.info().swap_size());
        }
        self.state = TransferState::Ready;
        Ok(ReadProgress::Complete)
    }

    pub(crate) fn transfer_init(&mut self) {
        if self.state != TransferState::Ready {
            self.state = TransferState::Init;
        }
    }

    pub(crate) fn write_to(&self, to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
        let value = self.loaded_bytes()?;
        let header = DataElementHeader::new(self.tag, self.vr, Length(padded(self.length)));
        ctx.encoder
            .encode_element_header(to, header)
            .context(WriteHeaderSnafu)?;
        write_value(to, self.tag, self.vr, value, ctx.ts.endianness())
    }
}

/// Round a length up to the next even number.
pub(crate) fn padded(len: u32) -> u32 {
    len + (len & 1)
}

/// Write value bytes in the given byte order,
/// followed by the padding byte of the VR if the length is odd.
pub(crate) fn write_value(
    to: &mut dyn Write,
    tag: Tag,
    vr: VR,
    value: &[u8],
    endianness: Endianness,
) -> Result<()> {
    let swap_size = vr.info().swap_size();
    if endianness == Endianness::Big && swap_size > 1 {
        let mut swapped = value.to_vec();
        swap_value_bytes(&mut swapped, swap_size);
        to.write_all(&swapped).context(WriteValueSnafu { tag })?;
    } else {
        to.write_all(value).context(WriteValueSnafu { tag })?;
    }
    if value.len() % 2 == 1 {
        to.write_all(&[vr.padding()]).context(WriteValueSnafu { tag })?;
    }
    Ok(())
}

fn compare_text(vr: VR, lhs: &[u8], rhs: &[u8]) -> Ordering {
    let lhs = text::split_values(vr, lhs);
    let rhs = text::split_values(vr, rhs);
    for (a, b) in lhs.iter().zip(&rhs) {
        let o = match vr {
            VR::DS | VR::IS => compare_numeric_strings(a, b),
            _ => a.cmp(b),
        };
        if o != Ordering::Equal {
            return o;
        }
    }
    Ordering::Equal
}

fn compare_numeric_strings(a: &[u8], b: &[u8]) -> Ordering {
    let parse = |v: &[u8]| std::str::from_utf8(v).ok().and_then(|s| s.trim().parse::<f64>().ok());
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

fn compare_scalars(scalar: Scalar, lhs: &[u8], rhs: &[u8]) -> Ordering {
    let size = scalar.size();
    for (a, b) in lhs.chunks_exact(size).zip(rhs.chunks_exact(size)) {
        let o = match scalar {
            Scalar::U8 => a[0].cmp(&b[0]),
            Scalar::U16 => LittleEndian::read_u16(a).cmp(&LittleEndian::read_u16(b)),
            Scalar::I16 => LittleEndian::read_i16(a).cmp(&LittleEndian::read_i16(b)),
            Scalar::U32 => LittleEndian::read_u32(a).cmp(&LittleEndian::read_u32(b)),
            Scalar::I32 => LittleEndian::read_i32(a).cmp(&LittleEndian::read_i32(b)),
            Scalar::U64 => LittleEndian::read_u64(a).cmp(&LittleEndian::read_u64(b)),
            Scalar::I64 => LittleEndian::read_i64(a).cmp(&LittleEndian::read_i64(b)),
            Scalar::F32 => LittleEndian::read_f32(a)
                .partial_cmp(&LittleEndian::read_f32(b))
                .unwrap_or(Ordering::Equal),
            Scalar::F64 => LittleEndian::read_f64(a)
                .partial_cmp(&LittleEndian::read_f64(b))
                .unwrap_or(Ordering::Equal),
            Scalar::Tag => {
                let ta = (LittleEndian::read_u16(&a[0..2]), LittleEndian::read_u16(&a[2..4]));
                let tb = (LittleEndian::read_u16(&b[0..2]), LittleEndian::read_u16(&b[2..4]));
                ta.cmp(&tb)
            }
        };
        if o != Ordering::Equal {
            return o;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;
    use dcmcodec_dictionary_std::tags;

    #[test]
    fn typed_values_round_trip_through_bytes() {
        let mut e = Element::new(tags::ROWS, VR::US);
        e.put_u16_array(&[512, 256]).unwrap();
        assert_eq!(e.value_bytes(), Some(&[0x00, 0x02, 0x00, 0x01][..]));
        assert_eq!(e.length(), 4);
        assert_eq!(e.vm(), 2);
        assert_eq!(e.get_u16(1).unwrap(), 256);
        assert_eq!(e.u16_array().unwrap(), vec![512, 256]);

        let e = Element::from_bytes(tags::PIXEL_SPACING, VR::FD, 0.5_f64.to_le_bytes().to_vec());
        assert_eq!(e.get_f64(0).unwrap(), 0.5);
    }

    #[test]
    fn vr_mismatch_and_bad_index() {
        let e = Element::with_u16s(tags::ROWS, VR::US, &[1]).unwrap();
        let err = e.get_u32(0).unwrap_err();
        assert_eq!(err.condition(), Condition::IllegalCall);
        let err = e.get_u16(1).unwrap_err();
        assert_eq!(err.condition(), Condition::IllegalParameter);
        assert!(Element::new(tags::ROWS, VR::US).put_string("1").is_err());
    }

    #[test]
    fn short_value_bytes_are_rejected() {
        let mut e = Element::new(tags::PATIENT_ID, VR::LO);
        let err = e.put_value_bytes(b"ABC", 4).unwrap_err();
        assert_eq!(err.condition(), Condition::CorruptedData);
        e.put_value_bytes(b"ABCDEF", 4).unwrap();
        assert_eq!(e.value_bytes(), Some(&b"ABCD"[..]));
    }

    #[test]
    fn strings_and_value_multiplicity() {
        let e = Element::with_string(tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY ").unwrap();
        assert_eq!(e.vm(), 2);
        assert_eq!(e.get_string(1).unwrap(), "PRIMARY");
        assert_eq!(e.get_strings().unwrap(), vec!["ORIGINAL", "PRIMARY"]);
        assert!(e.get_string(2).is_err());

        let e = Element::with_string(tags::RETRIEVE_URL, VR::UR, "http://host/a\\b").unwrap();
        assert_eq!(e.vm(), 1);
        assert_eq!(Element::new(tags::RETRIEVE_URL, VR::UR).vm(), 0);

        let e = Element::with_string(tags::SLICE_THICKNESS, VR::DS, " 2.5\\-1e3").unwrap();
        assert_eq!(e.get_f64(0).unwrap(), 2.5);
        assert_eq!(e.get_f64(1).unwrap(), -1000.0);
        let e = Element::with_string(tags::INSTANCE_NUMBER, VR::IS, "+12").unwrap();
        assert_eq!(e.get_i32(0).unwrap(), 12);
        let e = Element::with_string(tags::INSTANCE_NUMBER, VR::IS, "twelve").unwrap();
        assert_eq!(e.get_i32(0).unwrap_err().condition(), Condition::CorruptedData);
    }

    #[test]
    fn attribute_tags() {
        let mut e = Element::new(tags::FRAME_INCREMENT_POINTER, VR::AT);
        e.put_tag_array(&[tags::NUMBER_OF_FRAMES]).unwrap();
        assert_eq!(e.value_bytes(), Some(&[0x28, 0x00, 0x08, 0x00][..]));
        assert_eq!(e.get_tag(0).unwrap(), tags::NUMBER_OF_FRAMES);
    }

    #[test]
    fn verify_truncates_to_whole_scalars() {
        for len in 0..12u8 {
            let bytes: Vec<u8> = (0..len).collect();
            let mut e = Element::from_bytes(tags::ROWS, VR::UL, bytes);
            match e.verify(false) {
                Ok(()) => assert_eq!(e.length() % 4, 0),
                Err(err) => {
                    assert_eq!(err.condition(), Condition::CorruptedData);
                    e.verify(true).unwrap();
                    assert_eq!(e.length(), u32::from(len) / 4 * 4);
                }
            }
        }
    }

    #[test]
    fn verify_truncates_long_strings() {
        let mut e = Element::with_string(tags::MODALITY, VR::CS, "CT\\ABCDEFGHIJKLMNOPQRS").unwrap();
        assert_eq!(e.verify(false).unwrap_err().condition(), Condition::CorruptedData);
        e.verify(true).unwrap();
        assert_eq!(e.get_str().unwrap(), "CT\\ABCDEFGHIJKLMNOP");
        assert_eq!(e.length(), 19);
    }

    #[test]
    fn compare_orders_by_tag_vr_vm_then_values() {
        let a = Element::with_u16s(tags::ROWS, VR::US, &[1, 2]).unwrap();
        let b = Element::with_u16s(tags::COLUMNS, VR::US, &[1]).unwrap();
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);

        let c = Element::with_u16s(tags::ROWS, VR::US, &[1]).unwrap();
        assert_eq!(a.compare(&c), Ordering::Greater);
        assert_eq!(c.compare(&a), Ordering::Less);

        let d = Element::with_u16s(tags::ROWS, VR::US, &[1, 3]).unwrap();
        assert_eq!(a.compare(&d), Ordering::Less);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);

        // mismatching VRs are always less, both ways
        let e = Element::with_u32s(tags::ROWS, VR::UL, &[1, 2]).unwrap();
        assert_eq!(a.compare(&e), Ordering::Less);
        assert_eq!(e.compare(&a), Ordering::Less);

        // numeric comparison of signed values
        let neg = Element::from_bytes(tags::ROWS, VR::SS, (-1i16).to_le_bytes().to_vec());
        let pos = Element::from_bytes(tags::ROWS, VR::SS, 1i16.to_le_bytes().to_vec());
        assert_eq!(neg.compare(&pos), Ordering::Less);

        // padding does not matter
        let p1 = Element::with_string(tags::PATIENT_NAME, VR::PN, "Doe^J").unwrap();
        let p2 = Element::with_string(tags::PATIENT_NAME, VR::PN, "Doe^J ").unwrap();
        assert_eq!(p1.compare(&p2), Ordering::Equal);
    }

    #[test]
    fn element_length_with_header_and_padding() {
        use dcmcodec_transfer_syntax_registry::entries::{
            EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
        };
        let e = Element::with_string(tags::PATIENT_NAME, VR::PN, "Doe^J").unwrap();
        assert_eq!(e.calc_element_length(&EXPLICIT_VR_LITTLE_ENDIAN), 8 + 6);
        let e = Element::from_bytes(tags::PIXEL_DATA, VR::OB, vec![0; 4]);
        assert_eq!(e.calc_element_length(&EXPLICIT_VR_LITTLE_ENDIAN), 12 + 4);
        assert_eq!(e.calc_element_length(&IMPLICIT_VR_LITTLE_ENDIAN), 8 + 4);
    }
}
