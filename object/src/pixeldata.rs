//! The pixel data element, in its current representation.
//!
//! Pixel data is either native,
//! a plain element value in the byte order of the transfer syntax,
//! or encapsulated:
//! a sequence of fragments compressed for one particular transfer syntax.
//! Decoding and encoding the fragments is up to pixel data codecs,
//! this module only stores them.

use crate::element::{padded, Element};
use crate::transfer::{read_value_bytes, Cursor, ReadContext, ReadProgress, TransferState, ValueRead, WriteContext};
use crate::{
    PixelRepresentationSnafu, ReadHeaderSnafu, Result, UndefinedFragmentLengthSnafu, WriteHeaderSnafu,
    WriteValueSnafu,
};
use dcmcodec_core::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
use dcmcodec_encoding::transfer_syntax::TransferSyntax;
use dcmcodec_parser::header::HeaderRead;
use dcmcodec_parser::stream::InputStream;
use snafu::{ensure, ResultExt};
use std::cmp::Ordering;
use std::io::Write;
use tracing::warn;

/// One item of a pixel sequence:
/// the basic offset table or a fragment of compressed data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelItem {
    data: Vec<u8>,
}

impl PixelItem {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        PixelItem { data: data.into() }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The items of encapsulated pixel data.
///
/// The first item is the basic offset table, which may be empty.
/// Each item after it is a fragment.
#[derive(Debug, Clone, Default)]
pub struct PixelSequence {
    items: Vec<PixelItem>,
    cursor: Cursor,
    /// fragment being read and its announced length
    pending: Option<(Vec<u8>, usize)>,
}

impl PartialEq for PixelSequence {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl PixelSequence {
    /// Create a pixel sequence from an offset table and fragments.
    pub fn new(offset_table: Vec<u8>, fragments: Vec<Vec<u8>>) -> Self {
        let items = std::iter::once(offset_table)
            .chain(fragments)
            .map(PixelItem::new)
            .collect();
        PixelSequence {
            items,
            cursor: Cursor::complete(),
            pending: None,
        }
    }

    pub fn items(&self) -> &[PixelItem] {
        &self.items
    }

    /// The basic offset table, if the sequence has any item.
    pub fn offset_table(&self) -> Option<&PixelItem> {
        self.items.first()
    }

    /// The fragments, after the offset table.
    pub fn fragments(&self) -> &[PixelItem] {
        self.items.get(1..).unwrap_or_default()
    }

    pub fn push(&mut self, item: PixelItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of bytes of the encoded items and the delimiter.
    fn length(&self) -> u32 {
        self.items
            .iter()
            .map(|item| 8 + padded(item.len() as u32))
            .sum::<u32>()
            + 8
    }

    fn compare(&self, rhs: &PixelSequence) -> Ordering {
        self.len().cmp(&rhs.len()).then_with(|| {
            self.items
                .iter()
                .zip(&rhs.items)
                .map(|(a, b)| a.data.cmp(&b.data))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }

    fn read(&mut self, stream: &mut InputStream, ctx: &ReadContext) -> Result<ReadProgress> {
        if self.cursor.enter(stream)? {
            return Ok(ReadProgress::Complete);
        }
        loop {
            if let Some((mut data, len)) = self.pending.take() {
                match read_value_bytes(stream, &mut data, len, ctx.chunk_size())? {
                    ValueRead::Suspended => {
                        self.pending = Some((data, len));
                        return Ok(ReadProgress::Suspended);
                    }
                    ValueRead::Truncated => {
                        warn!("Stream ends within a pixel data fragment");
                        self.items.push(PixelItem::new(data));
                        break;
                    }
                    ValueRead::Complete => self.items.push(PixelItem::new(data)),
                }
            }

            match ctx.reader.read_item_header(stream).context(ReadHeaderSnafu)? {
                HeaderRead::Header(SequenceItemHeader::Item { len }, _) => match len.get() {
                    Some(len) => self.pending = Some((Vec::new(), len as usize)),
                    None => return UndefinedFragmentLengthSnafu { tag: Tag::PIXEL_DATA }.fail(),
                },
                HeaderRead::Header(SequenceItemHeader::SequenceDelimiter, _) => break,
                HeaderRead::Header(SequenceItemHeader::ItemDelimiter, _) => {
                    warn!("Item delimiter in encapsulated pixel data, ignored");
                }
                HeaderRead::Suspended => return Ok(ReadProgress::Suspended),
                HeaderRead::EndOfStream => {
                    warn!("Stream ends before the delimiter of encapsulated pixel data");
                    break;
                }
            }
        }
        self.cursor.ready();
        Ok(ReadProgress::Complete)
    }

    fn write_to(&self, to: &mut dyn Write, ctx: &WriteContext, vr: VR) -> Result<()> {
        ctx.encoder
            .encode_element_header(to, DataElementHeader::new(Tag::PIXEL_DATA, vr, Length::UNDEFINED))
            .context(WriteHeaderSnafu)?;
        for item in &self.items {
            ctx.encoder
                .encode_item_header(to, padded(item.len() as u32))
                .context(WriteHeaderSnafu)?;
            to.write_all(&item.data)
                .context(WriteValueSnafu { tag: Tag::PIXEL_DATA })?;
            if item.len() % 2 == 1 {
                to.write_all(&[0])
                    .context(WriteValueSnafu { tag: Tag::PIXEL_DATA })?;
            }
        }
        ctx.encoder
            .encode_sequence_delimiter(to)
            .context(WriteHeaderSnafu)
    }
}

/// The representation of pixel data.
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    /// Uncompressed pixel samples.
    Native(Element),
    /// Fragments compressed as per the given transfer syntax.
    Encapsulated {
        transfer_syntax: String,
        sequence: PixelSequence,
    },
}

/// The Pixel Data element `(7FE0,0010)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelData {
    vr: VR,
    representation: Representation,
}

impl PixelData {
    /// Create native pixel data from its samples in little endian.
    pub fn native(vr: VR, samples: Vec<u8>) -> Self {
        PixelData {
            vr,
            representation: Representation::Native(Element::from_bytes(Tag::PIXEL_DATA, vr, samples)),
        }
    }

    /// Create pixel data encapsulated for the given transfer syntax.
    pub fn encapsulated(transfer_syntax: &str, sequence: PixelSequence) -> Self {
        PixelData {
            vr: VR::OB,
            representation: Representation::Encapsulated {
                transfer_syntax: transfer_syntax.to_string(),
                sequence,
            },
        }
    }

    /// Create pixel data to be read.
    /// Pixel data of undefined length is encapsulated.
    pub(crate) fn placeholder(vr: VR, len: Length, transfer_syntax: &str) -> Self {
        let representation = match len.get() {
            Some(len) => Representation::Native(Element::placeholder(Tag::PIXEL_DATA, vr, len)),
            None => Representation::Encapsulated {
                transfer_syntax: transfer_syntax.to_string(),
                sequence: PixelSequence::default(),
            },
        };
        PixelData { vr, representation }
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    pub fn representation_mut(&mut self) -> &mut Representation {
        &mut self.representation
    }

    /// Replace the whole representation, returning the previous one.
    pub fn set_representation(&mut self, representation: Representation) -> Representation {
        self.vr = match &representation {
            Representation::Native(e) => e.vr(),
            Representation::Encapsulated { .. } => VR::OB,
        };
        std::mem::replace(&mut self.representation, representation)
    }

    pub fn is_encapsulated(&self) -> bool {
        matches!(self.representation, Representation::Encapsulated { .. })
    }

    /// The native pixel data element, if not encapsulated.
    pub fn native_element(&self) -> Option<&Element> {
        match &self.representation {
            Representation::Native(e) => Some(e),
            Representation::Encapsulated { .. } => None,
        }
    }

    /// The pixel sequence, if encapsulated.
    pub fn pixel_sequence(&self) -> Option<&PixelSequence> {
        match &self.representation {
            Representation::Native(_) => None,
            Representation::Encapsulated { sequence, .. } => Some(sequence),
        }
    }

    /// Whether the current representation can be written
    /// with the given transfer syntax.
    ///
    /// Native pixel data needs a transfer syntax of native pixel data.
    /// Encapsulated pixel data needs the transfer syntax it was compressed for.
    pub fn can_write(&self, ts: &TransferSyntax) -> bool {
        match &self.representation {
            Representation::Native(_) => !ts.is_encapsulated_pixel_data(),
            Representation::Encapsulated { transfer_syntax, .. } => {
                ts.is_encapsulated_pixel_data() && transfer_syntax.as_str() == ts.uid()
            }
        }
    }

    pub(crate) fn check_writable(&self, ts: &TransferSyntax) -> Result<()> {
        let from = match &self.representation {
            Representation::Native(_) => "native representation",
            Representation::Encapsulated { transfer_syntax, .. } => transfer_syntax.as_str(),
        };
        ensure!(
            self.can_write(ts),
            PixelRepresentationSnafu {
                from,
                to: ts.uid(),
            }
        );
        Ok(())
    }

    pub fn calc_element_length(&self, ts: &TransferSyntax) -> u32 {
        match &self.representation {
            Representation::Native(e) => e.calc_element_length(ts),
            Representation::Encapsulated { sequence, .. } => ts.header_size(self.vr) + sequence.length(),
        }
    }

    pub fn verify(&mut self, autocorrect: bool) -> Result<()> {
        match &mut self.representation {
            Representation::Native(e) => e.verify(autocorrect),
            Representation::Encapsulated { .. } => Ok(()),
        }
    }

    /// Compare two pixel data elements of the same representation:
    /// native values like elements,
    /// encapsulated ones by transfer syntax, number of items and then bytes.
    /// Different representations are always less.
    pub fn compare(&self, rhs: &PixelData) -> Ordering {
        match (&self.representation, &rhs.representation) {
            (Representation::Native(a), Representation::Native(b)) => a.compare(b),
            (
                Representation::Encapsulated {
                    transfer_syntax: ts_a,
                    sequence: a,
                },
                Representation::Encapsulated {
                    transfer_syntax: ts_b,
                    sequence: b,
                },
            ) => ts_a.cmp(ts_b).then_with(|| a.compare(b)),
            _ => Ordering::Less,
        }
    }

    pub fn transfer_state(&self) -> TransferState {
        match &self.representation {
            Representation::Native(e) => e.transfer_state(),
            Representation::Encapsulated { sequence, .. } => sequence.cursor.state,
        }
    }

    pub(crate) fn transfer_init(&mut self) {
        match &mut self.representation {
            Representation::Native(e) => e.transfer_init(),
            Representation::Encapsulated { sequence, .. } => {
                sequence.cursor.init();
                sequence.pending = None;
            }
        }
    }

    pub(crate) fn transfer_end(&mut self) {
        if let Representation::Encapsulated { sequence, .. } = &mut self.representation {
            sequence.cursor.end();
        }
    }

    pub(crate) fn read(&mut self, stream: &mut InputStream, ctx: &ReadContext) -> Result<ReadProgress> {
        match &mut self.representation {
            Representation::Native(e) => e.read(stream, ctx),
            Representation::Encapsulated { sequence, .. } => sequence.read(stream, ctx),
        }
    }

    pub(crate) fn write_to(&self, to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
        match &self.representation {
            Representation::Native(e) => e.write_to(to, ctx),
            Representation::Encapsulated { sequence, .. } => sequence.write_to(to, ctx, self.vr),
        }
    }
}
