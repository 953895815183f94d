//! Sequences of items.

use crate::item::{Item, Level};
use crate::options::{EncodingType, WriteOptions};
use crate::transfer::{Cursor, ReadContext, ReadProgress, TransferState, WriteContext};
use crate::{ReadHeaderSnafu, Result, WriteHeaderSnafu};
use dcmcodec_core::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
use dcmcodec_encoding::decode;
use dcmcodec_encoding::transfer_syntax::TransferSyntax;
use dcmcodec_parser::header::{self, HeaderRead};
use dcmcodec_parser::stream::InputStream;
use snafu::ResultExt;
use std::cmp::Ordering;
use std::io::Write;
use tracing::warn;

/// A sequence of items under one tag.
///
/// When read, a sequence is either of defined length
/// or ends with a sequence delimiter.
/// How it is written depends on the [`EncodingType`] of the write,
/// not on how it was read.
#[derive(Debug, Clone)]
pub struct Sequence {
    tag: Tag,
    items: Vec<Item>,
    /// length announced by the element header
    declared: Length,
    cursor: Cursor,
    /// the item being read
    pending: Option<Item>,
    /// items are in implicit VR little endian,
    /// whatever the transfer syntax
    implicit_items: bool,
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.items == other.items
    }
}

impl Sequence {
    /// Create an empty sequence.
    pub fn new(tag: Tag) -> Self {
        Sequence::with_items(tag, Vec::new())
    }

    pub fn with_items(tag: Tag, items: Vec<Item>) -> Self {
        Sequence {
            tag,
            items,
            declared: Length::UNDEFINED,
            cursor: Cursor::complete(),
            pending: None,
            implicit_items: false,
        }
    }

    /// Create a sequence to be read,
    /// of the length announced by its header.
    pub(crate) fn placeholder(tag: Tag, declared: Length, implicit_items: bool) -> Self {
        Sequence {
            tag,
            items: Vec::new(),
            declared,
            cursor: Cursor::default(),
            pending: None,
            implicit_items,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// The number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of bytes of the encoded items.
    pub fn length(&self, ts: &TransferSyntax, encoding: EncodingType) -> u32 {
        self.items
            .iter()
            .map(|item| item.calc_element_length(ts, encoding))
            .sum()
    }

    /// The number of bytes of the encoded sequence,
    /// header and delimiter included.
    pub fn calc_element_length(&self, ts: &TransferSyntax, encoding: EncodingType) -> u32 {
        let delimiter = match encoding {
            EncodingType::ExplicitLength => 0,
            EncodingType::UndefinedLength => 8,
        };
        ts.header_size(VR::SQ) + self.length(ts, encoding) + delimiter
    }

    pub fn verify(&mut self, autocorrect: bool) -> Result<()> {
        let mut outcome = Ok(());
        for item in &mut self.items {
            if let Err(e) = item.verify(autocorrect) {
                if outcome.is_ok() {
                    outcome = Err(e);
                }
            }
        }
        outcome
    }

    /// Compare two sequences:
    /// by tag, then by number of items, then item by item.
    pub fn compare(&self, rhs: &Sequence) -> Ordering {
        self.tag
            .cmp(&rhs.tag)
            .then(self.len().cmp(&rhs.len()))
            .then_with(|| {
                self.items
                    .iter()
                    .zip(&rhs.items)
                    .map(|(a, b)| a.compare(b))
                    .find(|o| *o != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }

    pub fn transfer_state(&self) -> TransferState {
        self.cursor.state
    }

    pub(crate) fn transfer_init(&mut self) {
        self.cursor.init();
        self.pending = None;
        for item in &mut self.items {
            item.transfer_init();
        }
    }

    pub(crate) fn transfer_end(&mut self) {
        self.cursor.end();
        self.pending = None;
        for item in &mut self.items {
            item.transfer_end();
        }
    }

    pub(crate) fn read(&mut self, stream: &mut InputStream, ctx: &ReadContext) -> Result<ReadProgress> {
        if self.implicit_items {
            let ctx = ctx.implicit_le()?;
            self.read_items(stream, &ctx)
        } else {
            self.read_items(stream, ctx)
        }
    }

    fn read_items(&mut self, stream: &mut InputStream, ctx: &ReadContext) -> Result<ReadProgress> {
        if self.cursor.enter(stream)? {
            return Ok(ReadProgress::Complete);
        }
        loop {
            if let Some(mut item) = self.pending.take() {
                if item.read_impl(stream, ctx, Level::Item)? == ReadProgress::Suspended {
                    self.pending = Some(item);
                    return Ok(ReadProgress::Suspended);
                }
                self.items.push(item);
            }

            if let Some(len) = self.declared.get() {
                if self.cursor.transferred(stream) >= u64::from(len) {
                    break;
                }
            }

            match ctx.reader.read_item_header(stream) {
                Ok(HeaderRead::Header(SequenceItemHeader::Item { len }, _)) => {
                    self.pending = Some(Item::with_length(len));
                }
                Ok(HeaderRead::Header(SequenceItemHeader::SequenceDelimiter, _)) => break,
                Ok(HeaderRead::Header(SequenceItemHeader::ItemDelimiter, _)) => {
                    warn!("Item delimiter outside of an item in {}, ignored", self.tag);
                }
                Ok(HeaderRead::Suspended) => return Ok(ReadProgress::Suspended),
                Ok(HeaderRead::EndOfStream) => {
                    match self.declared.get() {
                        Some(len) => warn!(
                            "Stream ends within sequence {}, {} of {} bytes read",
                            self.tag,
                            self.cursor.transferred(stream),
                            len
                        ),
                        None => warn!("Stream ends before the delimiter of sequence {}", self.tag),
                    }
                    break;
                }
                Err(header::Error::DecodeHeader {
                    source: decode::Error::BadSequenceHeader { .. },
                }) => {
                    // the bytes are left in the stream for the enclosing item
                    warn!("Sequence {} ends without delimiter", self.tag);
                    break;
                }
                Err(e) => return Err(e).context(ReadHeaderSnafu),
            }
        }
        self.cursor.ready();
        Ok(ReadProgress::Complete)
    }

    pub(crate) fn write_to(&self, to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
        let len = match ctx.encoding {
            EncodingType::ExplicitLength => Length(self.length(ctx.ts, ctx.encoding)),
            EncodingType::UndefinedLength => Length::UNDEFINED,
        };
        ctx.encoder
            .encode_element_header(to, DataElementHeader::new(self.tag, VR::SQ, len))
            .context(WriteHeaderSnafu)?;
        for item in &self.items {
            item.write_item(to, ctx)?;
        }
        if ctx.encoding == EncodingType::UndefinedLength {
            ctx.encoder
                .encode_sequence_delimiter(to)
                .context(WriteHeaderSnafu)?;
        }
        Ok(())
    }

    /// Group length and padding pass over every item.
    pub(crate) fn compute(
        &mut self,
        ts: &TransferSyntax,
        options: &WriteOptions,
        instance_length: u32,
    ) -> Result<()> {
        for item in &mut self.items {
            item.compute(ts, options, options.sub_padlen, instance_length + 8, false)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_dictionary_std::tags;
    use dcmcodec_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;

    fn referenced(uid: &str) -> Item {
        let mut item = Item::new();
        item.put_string(tags::REFERENCED_SOP_INSTANCE_UID, uid).unwrap();
        item
    }

    #[test]
    fn lengths_in_both_encodings() {
        let ts = &EXPLICIT_VR_LITTLE_ENDIAN;
        let seq = Sequence::with_items(
            tags::REFERENCED_IMAGE_SEQUENCE,
            vec![referenced("1.2.3"), referenced("1.2.3.4")],
        );
        // UI "1.2.3" padded to 6: 8 + 6, UI "1.2.3.4": 8 + 8
        assert_eq!(seq.length(ts, EncodingType::ExplicitLength), (8 + 14) + (8 + 16));
        assert_eq!(
            seq.calc_element_length(ts, EncodingType::ExplicitLength),
            12 + 46
        );
        assert_eq!(
            seq.calc_element_length(ts, EncodingType::UndefinedLength),
            12 + (8 + 14 + 8) + (8 + 16 + 8) + 8
        );
        assert_eq!(Sequence::new(tags::REFERENCED_IMAGE_SEQUENCE).length(ts, EncodingType::ExplicitLength), 0);
    }

    #[test]
    fn compare_by_item_count_then_content() {
        let one = Sequence::with_items(tags::REFERENCED_IMAGE_SEQUENCE, vec![referenced("9")]);
        let two = Sequence::with_items(
            tags::REFERENCED_IMAGE_SEQUENCE,
            vec![referenced("1"), referenced("1")],
        );
        assert_eq!(one.compare(&two), Ordering::Less);
        assert_eq!(two.compare(&one), Ordering::Greater);

        let other = Sequence::with_items(tags::REFERENCED_IMAGE_SEQUENCE, vec![referenced("8")]);
        assert_eq!(one.compare(&other), Ordering::Greater);
        assert_eq!(one.compare(&one.clone()), Ordering::Equal);
    }
}
