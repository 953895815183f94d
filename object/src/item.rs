//! Items: ordered collections of objects keyed by tag.
//!
//! An [`Item`] is the body of a data set or of one sequence item.
//! Its children are kept sorted by tag,
//! and no two children share the same tag.

use crate::element::Element;
use crate::options::{EncodingType, GroupLengthEncoding, PaddingEncoding, ReadOptions, WriteOptions};
use crate::pixeldata::PixelData;
use crate::sequence::Sequence;
use crate::transfer::{Cursor, ReadContext, ReadProgress, TransferState, WriteContext};
use crate::{
    DoubledTagSnafu, InvalidVrSnafu, ItemOutsideSequenceSnafu, NoSuchElementSnafu, OddPaddingSnafu,
    ReadHeaderSnafu, Result, VrMismatchSnafu, WriteHeaderSnafu,
};
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::{DataElementHeader, Length, Tag, VR};
use dcmcodec_dictionary_std::StandardDataDictionary;
use dcmcodec_encoding::transfer_syntax::TransferSyntax;
use dcmcodec_parser::header::HeaderRead;
use dcmcodec_parser::stream::InputStream;
use snafu::{ensure, OptionExt, ResultExt};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::io::Write;
use std::iter::FromIterator;
use tracing::{info, warn};

/// A child of an item.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A data element with a primitive value.
    Element(Element),
    /// A sequence of items.
    Sequence(Sequence),
    /// The pixel data element, native or encapsulated.
    PixelData(PixelData),
}

impl From<Element> for Object {
    fn from(e: Element) -> Self {
        Object::Element(e)
    }
}

impl From<Sequence> for Object {
    fn from(s: Sequence) -> Self {
        Object::Sequence(s)
    }
}

impl From<PixelData> for Object {
    fn from(p: PixelData) -> Self {
        Object::PixelData(p)
    }
}

impl Object {
    pub fn tag(&self) -> Tag {
        match self {
            Object::Element(e) => e.tag(),
            Object::Sequence(s) => s.tag(),
            Object::PixelData(_) => Tag::PIXEL_DATA,
        }
    }

    pub fn vr(&self) -> VR {
        match self {
            Object::Element(e) => e.vr(),
            Object::Sequence(_) => VR::SQ,
            Object::PixelData(p) => p.vr(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Object::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Object::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Object::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Object::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pixel_data(&self) -> Option<&PixelData> {
        match self {
            Object::PixelData(p) => Some(p),
            _ => None,
        }
    }

    /// The number of bytes of the encoded object, header included.
    pub fn calc_element_length(&self, ts: &TransferSyntax, encoding: EncodingType) -> u32 {
        match self {
            Object::Element(e) => e.calc_element_length(ts),
            Object::Sequence(s) => s.calc_element_length(ts, encoding),
            Object::PixelData(p) => p.calc_element_length(ts),
        }
    }

    /// Compare two objects.
    ///
    /// Objects of different kinds with the same tag
    /// are ordered like elements of mismatching VR.
    pub fn compare(&self, rhs: &Object) -> Ordering {
        match (self, rhs) {
            (Object::Element(a), Object::Element(b)) => a.compare(b),
            (Object::Sequence(a), Object::Sequence(b)) => a.compare(b),
            (Object::PixelData(a), Object::PixelData(b)) => a.compare(b),
            (a, b) => match a.tag().cmp(&b.tag()) {
                Ordering::Equal => Ordering::Less,
                o => o,
            },
        }
    }

    pub fn verify(&mut self, autocorrect: bool) -> Result<()> {
        match self {
            Object::Element(e) => e.verify(autocorrect),
            Object::Sequence(s) => s.verify(autocorrect),
            Object::PixelData(p) => p.verify(autocorrect),
        }
    }

    pub fn transfer_state(&self) -> TransferState {
        match self {
            Object::Element(e) => e.transfer_state(),
            Object::Sequence(s) => s.transfer_state(),
            Object::PixelData(p) => p.transfer_state(),
        }
    }

    /// Create the object to receive the value following a header.
    pub(crate) fn from_header(header: DataElementHeader, ctx: &ReadContext) -> Object {
        let DataElementHeader { tag, vr, len } = header;
        if tag == Tag::PIXEL_DATA {
            return PixelData::placeholder(vr, len, ctx.ts.uid()).into();
        }
        match (vr, len.is_undefined()) {
            (VR::SQ, _) => Sequence::placeholder(tag, len, false).into(),
            // items of UN of undefined length are always implicit VR little endian
            (VR::UN, true) => Sequence::placeholder(tag, len, true).into(),
            (vr, true) => {
                warn!("{} {} has undefined length, reading it as a sequence", vr, tag);
                Sequence::placeholder(tag, len, false).into()
            }
            (vr, false) => Element::placeholder(tag, vr, len.0).into(),
        }
    }

    pub(crate) fn read(&mut self, stream: &mut InputStream, ctx: &ReadContext) -> Result<ReadProgress> {
        match self {
            Object::Element(e) => e.read(stream, ctx),
            Object::Sequence(s) => s.read(stream, ctx),
            Object::PixelData(p) => p.read(stream, ctx),
        }
    }

    pub(crate) fn write_to(&self, to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
        match self {
            Object::Element(e) => e.write_to(to, ctx),
            Object::Sequence(s) => s.write_to(to, ctx),
            Object::PixelData(p) => p.write_to(to, ctx),
        }
    }

    pub(crate) fn transfer_init(&mut self) {
        match self {
            Object::Element(e) => e.transfer_init(),
            Object::Sequence(s) => s.transfer_init(),
            Object::PixelData(p) => p.transfer_init(),
        }
    }

    pub(crate) fn transfer_end(&mut self) {
        match self {
            Object::Element(_) => {}
            Object::Sequence(s) => s.transfer_end(),
            Object::PixelData(p) => p.transfer_end(),
        }
    }
}

/// Where an item sits in the tree while it is being read.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Level {
    /// The top level of a data set, read to the end of the stream.
    Dataset,
    /// An item of a sequence, ended by its length or by a delimiter.
    Item,
}

/// An ordered collection of objects, keyed by tag.
#[derive(Debug, Clone)]
pub struct Item {
    objects: Vec<Object>,
    /// length announced by the item header
    declared: Length,
    cursor: Cursor,
    /// the child being read
    pending: Option<Box<Object>>,
}

impl Default for Item {
    fn default() -> Self {
        Item {
            objects: Vec::new(),
            declared: Length::UNDEFINED,
            cursor: Cursor::default(),
            pending: None,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.objects == other.objects
    }
}

impl FromIterator<Object> for Item {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        let mut item = Item::new();
        for object in iter {
            item.accept(object);
        }
        item
    }
}

fn dictionary_vr(dict: &dyn DataDictionary, tag: Tag) -> Result<VR> {
    dict.by_tag(tag)
        .map(|e| e.vr)
        .context(NoSuchElementSnafu { tag })
}

impl Item {
    /// Create an empty item.
    pub fn new() -> Self {
        Item::default()
    }

    /// Create an empty item to be read,
    /// of the length announced by its header.
    pub(crate) fn with_length(declared: Length) -> Self {
        Item {
            declared,
            ..Item::default()
        }
    }

    /// Insert an object, keeping the children sorted by tag.
    ///
    /// If an object with the same tag is present,
    /// it is replaced and returned when `replace` is true,
    /// otherwise the insertion fails with a doubled tag error.
    /// Sequences must be inserted as [`Sequence`],
    /// and item or delimitation tags are never accepted.
    pub fn insert(&mut self, object: impl Into<Object>, replace: bool) -> Result<Option<Object>> {
        let object = object.into();
        let tag = object.tag();
        ensure!(
            !tag.is_delimitation() && !matches!(&object, Object::Element(e) if e.vr() == VR::SQ),
            InvalidVrSnafu {
                tag,
                vr: object.vr(),
            }
        );
        match self.position(tag) {
            Ok(pos) => {
                ensure!(replace, DoubledTagSnafu { tag });
                Ok(Some(std::mem::replace(&mut self.objects[pos], object)))
            }
            Err(pos) => {
                self.objects.insert(pos, object);
                Ok(None)
            }
        }
    }

    /// Remove the object with the given tag.
    pub fn remove(&mut self, tag: Tag) -> Option<Object> {
        let pos = self.position(tag).ok()?;
        Some(self.objects.remove(pos))
    }

    pub fn get(&self, tag: Tag) -> Option<&Object> {
        let pos = self.position(tag).ok()?;
        self.objects.get(pos)
    }

    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut Object> {
        let pos = self.position(tag).ok()?;
        self.objects.get_mut(pos)
    }

    /// The element with a primitive value under the given tag.
    pub fn element(&self, tag: Tag) -> Option<&Element> {
        self.get(tag).and_then(Object::as_element)
    }

    pub fn element_mut(&mut self, tag: Tag) -> Option<&mut Element> {
        self.get_mut(tag).and_then(Object::as_element_mut)
    }

    pub fn sequence(&self, tag: Tag) -> Option<&Sequence> {
        self.get(tag).and_then(Object::as_sequence)
    }

    pub fn sequence_mut(&mut self, tag: Tag) -> Option<&mut Sequence> {
        self.get_mut(tag).and_then(Object::as_sequence_mut)
    }

    pub fn pixel_data(&self) -> Option<&PixelData> {
        self.get(Tag::PIXEL_DATA).and_then(Object::as_pixel_data)
    }

    /// Find the first object with the given tag,
    /// in this item and, if `recursive`,
    /// depth first in the items of its sequences.
    pub fn search(&self, tag: Tag, recursive: bool) -> Option<&Object> {
        if let Some(object) = self.get(tag) {
            return Some(object);
        }
        if !recursive {
            return None;
        }
        self.objects
            .iter()
            .filter_map(Object::as_sequence)
            .flat_map(|s| s.items())
            .find_map(|item| item.search(tag, true))
    }

    /// Find every object with the given tag anywhere in the tree,
    /// in encoding order.
    pub fn search_all(&self, tag: Tag) -> Vec<&Object> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: Tag, found: &mut Vec<&'a Object>) {
        for object in &self.objects {
            if object.tag() == tag {
                found.push(object);
            }
            if let Object::Sequence(s) = object {
                for item in s.items() {
                    item.collect(tag, found);
                }
            }
        }
    }

    /// The number of children.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the children in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Object> {
        self.objects.iter_mut()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    fn position(&self, tag: Tag) -> std::result::Result<usize, usize> {
        self.objects.binary_search_by_key(&tag, Object::tag)
    }

    /// Insert a textual element,
    /// with the value representation given by the standard dictionary.
    ///
    /// See [`put_string_with`](Item::put_string_with)
    /// for attributes known to another dictionary.
    pub fn put_string(&mut self, tag: Tag, value: &str) -> Result<()> {
        self.put_string_with(&StandardDataDictionary, tag, value)
    }

    /// Insert a textual element,
    /// with the value representation given by `dict`.
    pub fn put_string_with(&mut self, dict: &dyn DataDictionary, tag: Tag, value: &str) -> Result<()> {
        let element = Element::with_string(tag, dictionary_vr(dict, tag)?, value)?;
        self.insert(element, true)?;
        Ok(())
    }

    /// Insert a textual element of several values,
    /// with the value representation given by the standard dictionary.
    pub fn put_strings<S: AsRef<str>>(&mut self, tag: Tag, values: &[S]) -> Result<()> {
        self.put_strings_with(&StandardDataDictionary, tag, values)
    }

    /// Insert a textual element of several values,
    /// with the value representation given by `dict`.
    pub fn put_strings_with<S: AsRef<str>>(
        &mut self,
        dict: &dyn DataDictionary,
        tag: Tag,
        values: &[S],
    ) -> Result<()> {
        let mut element = Element::new(tag, dictionary_vr(dict, tag)?);
        element.put_strings(values)?;
        self.insert(element, true)?;
        Ok(())
    }

    /// Insert an element of 16-bit unsigned integers (`US`)
    /// known to the standard dictionary.
    pub fn put_u16(&mut self, tag: Tag, value: u16) -> Result<()> {
        let vr = dictionary_vr(&StandardDataDictionary, tag)?;
        let element = Element::with_u16s(tag, vr, &[value])?;
        self.insert(element, true)?;
        Ok(())
    }

    /// Insert an element of a 32-bit unsigned integer (`UL`)
    /// known to the standard dictionary.
    pub fn put_u32(&mut self, tag: Tag, value: u32) -> Result<()> {
        let vr = dictionary_vr(&StandardDataDictionary, tag)?;
        let element = Element::with_u32s(tag, vr, &[value])?;
        self.insert(element, true)?;
        Ok(())
    }

    fn expect_element(&self, tag: Tag) -> Result<&Element> {
        match self.get(tag) {
            Some(Object::Element(e)) => Ok(e),
            Some(other) => VrMismatchSnafu {
                tag,
                vr: other.vr(),
                requested: "element",
            }
            .fail(),
            None => NoSuchElementSnafu { tag }.fail(),
        }
    }

    /// The first normalized value of a textual element.
    pub fn get_string(&self, tag: Tag) -> Result<String> {
        self.expect_element(tag)?.get_string(0)
    }

    /// The whole value of a textual element, trailing padding removed.
    pub fn get_str(&self, tag: Tag) -> Result<Cow<'_, str>> {
        self.expect_element(tag)?.get_str()
    }

    pub fn get_u16(&self, tag: Tag) -> Result<u16> {
        self.expect_element(tag)?.get_u16(0)
    }

    pub fn get_u32(&self, tag: Tag) -> Result<u32> {
        self.expect_element(tag)?.get_u32(0)
    }

    /// The number of bytes of the encoded children.
    pub fn length(&self, ts: &TransferSyntax, encoding: EncodingType) -> u32 {
        self.objects
            .iter()
            .map(|o| o.calc_element_length(ts, encoding))
            .sum()
    }

    /// The number of bytes of this item encoded in a sequence,
    /// item header and delimiter included.
    pub fn calc_element_length(&self, ts: &TransferSyntax, encoding: EncodingType) -> u32 {
        let delimiter = match encoding {
            EncodingType::ExplicitLength => 0,
            EncodingType::UndefinedLength => 8,
        };
        8 + self.length(ts, encoding) + delimiter
    }

    /// Verify every element in the tree.
    ///
    /// All elements are visited, the first error is reported.
    pub fn verify(&mut self, autocorrect: bool) -> Result<()> {
        let mut outcome = Ok(());
        for object in &mut self.objects {
            if let Err(e) = object.verify(autocorrect) {
                if outcome.is_ok() {
                    outcome = Err(e);
                }
            }
        }
        outcome
    }

    /// Compare two items.
    ///
    /// The item with fewer children is less.
    /// Otherwise the children are compared in order,
    /// up to the first difference.
    pub fn compare(&self, rhs: &Item) -> Ordering {
        match self.len().cmp(&rhs.len()) {
            Ordering::Equal => {}
            o => return o,
        }
        self.objects
            .iter()
            .zip(&rhs.objects)
            .map(|(a, b)| a.compare(b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    pub fn transfer_state(&self) -> TransferState {
        self.cursor.state
    }

    /// Prepare this item and its children for another read.
    pub fn transfer_init(&mut self) {
        self.cursor.init();
        self.pending = None;
        for object in &mut self.objects {
            object.transfer_init();
        }
    }

    /// End the transfer.
    /// Reading again requires a call to [`Item::transfer_init`].
    pub fn transfer_end(&mut self) {
        self.cursor.end();
        self.pending = None;
        for object in &mut self.objects {
            object.transfer_end();
        }
    }

    /// Read elements from the stream until its end,
    /// resuming a previous partial read.
    pub fn read(
        &mut self,
        stream: &mut InputStream,
        ts: &TransferSyntax,
        options: &ReadOptions,
    ) -> Result<ReadProgress> {
        let ctx = ReadContext::new(ts, options)?;
        self.read_impl(stream, &ctx, Level::Dataset)
    }

    /// Write this item as a sequence item,
    /// after bringing group lengths and padding up to date.
    pub fn write(&mut self, to: &mut dyn Write, ts: &TransferSyntax, options: &WriteOptions) -> Result<()> {
        let ctx = WriteContext::new(ts, options.encoding)?;
        self.compute(ts, options, options.padlen, 0, false)?;
        self.write_item(to, &ctx)
    }

    pub(crate) fn read_impl(
        &mut self,
        stream: &mut InputStream,
        ctx: &ReadContext,
        level: Level,
    ) -> Result<ReadProgress> {
        if self.cursor.enter(stream)? {
            return Ok(ReadProgress::Complete);
        }
        loop {
            if let Some(mut pending) = self.pending.take() {
                if pending.read(stream, ctx)? == ReadProgress::Suspended {
                    self.pending = Some(pending);
                    return Ok(ReadProgress::Suspended);
                }
                self.accept(*pending);
            }

            if let Some(len) = self.declared.get() {
                if self.cursor.transferred(stream) >= u64::from(len) {
                    break;
                }
            }

            let mark = stream.mark();
            let header = match ctx.reader.read_header(stream) {
                Ok(HeaderRead::Header(header, _)) => header,
                Ok(HeaderRead::Suspended) => {
                    stream.release(mark);
                    return Ok(ReadProgress::Suspended);
                }
                Ok(HeaderRead::EndOfStream) => {
                    stream.release(mark);
                    match (level, self.declared.get()) {
                        (Level::Item, Some(len)) => warn!(
                            "Stream ends within an item, {} of {} bytes read",
                            self.cursor.transferred(stream),
                            len
                        ),
                        (Level::Item, None) => warn!("Stream ends before the item delimiter"),
                        (Level::Dataset, _) => {}
                    }
                    break;
                }
                Err(e) => {
                    stream.release(mark);
                    return Err(e).context(ReadHeaderSnafu);
                }
            };

            let tag = header.tag;
            if level == Level::Dataset {
                if let Some(stop) = ctx.options.stop_at {
                    if tag >= stop {
                        stream.putback(mark);
                        break;
                    }
                }
            }
            match (tag, level) {
                (Tag::ITEM_DELIMITER, Level::Item) => {
                    stream.release(mark);
                    break;
                }
                (Tag::ITEM_DELIMITER, Level::Dataset) => {
                    stream.release(mark);
                    warn!("Item delimiter outside of a sequence, ignored");
                }
                (Tag::SEQUENCE_DELIMITER, Level::Item) => {
                    // the delimiter belongs to the sequence
                    warn!("Sequence delimiter within an item, item delimiter missing");
                    stream.putback(mark);
                    break;
                }
                (Tag::SEQUENCE_DELIMITER, Level::Dataset) => {
                    stream.release(mark);
                    warn!("Sequence delimiter outside of a sequence, ignored");
                }
                (Tag::ITEM, _) => {
                    stream.release(mark);
                    return ItemOutsideSequenceSnafu.fail();
                }
                _ => {
                    stream.release(mark);
                    self.pending = Some(Box::new(Object::from_header(header, ctx)));
                }
            }
        }
        self.cursor.ready();
        Ok(ReadProgress::Complete)
    }

    /// Take a child which was read from a stream.
    pub(crate) fn accept(&mut self, object: Object) {
        let tag = object.tag();
        match self.position(tag) {
            Ok(_) => warn!("Element {} is present twice, keeping the first one", tag),
            Err(pos) => {
                if pos < self.objects.len() {
                    warn!("Element {} is out of order", tag);
                }
                self.objects.insert(pos, object);
            }
        }
    }

    /// Write the children.
    pub(crate) fn write_content(&self, to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
        for object in &self.objects {
            object.write_to(to, ctx)?;
        }
        Ok(())
    }

    /// Write this item as the item of a sequence.
    pub(crate) fn write_item(&self, to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
        match ctx.encoding {
            EncodingType::ExplicitLength => {
                let len = self.length(ctx.ts, ctx.encoding);
                ctx.encoder.encode_item_header(to, len).context(WriteHeaderSnafu)?;
                self.write_content(to, ctx)
            }
            EncodingType::UndefinedLength => {
                ctx.encoder
                    .encode_item_header(to, Length::UNDEFINED.0)
                    .context(WriteHeaderSnafu)?;
                self.write_content(to, ctx)?;
                ctx.encoder.encode_item_delimiter(to).context(WriteHeaderSnafu)
            }
        }
    }

    /// Check that all pixel data in the tree can be written
    /// with the given transfer syntax.
    pub(crate) fn check_pixel_data(&self, ts: &TransferSyntax) -> Result<()> {
        for object in &self.objects {
            match object {
                Object::PixelData(p) => p.check_writable(ts)?,
                Object::Sequence(s) => {
                    for item in s.items() {
                        item.check_pixel_data(ts)?;
                    }
                }
                Object::Element(_) => {}
            }
        }
        Ok(())
    }

    /// Bring group length elements and Data Set Trailing Padding
    /// up to date, as configured by the write options,
    /// in this item and recursively in its sequences.
    ///
    /// The item is padded to a multiple of `padlen` bytes
    /// and the items of its sequences to a multiple of `sub_padlen` bytes.
    pub fn compute_group_length_and_padding(
        &mut self,
        ts: &TransferSyntax,
        options: &WriteOptions,
    ) -> Result<()> {
        self.compute(ts, options, options.padlen, 0, false)
    }

    /// The group length and padding pass.
    ///
    /// `instance_length` is the number of bytes written before this item,
    /// which only counts for the padding of a data set.
    pub(crate) fn compute(
        &mut self,
        ts: &TransferSyntax,
        options: &WriteOptions,
        padlen: u32,
        instance_length: u32,
        is_dataset: bool,
    ) -> Result<()> {
        let (glenc, padenc) = (options.group_length, options.padding);
        ensure!(
            padenc != PaddingEncoding::WithPadding || (padlen % 2 == 0 && options.sub_padlen % 2 == 0),
            OddPaddingSnafu {
                padlen,
                sub_padlen: options.sub_padlen,
            }
        );
        if glenc == GroupLengthEncoding::NoChange && padenc == PaddingEncoding::NoChange {
            return Ok(());
        }
        let encoding = options.encoding;
        let with_group_length = matches!(
            glenc,
            GroupLengthEncoding::WithGroupLength | GroupLengthEncoding::Recalculate
        );

        let mut i = 0;
        let mut last_group = None;
        let mut group_length_at = None;
        let mut padding_gl = None;
        let mut group_len = 0u32;
        while i < self.objects.len() {
            if let Object::Sequence(seq) = &mut self.objects[i] {
                seq.compute(ts, options, instance_length + ts.header_size(VR::SQ))?;
            }
            let tag = self.objects[i].tag();

            let drop_group_length = matches!(
                glenc,
                GroupLengthEncoding::WithGroupLength | GroupLengthEncoding::WithoutGroupLength
            ) && tag.is_group_length();
            let drop_padding = padenc != PaddingEncoding::NoChange && tag == Tag::DATA_SET_TRAILING_PADDING;
            if drop_group_length || drop_padding {
                self.objects.remove(i);
                continue;
            }
            if !with_group_length {
                i += 1;
                continue;
            }

            let group = tag.group();
            if last_group != Some(group) {
                last_group = Some(group);
                if let Some(at) = group_length_at.take() {
                    self.set_group_length(at, group_len)?;
                }
                group_len = 0;

                if tag.is_group_length() {
                    if self.objects[i].vr() != VR::UL {
                        info!("Group length {} with VR {} replaced by UL", tag, self.objects[i].vr());
                        self.objects[i] = Element::new(tag, VR::UL).into();
                    }
                    group_length_at = Some(i);
                    if padenc == PaddingEncoding::WithPadding && group == 0xFFFC {
                        padding_gl = Some(i);
                    }
                    i += 1;
                    continue;
                }
                if glenc == GroupLengthEncoding::WithGroupLength {
                    self.objects
                        .insert(i, Element::new(tag.group_length_tag(), VR::UL).into());
                    group_length_at = Some(i);
                    i += 1;
                }
            }
            group_len += self.objects[i].calc_element_length(ts, encoding);
            i += 1;
        }
        if let Some(at) = group_length_at {
            self.set_group_length(at, group_len)?;
        }

        if padenc == PaddingEncoding::WithPadding && padlen > 0 {
            let len = if is_dataset {
                instance_length + self.length(ts, encoding)
            } else {
                self.length(ts, encoding)
            };
            let mut padding = padlen - len % padlen;
            if padding != padlen {
                let header = ts.header_size(VR::OB);
                while header > padding {
                    padding += padlen;
                }
                padding -= header;
                let element = Element::from_bytes(
                    Tag::DATA_SET_TRAILING_PADDING,
                    VR::OB,
                    vec![0; padding as usize],
                );
                let element_len = element.calc_element_length(ts);
                self.insert(element, true)?;
                if let Some(at) = padding_gl {
                    if let Some(e) = self.objects[at].as_element_mut() {
                        let current = e.get_u32(0).unwrap_or(0);
                        e.put_u32_array(&[current + element_len])?;
                    }
                }
            }
        }
        Ok(())
    }

    fn set_group_length(&mut self, at: usize, len: u32) -> Result<()> {
        if let Some(e) = self.objects[at].as_element_mut() {
            e.put_u32_array(&[len])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;
    use dcmcodec_core::dictionary::{DictionaryEntry, VmRange};
    use dcmcodec_dictionary_std::tags;
    use dcmcodec_transfer_syntax_registry::entries::{EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN};

    fn patient() -> Item {
        let mut item = Item::new();
        item.put_string(tags::PATIENT_NAME, "Doe^John").unwrap();
        item.put_string(tags::PATIENT_ID, "12345").unwrap();
        item.put_u16(tags::ROWS, 512).unwrap();
        item
    }

    #[test]
    fn insertion_keeps_tag_order_and_rejects_duplicates() {
        let mut item = Item::new();
        item.put_u16(tags::ROWS, 2).unwrap();
        item.put_string(tags::PATIENT_ID, "A").unwrap();
        item.put_string(tags::PATIENT_NAME, "B").unwrap();
        let tags: Vec<_> = item.iter().map(Object::tag).collect();
        assert_eq!(tags, vec![tags::PATIENT_NAME, tags::PATIENT_ID, tags::ROWS]);

        let dup = Element::with_string(tags::PATIENT_ID, VR::LO, "C").unwrap();
        let err = item.insert(dup.clone(), false).unwrap_err();
        assert_eq!(err.condition(), Condition::DoubledTag);
        let old = item.insert(dup, true).unwrap();
        assert_eq!(old.and_then(|o| o.as_element().map(|e| e.length())), Some(1));
        assert_eq!(item.get_string(tags::PATIENT_ID).unwrap(), "C");

        assert!(item.remove(tags::PATIENT_ID).is_some());
        assert!(item.remove(tags::PATIENT_ID).is_none());
        assert_eq!(item.len(), 2);
    }

    #[test]
    fn invalid_objects_are_rejected() {
        let mut item = Item::new();
        let err = item.insert(Element::new(tags::REFERENCED_IMAGE_SEQUENCE, VR::SQ), false).unwrap_err();
        assert_eq!(err.condition(), Condition::InvalidVr);
        let err = item.insert(Element::new(Tag::ITEM_DELIMITER, VR::UN), false).unwrap_err();
        assert_eq!(err.condition(), Condition::InvalidVr);
        let err = item.put_string(Tag(0x0009, 0x1001), "x").unwrap_err();
        assert_eq!(err.condition(), Condition::IllegalParameter);
    }

    #[test]
    fn typed_access() {
        let item = patient();
        assert_eq!(item.get_string(tags::PATIENT_NAME).unwrap(), "Doe^John");
        assert_eq!(item.get_u16(tags::ROWS).unwrap(), 512);
        assert_eq!(item.get_u32(tags::COLUMNS).unwrap_err().condition(), Condition::IllegalParameter);
        assert_eq!(item.get_u32(tags::ROWS).unwrap_err().condition(), Condition::IllegalCall);
    }

    /// Knows one private attribute.
    struct PrivateDictionary(DictionaryEntry);

    impl DataDictionary for PrivateDictionary {
        fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
            Some(&self.0).filter(|e| e.alias == name)
        }

        fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
            Some(&self.0).filter(|e| e.tag.contains(tag))
        }
    }

    #[test]
    fn values_typed_by_another_dictionary() {
        let dict = PrivateDictionary(DictionaryEntry::new(
            Tag(0x0009, 0x1001),
            "AcquisitionLabel",
            VR::LO,
            VmRange::exactly(1),
        ));
        let mut item = Item::new();
        item.put_string_with(&dict, Tag(0x0009, 0x1001), "scout").unwrap();
        item.put_strings_with(&dict, Tag(0x0009, 0x1001), &["axial", "coronal"])
            .unwrap();
        let element = item.element(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(element.vr(), VR::LO);
        assert_eq!(element.get_strings().unwrap(), vec!["axial", "coronal"]);

        // the private dictionary misses standard attributes
        let err = item.put_string_with(&dict, tags::PATIENT_NAME, "Doe^John").unwrap_err();
        assert_eq!(err.condition(), Condition::IllegalParameter);
        assert!(item.get(tags::PATIENT_NAME).is_none());
    }

    #[test]
    fn recursive_search() {
        let mut inner = Item::new();
        inner.put_string(tags::REFERENCED_SOP_INSTANCE_UID, "1.2.3").unwrap();
        let mut sequence = Sequence::new(tags::REFERENCED_IMAGE_SEQUENCE);
        sequence.push(inner);
        let mut item = patient();
        item.insert(sequence, false).unwrap();
        item.put_string(tags::REFERENCED_SOP_INSTANCE_UID, "4.5.6").unwrap();

        assert!(patient().search(tags::REFERENCED_SOP_INSTANCE_UID, true).is_none());
        let found = item.search_all(tags::REFERENCED_SOP_INSTANCE_UID);
        assert_eq!(found.len(), 2);
        // the nested one comes first, in encoding order
        assert_eq!(found[0].as_element().unwrap().get_string(0).unwrap(), "1.2.3");

        item.remove(tags::REFERENCED_SOP_INSTANCE_UID);
        assert!(item.search(tags::REFERENCED_SOP_INSTANCE_UID, false).is_none());
        assert!(item.search(tags::REFERENCED_SOP_INSTANCE_UID, true).is_some());
    }

    #[test]
    fn lengths_include_headers_and_padding() {
        let item = patient();
        // PN "Doe^John": 8 + 8, LO "12345": 8 + 6, US: 8 + 2
        assert_eq!(item.length(&EXPLICIT_VR_LITTLE_ENDIAN, EncodingType::ExplicitLength), 40);
        assert_eq!(item.length(&IMPLICIT_VR_LITTLE_ENDIAN, EncodingType::ExplicitLength), 40);
        assert_eq!(
            item.calc_element_length(&EXPLICIT_VR_LITTLE_ENDIAN, EncodingType::UndefinedLength),
            8 + 40 + 8
        );
    }

    #[test]
    fn cardinality_decides_comparison() {
        let small = patient();
        let mut large = patient();
        large.put_string(tags::STUDY_DATE, "20200101").unwrap();
        assert_eq!(small.compare(&large), Ordering::Less);
        assert_eq!(large.compare(&small), Ordering::Greater);
        assert_eq!(small.compare(&patient()), Ordering::Equal);

        // same cardinality, content decides
        let mut other = patient();
        other.put_u16(tags::ROWS, 1024).unwrap();
        assert_eq!(small.compare(&other), Ordering::Less);
    }

    #[test]
    fn group_lengths_are_added_and_removed() {
        let ts = &EXPLICIT_VR_LITTLE_ENDIAN;
        let mut item = patient();
        let options = WriteOptions::new().group_length(GroupLengthEncoding::WithGroupLength);
        item.compute_group_length_and_padding(ts, &options).unwrap();
        assert_eq!(item.get_u32(Tag(0x0010, 0x0000)).unwrap(), 16 + 14);
        assert_eq!(item.get_u32(Tag(0x0028, 0x0000)).unwrap(), 10);
        assert_eq!(item.len(), 5);

        // recomputed after a change
        item.put_string(tags::PATIENT_ID, "1234567").unwrap();
        let options = WriteOptions::new().group_length(GroupLengthEncoding::Recalculate);
        item.compute_group_length_and_padding(ts, &options).unwrap();
        assert_eq!(item.get_u32(Tag(0x0010, 0x0000)).unwrap(), 16 + 16);

        let options = WriteOptions::new().group_length(GroupLengthEncoding::WithoutGroupLength);
        item.compute_group_length_and_padding(ts, &options).unwrap();
        assert_eq!(item.len(), 3);
    }

    #[test]
    fn group_length_of_other_vr_is_replaced() {
        let mut item = patient();
        item.insert(Element::with_u16s(Tag(0x0010, 0x0000), VR::US, &[0]).unwrap(), false)
            .unwrap();
        let options = WriteOptions::new().group_length(GroupLengthEncoding::Recalculate);
        item.compute_group_length_and_padding(&EXPLICIT_VR_LITTLE_ENDIAN, &options).unwrap();
        let gl = item.element(Tag(0x0010, 0x0000)).unwrap();
        assert_eq!(gl.vr(), VR::UL);
        assert_eq!(gl.get_u32(0).unwrap(), 30);
        // groups without a group length are left alone
        assert!(item.get(Tag(0x0028, 0x0000)).is_none());
    }

    #[test]
    fn padding_to_a_multiple() {
        let ts = &EXPLICIT_VR_LITTLE_ENDIAN;
        let mut item = patient();
        let options = WriteOptions::new()
            .group_length(GroupLengthEncoding::NoChange)
            .with_padding(64, 0);
        item.compute_group_length_and_padding(ts, &options).unwrap();
        assert_eq!(item.length(ts, EncodingType::ExplicitLength) % 64, 0);
        let padding = item.element(Tag::DATA_SET_TRAILING_PADDING).unwrap();
        // 40 bytes of elements, a 12 byte header and 12 bytes of zeros
        assert_eq!(padding.length(), 12);

        // padding again gives the same result
        item.compute_group_length_and_padding(ts, &options).unwrap();
        assert_eq!(item.length(ts, EncodingType::ExplicitLength), 64);

        let options = WriteOptions::new().without_padding();
        item.compute_group_length_and_padding(ts, &options).unwrap();
        assert!(item.get(Tag::DATA_SET_TRAILING_PADDING).is_none());

        let options = WriteOptions::new().with_padding(63, 0);
        let err = item.compute_group_length_and_padding(ts, &options).unwrap_err();
        assert_eq!(err.condition(), Condition::IllegalCall);
    }

    #[test]
    fn padding_grows_when_the_header_does_not_fit() {
        let ts = &EXPLICIT_VR_LITTLE_ENDIAN;
        let mut item = Item::new();
        // 8 + 30 bytes, 2 short of a multiple of 8
        item.put_string(tags::PATIENT_NAME, &"A".repeat(30)).unwrap();
        let options = WriteOptions::new().group_length(GroupLengthEncoding::NoChange).with_padding(8, 0);
        item.compute_group_length_and_padding(ts, &options).unwrap();
        let padding = item.element(Tag::DATA_SET_TRAILING_PADDING).unwrap();
        // 2 + 8 + 8 - 12
        assert_eq!(padding.length(), 6);
        assert_eq!(item.length(ts, EncodingType::ExplicitLength), 56);
    }
}
