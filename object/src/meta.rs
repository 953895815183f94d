//! The file meta information of a DICOM file:
//! the 128-byte preamble, the `DICM` magic code
//! and the elements of group `0002`.

use crate::dataset::{detected_transfer_syntax, Dataset};
use crate::item::{Item, Object};
use crate::options::{EncodingType, GroupLengthEncoding, MetaUpdate, ReadOptions, WriteOptions};
use crate::transfer::{Cursor, ReadContext, ReadProgress, TransferState, WriteContext};
use crate::uid::generate_uid;
use crate::{
    Element, ReadHeaderSnafu, ReadStreamSnafu, Result, WriteMagicCodeSnafu, WritePreambleSnafu,
    IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME,
};
use dcmcodec_core::{Tag, VR};
use dcmcodec_dictionary_std::{tags, uids};
use dcmcodec_encoding::transfer_syntax::TransferSyntax;
use dcmcodec_parser::detect::{check_transfer_syntax, next_tag_is_meta, DetectedSyntax};
use dcmcodec_parser::header::HeaderRead;
use dcmcodec_parser::stream::InputStream;
use dcmcodec_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;
use snafu::ResultExt;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use tracing::{debug, info, warn};

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

const PREAMBLE_LENGTH: usize = 128;

/// The File Meta Information Version written to new files.
const META_VERSION: [u8; 2] = [0x00, 0x01];

/// DICOM File Meta Information.
///
/// Dereferences to the [`Item`] holding the group `0002` elements.
/// See [`validate`](MetaInfo::validate)
/// for how missing attributes are filled in before a write.
#[derive(Debug, Clone)]
pub struct MetaInfo {
    item: Item,
    preamble: [u8; PREAMBLE_LENGTH],
    preamble_used: bool,
    preamble_state: TransferState,
    cursor: Cursor,
    detected: Option<DetectedSyntax>,
    pending: Option<Object>,
    /// value of the group length element, when read
    group_length: Option<u32>,
    /// stream position right after the group length element
    group_start: Option<u64>,
}

impl Default for MetaInfo {
    fn default() -> Self {
        MetaInfo {
            item: Item::new(),
            preamble: [0; PREAMBLE_LENGTH],
            preamble_used: false,
            preamble_state: TransferState::Init,
            cursor: Cursor::default(),
            detected: None,
            pending: None,
            group_length: None,
            group_start: None,
        }
    }
}

impl PartialEq for MetaInfo {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl Deref for MetaInfo {
    type Target = Item;

    fn deref(&self) -> &Item {
        &self.item
    }
}

impl DerefMut for MetaInfo {
    fn deref_mut(&mut self) -> &mut Item {
        &mut self.item
    }
}

impl MetaInfo {
    /// Create empty meta information, without preamble.
    pub fn new() -> Self {
        MetaInfo::default()
    }

    /// The 128 bytes of the preamble.
    /// All zeros when the preamble is not used.
    pub fn preamble(&self) -> &[u8; PREAMBLE_LENGTH] {
        &self.preamble
    }

    /// Whether a preamble was read, or was set to be written.
    pub fn preamble_used(&self) -> bool {
        self.preamble_used
    }

    pub fn set_preamble(&mut self, preamble: [u8; PREAMBLE_LENGTH]) {
        self.preamble = preamble;
        self.preamble_used = true;
    }

    /// The encoding of the meta elements as detected on read.
    pub fn detected_transfer_syntax(&self) -> Option<DetectedSyntax> {
        self.detected
    }

    /// The Transfer Syntax UID of the data set, if present and not empty.
    pub fn transfer_syntax(&self) -> Option<String> {
        self.item
            .get_str(tags::TRANSFER_SYNTAX_UID)
            .ok()
            .map(|uid| uid.trim().to_string())
            .filter(|uid| !uid.is_empty())
    }

    pub fn transfer_state(&self) -> TransferState {
        self.cursor.state
    }

    /// Prepare the meta information for another read.
    pub fn transfer_init(&mut self) {
        self.cursor.init();
        self.preamble_state = TransferState::Init;
        self.detected = None;
        self.pending = None;
        self.group_length = None;
        self.group_start = None;
        self.item.transfer_init();
    }

    pub fn transfer_end(&mut self) {
        self.cursor.end();
        self.preamble_state = TransferState::NotInitialized;
        self.pending = None;
        self.item.transfer_end();
    }

    /// Read the preamble, if present, and the group `0002` elements,
    /// resuming a previous partial read.
    ///
    /// Reading ends at the first tag outside of group `0002`,
    /// which is left in the stream.
    pub fn read(&mut self, stream: &mut InputStream, options: &ReadOptions) -> Result<ReadProgress> {
        if self.cursor.enter(stream)? {
            return Ok(ReadProgress::Complete);
        }
        if self.preamble_state != TransferState::Ready && !self.read_preamble(stream)? {
            return Ok(ReadProgress::Suspended);
        }
        let detected = match self.detected {
            Some(detected) => detected,
            None => match self.detect(stream, options)? {
                Some(detected) => detected,
                None => return Ok(ReadProgress::Suspended),
            },
        };
        let ts = detected_transfer_syntax(detected)?;
        let ctx = ReadContext::new(&ts, options)?;

        loop {
            if let Some(mut pending) = self.pending.take() {
                if pending.read(stream, &ctx)? == ReadProgress::Suspended {
                    self.pending = Some(pending);
                    return Ok(ReadProgress::Suspended);
                }
                if pending.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH && self.group_start.is_none() {
                    self.group_length = pending.as_element().and_then(|e| e.get_u32(0).ok());
                    self.group_start = Some(stream.tell());
                }
                self.item.accept(pending);
            }

            let avail = stream.fill(2).context(ReadStreamSnafu)?;
            if avail < 2 {
                if !stream.is_finished() {
                    return Ok(ReadProgress::Suspended);
                }
                break;
            }
            if !next_tag_is_meta(stream.peek()) {
                break;
            }
            match ctx.reader.read_header(stream).context(ReadHeaderSnafu)? {
                HeaderRead::Header(header, _) => {
                    self.pending = Some(Object::from_header(header, &ctx));
                }
                HeaderRead::Suspended => return Ok(ReadProgress::Suspended),
                HeaderRead::EndOfStream => break,
            }
        }

        self.check_group_length(stream);
        self.cursor.ready();
        Ok(ReadProgress::Complete)
    }

    /// Take the preamble and magic code if both are there.
    /// Gives false while too few bytes are available to tell.
    fn read_preamble(&mut self, stream: &mut InputStream) -> Result<bool> {
        self.preamble_state = TransferState::InWork;
        let needed = PREAMBLE_LENGTH + DICM_MAGIC_CODE.len();
        let avail = stream.fill(needed).context(ReadStreamSnafu)?;
        if avail < needed && !stream.is_finished() {
            return Ok(false);
        }
        let bytes = stream.peek();
        if avail >= needed && bytes[PREAMBLE_LENGTH..needed] == DICM_MAGIC_CODE {
            self.preamble.copy_from_slice(&bytes[..PREAMBLE_LENGTH]);
            stream.consume(needed);
            self.preamble_used = true;
        } else {
            debug!("No DICM magic code found, reading without preamble");
            self.preamble_used = false;
        }
        self.preamble_state = TransferState::Ready;
        Ok(true)
    }

    /// Detect the encoding of the meta elements.
    /// The detected encoding wins over the expected one.
    fn detect(&mut self, stream: &mut InputStream, options: &ReadOptions) -> Result<Option<DetectedSyntax>> {
        let avail = stream.fill(6).context(ReadStreamSnafu)?;
        if avail < 6 && !stream.is_finished() {
            return Ok(None);
        }
        let found = check_transfer_syntax(stream, &*options.dictionary).context(ReadStreamSnafu)?;
        if let Some(expected) = options.expected {
            if expected.is_explicit_vr() != found.is_explicit_vr() {
                warn!(
                    "Meta information expected in {:?}, but found {:?}",
                    expected, found
                );
            }
        }
        self.detected = Some(found);
        Ok(Some(found))
    }

    fn check_group_length(&self, stream: &InputStream) {
        match (self.group_length, self.group_start) {
            (Some(declared), Some(start)) => {
                let read = stream.tell().saturating_sub(start);
                if read != u64::from(declared) {
                    warn!(
                        "Meta group length is {}, but {} bytes of meta elements were read",
                        declared, read
                    );
                }
            }
            _ => {
                if !self.item.is_empty() {
                    warn!("Meta group length (0002,0000) is missing");
                }
            }
        }
    }

    /// Bring the meta information up to date
    /// for writing `dataset` with the transfer syntax `ts`.
    ///
    /// The group length is always recomputed.
    /// Unless `mode` is [`MetaUpdate::Keep`],
    /// mandatory attributes are created when absent:
    ///
    /// * File Meta Information Version as `00\01`;
    /// * Media Storage SOP Class UID from the SOP Class UID of the data set,
    ///   or the private generic file SOP class;
    /// * Media Storage SOP Instance UID from the SOP Instance UID of the data set,
    ///   or a newly generated UID.
    ///
    /// The Transfer Syntax UID and the implementation identifiers
    /// are always set.
    pub fn validate(&mut self, ts: &TransferSyntax, dataset: &Dataset, mode: MetaUpdate) -> Result<()> {
        if mode == MetaUpdate::CreateNew {
            self.item.clear();
        }
        if mode != MetaUpdate::Keep {
            match self.item.element(tags::FILE_META_INFORMATION_VERSION) {
                Some(e) if e.length() > 0 => {
                    if e.value_bytes() != Some(&META_VERSION[..]) {
                        warn!("Unknown File Meta Information Version {:?}", e.value_bytes());
                    }
                }
                _ => {
                    info!("Creating File Meta Information Version");
                    self.item.insert(
                        Element::from_bytes(tags::FILE_META_INFORMATION_VERSION, VR::OB, META_VERSION.to_vec()),
                        true,
                    )?;
                }
            }

            let update = mode == MetaUpdate::UpdateFromDataset;
            let sop_class = dataset_uid(dataset, tags::SOP_CLASS_UID);
            self.fill_uid(tags::MEDIA_STORAGE_SOP_CLASS_UID, sop_class, update, || {
                uids::PRIVATE_GENERIC_FILE_SOP_CLASS.to_string()
            })?;
            let sop_instance = dataset_uid(dataset, tags::SOP_INSTANCE_UID);
            self.fill_uid(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, sop_instance, update, generate_uid)?;

            self.item.put_string(tags::TRANSFER_SYNTAX_UID, ts.uid())?;
            self.item.put_string(tags::IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_CLASS_UID)?;
            self.item
                .put_string(tags::IMPLEMENTATION_VERSION_NAME, IMPLEMENTATION_VERSION_NAME)?;
        }

        let options = WriteOptions::new().group_length(GroupLengthEncoding::WithGroupLength);
        self.item.compute(&EXPLICIT_VR_LITTLE_ENDIAN, &options, 0, 0, false)
    }

    /// Set a UID attribute when it is absent or empty,
    /// or when `update` asks to copy it from the data set.
    fn fill_uid(
        &mut self,
        tag: Tag,
        from_dataset: Option<String>,
        update: bool,
        default: impl FnOnce() -> String,
    ) -> Result<()> {
        let present = dataset_uid(&self.item, tag).is_some();
        if present && !(update && from_dataset.is_some()) {
            return Ok(());
        }
        let value = match from_dataset {
            Some(uid) => uid,
            None => {
                let uid = default();
                info!("Creating {} as {}", tag, uid);
                uid
            }
        };
        self.item.put_string(tag, &value)
    }

    /// Whether the preamble and magic code are part of the output.
    fn writes_preamble(&self) -> bool {
        self.preamble_used || !self.item.is_empty()
    }

    /// The number of bytes written by [`write`](MetaInfo::write).
    pub fn calc_length(&self) -> u32 {
        let preamble = if self.writes_preamble() {
            (PREAMBLE_LENGTH + DICM_MAGIC_CODE.len()) as u32
        } else {
            0
        };
        preamble
            + self
                .item
                .length(&EXPLICIT_VR_LITTLE_ENDIAN, EncodingType::ExplicitLength)
    }

    /// Write the preamble, the magic code
    /// and the meta elements in explicit VR little endian.
    ///
    /// Nothing is written for empty meta information without preamble.
    pub fn write(&self, to: &mut dyn Write) -> Result<()> {
        if self.writes_preamble() {
            to.write_all(&self.preamble).context(WritePreambleSnafu)?;
            to.write_all(&DICM_MAGIC_CODE).context(WriteMagicCodeSnafu)?;
        }
        let ctx = WriteContext::new(&EXPLICIT_VR_LITTLE_ENDIAN, EncodingType::ExplicitLength)?;
        self.item.write_content(to, &ctx)
    }
}

/// A non-empty UID value of the item.
fn dataset_uid(item: &Item, tag: Tag) -> Option<String> {
    item.get_str(tag)
        .ok()
        .map(|uid| uid.trim().to_string())
        .filter(|uid| !uid.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uid::is_valid_uid;

    fn dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset
            .put_string(tags::SOP_CLASS_UID, uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
            .unwrap();
        dataset.put_string(tags::SOP_INSTANCE_UID, "1.2.3.4.5").unwrap();
        dataset
    }

    fn validated() -> MetaInfo {
        let mut meta = MetaInfo::new();
        meta.validate(&EXPLICIT_VR_LITTLE_ENDIAN, &dataset(), MetaUpdate::FillMissing)
            .unwrap();
        meta
    }

    fn encoded(meta: &MetaInfo) -> Vec<u8> {
        let mut out = Vec::new();
        meta.write(&mut out).unwrap();
        out
    }

    #[rustfmt::skip]
    const SHORT_META: &[u8] = &[
        // (0002,0000) UL, length 4
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00,
        // value 28
        0x1C, 0x00, 0x00, 0x00,
        // (0002,0010) UI, length 20
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
        // "1.2.840.10008.1.2.1\0"
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0',
        b'0', b'0', b'8', b'.', b'1', b'.', b'2', b'.', b'1', 0x00,
        // (0008,0060) CS, length 2: not part of the meta group
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00,
        b'O', b'T',
    ];

    #[test]
    fn missing_attributes_are_filled_in() {
        let meta = validated();
        assert_eq!(
            meta.get_string(tags::MEDIA_STORAGE_SOP_CLASS_UID).unwrap(),
            uids::SECONDARY_CAPTURE_IMAGE_STORAGE
        );
        assert_eq!(
            meta.get_string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID).unwrap(),
            "1.2.3.4.5"
        );
        assert_eq!(meta.transfer_syntax().as_deref(), Some(uids::EXPLICIT_VR_LITTLE_ENDIAN));
        assert_eq!(
            meta.get_string(tags::IMPLEMENTATION_CLASS_UID).unwrap(),
            IMPLEMENTATION_CLASS_UID
        );
        assert_eq!(
            meta.element(tags::FILE_META_INFORMATION_VERSION)
                .and_then(Element::value_bytes),
            Some(&META_VERSION[..])
        );

        // the group length counts everything after itself
        let length = meta.length(&EXPLICIT_VR_LITTLE_ENDIAN, EncodingType::ExplicitLength);
        assert_eq!(
            meta.get_u32(tags::FILE_META_INFORMATION_GROUP_LENGTH).unwrap(),
            length - 12
        );
        assert_eq!(meta.calc_length(), 132 + length);
    }

    #[test]
    fn defaults_without_dataset_uids() {
        let mut meta = MetaInfo::new();
        meta.validate(&EXPLICIT_VR_LITTLE_ENDIAN, &Dataset::new(), MetaUpdate::FillMissing)
            .unwrap();
        assert_eq!(
            meta.get_string(tags::MEDIA_STORAGE_SOP_CLASS_UID).unwrap(),
            uids::PRIVATE_GENERIC_FILE_SOP_CLASS
        );
        let instance = meta.get_string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID).unwrap();
        assert!(is_valid_uid(&instance));
    }

    #[test]
    fn update_modes() {
        let mut meta = MetaInfo::new();
        meta.put_string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, "9.9").unwrap();
        meta.put_string(tags::SOURCE_APPLICATION_ENTITY_TITLE, "STORESCU").unwrap();

        let mut fill = meta.clone();
        fill.validate(&EXPLICIT_VR_LITTLE_ENDIAN, &dataset(), MetaUpdate::FillMissing)
            .unwrap();
        assert_eq!(fill.get_string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID).unwrap(), "9.9");

        let mut update = meta.clone();
        update
            .validate(&EXPLICIT_VR_LITTLE_ENDIAN, &dataset(), MetaUpdate::UpdateFromDataset)
            .unwrap();
        assert_eq!(
            update.get_string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID).unwrap(),
            "1.2.3.4.5"
        );
        assert!(update.get(tags::SOURCE_APPLICATION_ENTITY_TITLE).is_some());

        let mut create = meta.clone();
        create
            .validate(&EXPLICIT_VR_LITTLE_ENDIAN, &dataset(), MetaUpdate::CreateNew)
            .unwrap();
        assert!(create.get(tags::SOURCE_APPLICATION_ENTITY_TITLE).is_none());
        assert_eq!(
            create.get_string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID).unwrap(),
            "1.2.3.4.5"
        );

        let mut keep = meta;
        keep.validate(&EXPLICIT_VR_LITTLE_ENDIAN, &dataset(), MetaUpdate::Keep)
            .unwrap();
        assert!(keep.get(tags::TRANSFER_SYNTAX_UID).is_none());
        // 0002,0003: 8 + "9.9\0", 0002,0016: 8 + "STORESCU"
        assert_eq!(keep.get_u32(tags::FILE_META_INFORMATION_GROUP_LENGTH).unwrap(), 28);
    }

    #[test]
    fn read_with_preamble() {
        let mut original = validated();
        let mut preamble = [0; 128];
        preamble[0] = 0x49;
        original.set_preamble(preamble);
        let mut bytes = encoded(&original);
        // start of the data set
        bytes.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'O', b'T']);

        let mut stream = InputStream::from_bytes(bytes);
        let mut meta = MetaInfo::new();
        assert_eq!(
            meta.read(&mut stream, &ReadOptions::new()).unwrap(),
            ReadProgress::Complete
        );
        assert!(meta.preamble_used());
        assert_eq!(meta.preamble()[0], 0x49);
        assert_eq!(meta.detected_transfer_syntax(), Some(DetectedSyntax::ExplicitVRLittleEndian));
        assert_eq!(meta.compare(&original), std::cmp::Ordering::Equal);
        assert_eq!(stream.peek(), &[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'O', b'T']);
    }

    #[test]
    fn short_stream_has_no_preamble() {
        let mut stream = InputStream::from_bytes(SHORT_META);
        let mut meta = MetaInfo::new();
        meta.read(&mut stream, &ReadOptions::new()).unwrap();
        assert!(!meta.preamble_used());
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.transfer_syntax().as_deref(), Some(uids::EXPLICIT_VR_LITTLE_ENDIAN));
        assert_eq!(stream.tell(), 40);
    }

    #[test]
    fn wrong_magic_code_reads_from_the_start() {
        let original = validated();
        let bytes = encoded(&original);
        let bare = &bytes[132..];
        assert!(bare.len() > 132);
        assert_ne!(&bare[128..132], b"DICM");

        let mut stream = InputStream::from_bytes(bare);
        let mut meta = MetaInfo::new();
        meta.read(&mut stream, &ReadOptions::new()).unwrap();
        assert!(!meta.preamble_used());
        assert_eq!(meta.compare(&original), std::cmp::Ordering::Equal);
        assert!(stream.eos());
    }

    #[test]
    fn read_byte_by_byte() {
        let original = validated();
        let bytes = encoded(&original);
        let mut stream = InputStream::new();
        let mut meta = MetaInfo::new();
        let options = ReadOptions::new().max_read_length(3);
        for byte in &bytes {
            stream.feed(&[*byte]).unwrap();
            assert_eq!(meta.read(&mut stream, &options).unwrap(), ReadProgress::Suspended);
        }
        stream.finish();
        assert_eq!(meta.read(&mut stream, &options).unwrap(), ReadProgress::Complete);
        assert!(meta.preamble_used());
        assert_eq!(meta.compare(&original), std::cmp::Ordering::Equal);
    }

    #[test]
    fn detected_encoding_wins() {
        let mut stream = InputStream::from_bytes(SHORT_META);
        let mut meta = MetaInfo::new();
        let options = ReadOptions::new().expected(DetectedSyntax::ImplicitVRLittleEndian);
        meta.read(&mut stream, &options).unwrap();
        assert_eq!(meta.detected_transfer_syntax(), Some(DetectedSyntax::ExplicitVRLittleEndian));
        assert_eq!(meta.len(), 2);
    }

    #[test]
    fn wrong_or_missing_group_length_is_tolerated() {
        let mut bytes = SHORT_META.to_vec();
        // declare 4 bytes instead of 28
        bytes[8] = 0x04;
        let mut meta = MetaInfo::new();
        meta.read(&mut InputStream::from_bytes(bytes), &ReadOptions::new())
            .unwrap();
        assert_eq!(meta.len(), 2);

        let mut meta = MetaInfo::new();
        meta.read(&mut InputStream::from_bytes(&SHORT_META[12..]), &ReadOptions::new())
            .unwrap();
        assert_eq!(meta.len(), 1);
        assert!(meta.transfer_syntax().is_some());
    }

    #[test]
    fn empty_meta_writes_nothing() {
        let meta = MetaInfo::new();
        assert_eq!(meta.calc_length(), 0);
        assert!(encoded(&meta).is_empty());
    }
}
