//! The main data set of a DICOM file or message.
//!
//! A [`Dataset`] is an [`Item`] which remembers
//! the transfer syntax it was read in,
//! detects that transfer syntax when the caller does not know it,
//! and handles the deflated transfer syntax on both read and write.

use crate::item::{Item, Level};
use crate::options::{GroupLengthEncoding, ReadOptions, WriteOptions};
use crate::transfer::{ReadContext, ReadProgress, TransferState, WriteContext};
use crate::{MissingTransferSyntaxSnafu, ReadStreamSnafu, Result, UnsupportedTransferSyntaxSnafu};
use dcmcodec_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use dcmcodec_parser::detect::{check_transfer_syntax, DetectedSyntax};
use dcmcodec_parser::stream::InputStream;
use dcmcodec_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{ensure, ResultExt};
use std::io::Write;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// A DICOM data set.
///
/// Dereferences to the [`Item`] holding its elements.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    item: Item,
    /// the transfer syntax of the last complete read
    original: Option<TransferSyntax>,
    /// the transfer syntax of the read in progress
    current: Option<TransferSyntax>,
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl Deref for Dataset {
    type Target = Item;

    fn deref(&self) -> &Item {
        &self.item
    }
}

impl DerefMut for Dataset {
    fn deref_mut(&mut self) -> &mut Item {
        &mut self.item
    }
}

impl From<Item> for Dataset {
    fn from(item: Item) -> Self {
        Dataset {
            item,
            original: None,
            current: None,
        }
    }
}

/// Map an encoding guessed from the stream to a transfer syntax.
pub(crate) fn detected_transfer_syntax(detected: DetectedSyntax) -> Result<TransferSyntax> {
    let found = detected
        .uid()
        .and_then(|uid| TransferSyntaxRegistry.get(uid).cloned());
    match found {
        Some(ts) => Ok(ts),
        None => UnsupportedTransferSyntaxSnafu {
            uid: format!("{:?}", detected),
        }
        .fail(),
    }
}

impl Dataset {
    /// Create an empty data set.
    pub fn new() -> Self {
        Dataset::default()
    }

    pub fn into_item(self) -> Item {
        self.item
    }

    /// The transfer syntax this data set was read in, if any.
    pub fn original_transfer_syntax(&self) -> Option<&TransferSyntax> {
        self.original.as_ref()
    }

    pub fn set_original_transfer_syntax(&mut self, ts: Option<TransferSyntax>) {
        self.original = ts;
    }

    /// Prepare the data set, and everything in it, for a new read.
    pub fn transfer_init(&mut self) {
        self.current = None;
        self.item.transfer_init();
    }

    /// Close the transfer.
    /// Reading again requires a call to [`transfer_init`](Dataset::transfer_init).
    pub fn transfer_end(&mut self) {
        self.current = None;
        self.item.transfer_end();
    }

    /// Read the data set from the stream,
    /// resuming a previous partial read.
    ///
    /// When no transfer syntax is given,
    /// it is detected from the first element of the data set.
    /// Deflated data sets are inflated as they are read.
    pub fn read(
        &mut self,
        stream: &mut InputStream,
        ts: Option<&TransferSyntax>,
        options: &ReadOptions,
    ) -> Result<ReadProgress> {
        let ts = match self.current.clone() {
            Some(ts) => ts,
            None => {
                if self.item.transfer_state() == TransferState::Ready {
                    return Ok(ReadProgress::Complete);
                }
                let ts = match ts {
                    Some(ts) => ts.clone(),
                    None => match Dataset::detect(stream, options)? {
                        Some(ts) => ts,
                        None => return Ok(ReadProgress::Suspended),
                    },
                };
                ensure!(
                    ts.is_supported(),
                    UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
                );
                if ts.is_deflated() {
                    start_inflate(stream, &ts)?;
                }
                self.current = Some(ts.clone());
                ts
            }
        };

        let ctx = ReadContext::new(&ts, options)?;
        let progress = self.item.read_impl(stream, &ctx, Level::Dataset)?;
        if progress == ReadProgress::Complete {
            if options.group_length != GroupLengthEncoding::NoChange {
                let normalize = WriteOptions::new().group_length(options.group_length);
                self.item.compute(&ts, &normalize, 0, 0, true)?;
            }
            self.current = None;
            self.original = Some(ts);
        }
        Ok(progress)
    }

    /// Guess the transfer syntax from the first bytes of the data set.
    /// Gives none when too few bytes are available yet.
    fn detect(stream: &mut InputStream, options: &ReadOptions) -> Result<Option<TransferSyntax>> {
        let avail = stream.fill(6).context(ReadStreamSnafu)?;
        if avail < 6 && !stream.is_finished() {
            return Ok(None);
        }
        let detected = check_transfer_syntax(stream, &*options.dictionary).context(ReadStreamSnafu)?;
        let ts = detected_transfer_syntax(detected)?;
        debug!("Data set transfer syntax detected as {}", ts.name());
        Ok(Some(ts))
    }

    /// Write the data set, without file meta information.
    ///
    /// Without a transfer syntax
    /// the one the data set was read in is used.
    /// Group lengths and padding are brought up to date first.
    pub fn write(
        &mut self,
        to: &mut dyn Write,
        ts: Option<&TransferSyntax>,
        options: &WriteOptions,
    ) -> Result<()> {
        if let Some(ts) = ts.or(self.original.as_ref()) {
            self.item.check_pixel_data(ts)?;
        }
        self.write_after(to, ts, options, 0)
    }

    /// Write the data set after `instance_length` bytes
    /// of file meta information,
    /// which count for the trailing padding.
    /// Pixel data must have been checked against `ts` by the caller.
    pub(crate) fn write_after(
        &mut self,
        to: &mut dyn Write,
        ts: Option<&TransferSyntax>,
        options: &WriteOptions,
        instance_length: u32,
    ) -> Result<()> {
        let ts = match ts.or(self.original.as_ref()) {
            Some(ts) => ts.clone(),
            None => return MissingTransferSyntaxSnafu.fail(),
        };
        let ctx = WriteContext::new(&ts, options.encoding)?;
        self.item
            .compute(&ts, options, options.padlen, instance_length, true)?;
        if ts.is_deflated() {
            write_deflated(&self.item, to, &ctx)
        } else {
            self.item.write_content(to, &ctx)
        }
    }
}

#[cfg(feature = "deflate")]
fn start_inflate(stream: &mut InputStream, _ts: &TransferSyntax) -> Result<()> {
    stream.start_inflate().context(ReadStreamSnafu)
}

#[cfg(not(feature = "deflate"))]
fn start_inflate(_stream: &mut InputStream, ts: &TransferSyntax) -> Result<()> {
    UnsupportedTransferSyntaxSnafu { uid: ts.uid() }.fail()
}

#[cfg(feature = "deflate")]
fn write_deflated(item: &Item, to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
    use crate::FinishDeflateSnafu;
    use flate2::write::DeflateEncoder;
    use flate2::Compression;

    let mut encoder = DeflateEncoder::new(to, Compression::default());
    item.write_content(&mut encoder, ctx)?;
    encoder.finish().context(FinishDeflateSnafu)?;
    Ok(())
}

#[cfg(not(feature = "deflate"))]
fn write_deflated(_item: &Item, _to: &mut dyn Write, ctx: &WriteContext) -> Result<()> {
    UnsupportedTransferSyntaxSnafu { uid: ctx.ts.uid() }.fail()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Condition, Sequence};
    use dcmcodec_dictionary_std::tags;
    use dcmcodec_transfer_syntax_registry::entries::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };
    use std::cmp::Ordering;

    fn sample() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.put_string(tags::PATIENT_NAME, "Doe^John").unwrap();
        dataset.put_string(tags::PATIENT_ID, "12345").unwrap();
        dataset.put_u16(tags::ROWS, 512).unwrap();
        dataset.put_u16(tags::COLUMNS, 256).unwrap();
        let mut referenced = Item::new();
        referenced
            .put_string(tags::REFERENCED_SOP_INSTANCE_UID, "1.2.3.4")
            .unwrap();
        dataset
            .insert(
                Sequence::with_items(tags::REFERENCED_IMAGE_SEQUENCE, vec![referenced]),
                false,
            )
            .unwrap();
        dataset
    }

    fn encode(dataset: &mut Dataset, ts: &TransferSyntax) -> Vec<u8> {
        let mut out = Vec::new();
        dataset
            .write(&mut out, Some(ts), &WriteOptions::new().group_length(GroupLengthEncoding::NoChange))
            .unwrap();
        out
    }

    #[test]
    fn detects_the_transfer_syntax() {
        for ts in &[
            &IMPLICIT_VR_LITTLE_ENDIAN,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            &EXPLICIT_VR_BIG_ENDIAN,
        ] {
            let mut original = sample();
            let bytes = encode(&mut original, ts);

            let mut stream = InputStream::from_bytes(bytes);
            let mut read = Dataset::new();
            assert_eq!(
                read.read(&mut stream, None, &ReadOptions::new()).unwrap(),
                ReadProgress::Complete
            );
            assert_eq!(read.original_transfer_syntax().map(|ts| ts.uid()), Some(ts.uid()));
            assert_eq!(read.compare(&original), Ordering::Equal);
        }
    }

    #[test]
    fn detection_waits_for_enough_bytes() {
        let bytes = encode(&mut sample(), &EXPLICIT_VR_LITTLE_ENDIAN);
        let mut stream = InputStream::new();
        let mut dataset = Dataset::new();
        stream.feed(&bytes[..4]).unwrap();
        assert_eq!(
            dataset.read(&mut stream, None, &ReadOptions::new()).unwrap(),
            ReadProgress::Suspended
        );
        assert_eq!(dataset.original_transfer_syntax(), None);
        stream.feed(&bytes[4..]).unwrap();
        stream.finish();
        assert_eq!(
            dataset.read(&mut stream, None, &ReadOptions::new()).unwrap(),
            ReadProgress::Complete
        );
        assert_eq!(dataset.original_transfer_syntax(), Some(&EXPLICIT_VR_LITTLE_ENDIAN));
    }

    #[test]
    fn writes_with_the_original_transfer_syntax() {
        let mut dataset = sample();
        let err = dataset
            .write(&mut Vec::new(), None, &WriteOptions::new())
            .unwrap_err();
        assert_eq!(err.condition(), Condition::IllegalCall);

        let bytes = encode(&mut sample(), &EXPLICIT_VR_BIG_ENDIAN);
        let mut read = Dataset::new();
        read.read(
            &mut InputStream::from_bytes(bytes.clone()),
            Some(&EXPLICIT_VR_BIG_ENDIAN),
            &ReadOptions::new(),
        )
        .unwrap();
        let mut again = Vec::new();
        read.write(&mut again, None, &WriteOptions::new().group_length(GroupLengthEncoding::NoChange))
            .unwrap();
        assert_eq!(again, bytes);
    }

    #[test]
    fn reading_stops_at_a_tag() {
        let bytes = encode(&mut sample(), &EXPLICIT_VR_LITTLE_ENDIAN);
        let mut stream = InputStream::from_bytes(bytes);
        let mut dataset = Dataset::new();
        let options = ReadOptions::new().read_until(tags::ROWS);
        dataset
            .read(&mut stream, Some(&EXPLICIT_VR_LITTLE_ENDIAN), &options)
            .unwrap();
        assert!(dataset.get(tags::PATIENT_ID).is_some());
        assert!(dataset.get(tags::REFERENCED_IMAGE_SEQUENCE).is_some());
        assert!(dataset.get(tags::ROWS).is_none());
        // ROWS (0028,0010): tag, VR US, length 2
        assert_eq!(&stream.peek()[..8], &[0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00]);
    }

    #[test]
    fn group_lengths_dropped_on_read() {
        let mut original = sample();
        let mut bytes = Vec::new();
        original
            .write(
                &mut bytes,
                Some(&EXPLICIT_VR_LITTLE_ENDIAN),
                &WriteOptions::new().group_length(GroupLengthEncoding::WithGroupLength),
            )
            .unwrap();
        assert!(original.get(tags::ROWS.group_length_tag()).is_some());

        let mut read = Dataset::new();
        read.read(
            &mut InputStream::from_bytes(bytes),
            Some(&EXPLICIT_VR_LITTLE_ENDIAN),
            &ReadOptions::new().group_length(GroupLengthEncoding::WithoutGroupLength),
        )
        .unwrap();
        assert!(read.iter().all(|o| !o.tag().is_group_length()));
        assert_eq!(read.len(), 5);
    }

    #[test]
    fn ended_transfer_must_be_reinitialized() {
        let bytes = encode(&mut sample(), &IMPLICIT_VR_LITTLE_ENDIAN);
        let mut dataset = Dataset::new();
        dataset.transfer_end();
        let err = dataset
            .read(
                &mut InputStream::from_bytes(bytes.clone()),
                Some(&IMPLICIT_VR_LITTLE_ENDIAN),
                &ReadOptions::new(),
            )
            .unwrap_err();
        assert_eq!(err.condition(), Condition::IllegalCall);

        dataset.transfer_init();
        assert_eq!(
            dataset
                .read(
                    &mut InputStream::from_bytes(bytes),
                    Some(&IMPLICIT_VR_LITTLE_ENDIAN),
                    &ReadOptions::new(),
                )
                .unwrap(),
            ReadProgress::Complete
        );
        assert_eq!(dataset.len(), 5);
    }

    #[cfg(feature = "deflate")]
    #[test]
    fn deflated_round_trip() {
        use crate::{Element, VR};
        use dcmcodec_transfer_syntax_registry::entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN;

        let mut original = sample();
        original
            .insert(Element::with_string(tags::MODALITY, VR::CS, "OT").unwrap(), false)
            .unwrap();
        let bytes = encode(&mut original, &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);
        let plain = encode(&mut original.clone(), &EXPLICIT_VR_LITTLE_ENDIAN);
        assert_ne!(bytes, plain);

        let mut read = Dataset::new();
        read.read(
            &mut InputStream::from_bytes(bytes),
            Some(&DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN),
            &ReadOptions::new(),
        )
        .unwrap();
        assert_eq!(read.compare(&original), Ordering::Equal);
    }
}
