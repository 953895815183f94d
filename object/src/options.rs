//! Options for reading and writing objects.

use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::Tag;
use dcmcodec_dictionary_std::StandardDataDictionary;
use dcmcodec_parser::detect::DetectedSyntax;
use std::fmt;
use std::sync::Arc;

/// How the length of sequences and items is encoded.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Default)]
pub enum EncodingType {
    /// Every sequence and item states its length in bytes.
    #[default]
    ExplicitLength,
    /// Sequences and items are of undefined length,
    /// closed by a delimitation item.
    UndefinedLength,
}

/// What to do with group length elements `(gggg,0000)`.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Default)]
pub enum GroupLengthEncoding {
    /// Leave group length elements as they are.
    #[default]
    NoChange,
    /// Add a group length element to every group.
    WithGroupLength,
    /// Remove all group length elements.
    WithoutGroupLength,
    /// Recompute the value of existing group length elements.
    Recalculate,
}

/// What to do with Data Set Trailing Padding `(FFFC,FFFC)`.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Default)]
pub enum PaddingEncoding {
    /// Leave padding elements as they are.
    #[default]
    NoChange,
    /// Remove all padding elements.
    WithoutPadding,
    /// Pad data sets and items to a multiple of the padding length.
    WithPadding,
}

/// How the file meta information is brought up to date on write.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Default)]
pub enum MetaUpdate {
    /// Fill in mandatory attributes which are absent or empty.
    /// The transfer syntax and implementation identifiers
    /// are always refreshed.
    #[default]
    FillMissing,
    /// As `FillMissing`, and copy the SOP class and instance UIDs
    /// from the data set even if they are already present.
    UpdateFromDataset,
    /// Discard the existing meta information and create it anew.
    CreateNew,
    /// Write the meta information as it is,
    /// apart from its group length.
    Keep,
}

/// Options for reading data sets and files.
///
/// # Example
///
/// ```
/// # use dcmcodec_object::{GroupLengthEncoding, ReadOptions};
/// let options = ReadOptions::new()
///     .max_read_length(1024)
///     .group_length(GroupLengthEncoding::WithoutGroupLength)
///     .read_until(dcmcodec_dictionary_std::tags::PIXEL_DATA);
/// ```
#[derive(Clone)]
#[non_exhaustive]
pub struct ReadOptions {
    pub(crate) max_read_length: u32,
    pub(crate) group_length: GroupLengthEncoding,
    pub(crate) stop_at: Option<Tag>,
    pub(crate) expected: Option<DetectedSyntax>,
    pub(crate) dictionary: Arc<dyn DataDictionary>,
}

impl fmt::Debug for ReadOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ReadOptions")
            .field("max_read_length", &self.max_read_length)
            .field("group_length", &self.group_length)
            .field("stop_at", &self.stop_at)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            max_read_length: 4096,
            group_length: GroupLengthEncoding::NoChange,
            stop_at: None,
            expected: None,
            dictionary: Arc::new(StandardDataDictionary),
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        ReadOptions::default()
    }

    /// Set the maximum number of value bytes
    /// taken from the stream at once.
    pub fn max_read_length(mut self, max_read_length: u32) -> Self {
        self.max_read_length = max_read_length;
        self
    }

    /// Set what to do with group length elements
    /// once the data set was read.
    pub fn group_length(mut self, group_length: GroupLengthEncoding) -> Self {
        self.group_length = group_length;
        self
    }

    /// Stop reading the data set before the first top level element
    /// whose tag is equal to or greater than `tag`.
    /// The remaining bytes are left in the stream.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.stop_at = Some(tag);
        self
    }

    /// Read all elements of the data set to the end.
    ///
    /// This is the default behavior.
    pub fn read_all(mut self) -> Self {
        self.stop_at = None;
        self
    }

    /// Set the encoding which the file meta information is expected in.
    /// When the encoding detected from the stream
    /// disagrees on explicit VR, the detected one is used.
    pub fn expected(mut self, expected: DetectedSyntax) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Set the data dictionary
    /// used to resolve value representations of implicit VR data sets.
    pub fn dictionary<D>(mut self, dictionary: D) -> Self
    where
        D: DataDictionary + 'static,
    {
        self.dictionary = Arc::new(dictionary);
        self
    }
}

/// Options for writing data sets and files.
#[derive(Debug, Copy, Clone, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
    pub(crate) encoding: EncodingType,
    pub(crate) group_length: GroupLengthEncoding,
    pub(crate) padding: PaddingEncoding,
    pub(crate) padlen: u32,
    pub(crate) sub_padlen: u32,
    pub(crate) meta: MetaUpdate,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            encoding: EncodingType::ExplicitLength,
            group_length: GroupLengthEncoding::Recalculate,
            padding: PaddingEncoding::NoChange,
            padlen: 0,
            sub_padlen: 0,
            meta: MetaUpdate::FillMissing,
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        WriteOptions::default()
    }

    /// Set how sequence and item lengths are encoded.
    pub fn encoding(mut self, encoding: EncodingType) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set what to do with group length elements.
    pub fn group_length(mut self, group_length: GroupLengthEncoding) -> Self {
        self.group_length = group_length;
        self
    }

    /// Pad the data set to a multiple of `padlen` bytes
    /// and each sequence item to a multiple of `sub_padlen` bytes.
    /// Both lengths must be even.
    pub fn with_padding(mut self, padlen: u32, sub_padlen: u32) -> Self {
        self.padding = PaddingEncoding::WithPadding;
        self.padlen = padlen;
        self.sub_padlen = sub_padlen;
        self
    }

    /// Remove any Data Set Trailing Padding.
    pub fn without_padding(mut self) -> Self {
        self.padding = PaddingEncoding::WithoutPadding;
        self
    }

    /// Set how the file meta information is brought up to date.
    pub fn meta_update(mut self, meta: MetaUpdate) -> Self {
        self.meta = meta;
        self
    }
}
