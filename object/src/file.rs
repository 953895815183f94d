//! The DICOM file format:
//! file meta information followed by the data set.

use crate::dataset::Dataset;
use crate::item::Item;
use crate::meta::MetaInfo;
use crate::options::{GroupLengthEncoding, ReadOptions, WriteOptions};
use crate::transfer::ReadProgress;
use crate::{
    FixedFileStructureSnafu, MissingTransferSyntaxSnafu, OpenFileSnafu, Result, SaveFileSnafu,
    UnwritableTransferSyntaxSnafu,
};
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::Tag;
use dcmcodec_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use dcmcodec_parser::detect::DetectedSyntax;
use dcmcodec_parser::stream::InputStream;
use dcmcodec_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{ensure, ResultExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::warn;

/// A DICOM file: exactly one [`MetaInfo`] followed by one [`Dataset`].
///
/// The pair is fixed.
/// [`insert_item`](FileFormat::insert_item),
/// [`remove_item`](FileFormat::remove_item) and
/// [`clear`](FileFormat::clear) are rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileFormat {
    meta: MetaInfo,
    dataset: Dataset,
    /// the data set transfer syntax has been looked up
    resolved: bool,
    /// the data set transfer syntax, none to detect it
    dataset_ts: Option<TransferSyntax>,
}

impl FileFormat {
    /// Create a file with empty meta information and data set.
    pub fn new() -> Self {
        FileFormat::default()
    }

    /// Create a file around a data set.
    /// The meta information is filled in on write.
    pub fn from_dataset(dataset: Dataset) -> Self {
        FileFormat {
            dataset,
            ..FileFormat::default()
        }
    }

    pub fn meta(&self) -> &MetaInfo {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut MetaInfo {
        &mut self.meta
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    /// Open and read the file at the given path.
    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        OpenFileOptions::new().open_file(path)
    }

    /// Read a file from a byte source.
    /// The preamble is optional.
    pub fn read_from<R>(from: R) -> Result<Self>
    where
        R: Read + 'static,
    {
        OpenFileOptions::new().from_reader(from)
    }

    /// Read the meta information, then the data set,
    /// resuming a previous partial read.
    ///
    /// The data set is read with the transfer syntax
    /// named by the meta information.
    /// When that is absent or unknown, it is detected from the data set.
    pub fn read(&mut self, stream: &mut InputStream, options: &ReadOptions) -> Result<ReadProgress> {
        if self.meta.read(stream, options)? == ReadProgress::Suspended {
            return Ok(ReadProgress::Suspended);
        }
        if !self.resolved {
            self.dataset_ts = match self.meta.transfer_syntax() {
                Some(uid) => match TransferSyntaxRegistry.get(&uid) {
                    Some(ts) => Some(ts.clone()),
                    None => {
                        warn!("Unknown transfer syntax `{}`, detecting it from the data set", uid);
                        None
                    }
                },
                None => {
                    warn!("No transfer syntax in the meta information, detecting it from the data set");
                    None
                }
            };
            self.resolved = true;
        }
        self.dataset.read(stream, self.dataset_ts.as_ref(), options)
    }

    /// Write the file with the given transfer syntax,
    /// or with the one the data set was read in.
    ///
    /// The meta information is validated first,
    /// as configured by the [`MetaUpdate`](crate::MetaUpdate) of the options.
    /// The first failure aborts the write.
    pub fn write(
        &mut self,
        to: &mut dyn Write,
        ts: Option<&TransferSyntax>,
        options: &WriteOptions,
    ) -> Result<()> {
        let ts = match ts.or(self.dataset.original_transfer_syntax()) {
            Some(ts) => ts.clone(),
            None => return MissingTransferSyntaxSnafu.fail(),
        };
        ensure!(
            ts.encoder().is_some(),
            UnwritableTransferSyntaxSnafu { uid: ts.uid() }
        );
        self.dataset.check_pixel_data(&ts)?;
        self.meta.validate(&ts, &self.dataset, options.meta)?;
        self.meta.write(to)?;
        let instance_length = self.meta.calc_length();
        self.dataset.write_after(to, Some(&ts), options, instance_length)
    }

    /// Write the file to the given path, replacing any existing file.
    pub fn save_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        ts: Option<&TransferSyntax>,
        options: &WriteOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).context(SaveFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);
        self.write(&mut to, ts, options)?;
        to.flush().context(SaveFileSnafu { filename: path })
    }

    /// Always fails: a file holds exactly its meta information and data set.
    pub fn insert_item(&mut self, _item: Item) -> Result<()> {
        FixedFileStructureSnafu {
            operation: "insert_item",
        }
        .fail()
    }

    /// Always fails: a file holds exactly its meta information and data set.
    pub fn remove_item(&mut self, _index: usize) -> Result<Item> {
        FixedFileStructureSnafu {
            operation: "remove_item",
        }
        .fail()
    }

    /// Always fails: a file holds exactly its meta information and data set.
    pub fn clear(&mut self) -> Result<()> {
        FixedFileStructureSnafu { operation: "clear" }.fail()
    }

    /// Prepare the file for another read.
    pub fn transfer_init(&mut self) {
        self.meta.transfer_init();
        self.dataset.transfer_init();
        self.resolved = false;
        self.dataset_ts = None;
    }

    pub fn transfer_end(&mut self) {
        self.meta.transfer_end();
        self.dataset.transfer_end();
    }
}

/// A builder type for opening a DICOM file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dcmcodec_object::OpenFileOptions;
/// let file = OpenFileOptions::new()
///     .read_until(dcmcodec_dictionary_std::tags::PIXEL_DATA)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    read: ReadOptions,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set the operation to read only until the given tag is found.
    ///
    /// The reading process ends right before the first element
    /// of the root data set whose tag is equal to or greater than `tag`.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.read = self.read.read_until(tag);
        self
    }

    /// Set the operation to read all elements of the data set to the end.
    ///
    /// This is the default behavior.
    pub fn read_all(mut self) -> Self {
        self.read = self.read.read_all();
        self
    }

    /// Set the maximum number of value bytes taken from the file at once.
    pub fn max_read_length(mut self, max_read_length: u32) -> Self {
        self.read = self.read.max_read_length(max_read_length);
        self
    }

    /// Set what to do with group length elements once the file was read.
    pub fn group_length(mut self, group_length: GroupLengthEncoding) -> Self {
        self.read = self.read.group_length(group_length);
        self
    }

    /// Set the encoding which the file meta information is expected in.
    pub fn expected(mut self, expected: DetectedSyntax) -> Self {
        self.read = self.read.expected(expected);
        self
    }

    /// Set the data element dictionary to use when reading the file.
    pub fn dictionary<D>(mut self, dictionary: D) -> Self
    where
        D: DataDictionary + 'static,
    {
        self.read = self.read.dictionary(dictionary);
        self
    }

    /// Replace all read options at once.
    pub fn read_options(mut self, read: ReadOptions) -> Self {
        self.read = read;
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<FileFormat>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        self.from_reader(BufReader::new(file))
    }

    /// Read a DICOM file from a byte source.
    pub fn from_reader<R>(self, from: R) -> Result<FileFormat>
    where
        R: Read + 'static,
    {
        let mut stream = InputStream::from_reader(from);
        let mut file = FileFormat::new();
        // a pulling stream blocks until bytes arrive or the source ends
        file.read(&mut stream, &self.read)?;
        Ok(file)
    }
}
