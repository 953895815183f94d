#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains the object model of the dcmcodec DICOM data set codec:
//! elements, items and sequences,
//! the file meta information and the DICOM file format as a whole.
//!
//! Objects are read from an [`InputStream`],
//! which either pulls its bytes from a reader
//! or is fed with bytes as they arrive.
//! Reading is resumable:
//! when a pushed stream runs out of bytes,
//! `read` reports [`ReadProgress::Suspended`]
//! and continues where it left off once it is called again
//! after more bytes were fed.
//!
//! # Examples
//!
//! Open a file and fetch an attribute:
//!
//! ```no_run
//! use dcmcodec_dictionary_std::tags;
//! use dcmcodec_object::FileFormat;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let file = FileFormat::open_file("0001.dcm")?;
//! let patient_name = file.dataset().get_string(tags::PATIENT_NAME)?;
//! # Ok(())
//! # }
//! ```
//!
//! Build a data set from scratch and save it:
//!
//! ```no_run
//! use dcmcodec_dictionary_std::{tags, uids};
//! use dcmcodec_object::{Dataset, FileFormat, WriteOptions};
//! use dcmcodec_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut dataset = Dataset::new();
//! dataset.put_string(tags::SOP_CLASS_UID, uids::SECONDARY_CAPTURE_IMAGE_STORAGE)?;
//! dataset.put_string(tags::PATIENT_NAME, "Doe^John")?;
//!
//! // the file meta information is filled in on write
//! let mut file = FileFormat::from_dataset(dataset);
//! file.save_file("0001_new.dcm", Some(&EXPLICIT_VR_LITTLE_ENDIAN), &WriteOptions::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! Feed a data set in chunks, as it arrives from the network:
//!
//! ```
//! use dcmcodec_object::{Dataset, InputStream, ReadOptions, ReadProgress};
//! use dcmcodec_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN;
//! # fn foo(chunks: Vec<Vec<u8>>) -> Result<(), Box<dyn std::error::Error>> {
//! let options = ReadOptions::new();
//! let mut stream = InputStream::new();
//! let mut dataset = Dataset::new();
//! for chunk in chunks {
//!     stream.feed(&chunk)?;
//!     dataset.read(&mut stream, Some(&IMPLICIT_VR_LITTLE_ENDIAN), &options)?;
//! }
//! stream.finish();
//! assert_eq!(
//!     dataset.read(&mut stream, Some(&IMPLICIT_VR_LITTLE_ENDIAN), &options)?,
//!     ReadProgress::Complete,
//! );
//! # Ok(())
//! # }
//! ```
pub mod dataset;
pub mod element;
pub mod file;
pub mod item;
pub mod meta;
pub mod options;
pub mod pixeldata;
pub mod sequence;
pub mod transfer;
pub mod uid;

pub use crate::dataset::Dataset;
pub use crate::element::offset::{RecordHandle, UnsignedLongOffset};
pub use crate::element::Element;
pub use crate::file::{FileFormat, OpenFileOptions};
pub use crate::item::{Item, Object};
pub use crate::meta::MetaInfo;
pub use crate::options::{
    EncodingType, GroupLengthEncoding, MetaUpdate, PaddingEncoding, ReadOptions, WriteOptions,
};
pub use crate::pixeldata::{PixelData, PixelItem, PixelSequence};
pub use crate::sequence::Sequence;
pub use crate::transfer::{ReadProgress, TransferState};
pub use dcmcodec_core::{Tag, VR};
pub use dcmcodec_parser::stream::InputStream;

use dcmcodec_core::dictionary::{VmRange, VmRangeError};
use dcmcodec_encoding::encode;
use dcmcodec_parser::{header, stream};
use snafu::{Backtrace, Snafu};
use std::path::PathBuf;

/// The implementation class UID of this library.
///
/// Automatically generated as per the standard, part 5, section B.2.
///
/// This UID is subject to changes in future versions.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.185634174076526423478796292893221867296";

/// The implementation version name of this library.
///
/// This name is subject to changes in future versions.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMCODEC-0.1";

/// The broad class of an [`Error`],
/// which tells the caller whether it may continue past it.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Condition {
    /// Malformed length or structure.
    /// Recoverable by truncation or by treating the element as absent.
    CorruptedData,
    /// A method was called on an object in the wrong state,
    /// or on the wrong kind of object.
    IllegalCall,
    /// A bad argument.
    IllegalParameter,
    /// The value representation cannot be used here.
    InvalidVr,
    /// The underlying source or destination failed.
    InvalidStream,
    /// An element with the same tag is already present.
    DoubledTag,
    /// A string value holds characters outside of its character set.
    InvalidCharacter,
    /// The value multiplicity is outside of the admitted range.
    VmViolated,
    /// A string value component is longer than its VR permits.
    MaxLengthViolated,
}

/// An error which may occur while reading, writing or manipulating objects.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    SaveFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read from the input stream"))]
    ReadStream { source: stream::Error },
    #[snafu(display("Could not read element header"))]
    ReadHeader { source: header::Error },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Item tag found outside of a sequence"))]
    ItemOutsideSequence { backtrace: Backtrace },
    #[snafu(display("Pixel data fragment of undefined length in {}", tag))]
    UndefinedFragmentLength { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Object is not initialized for reading"))]
    NotInitialized { backtrace: Backtrace },
    #[snafu(display("Illegal call to `{}` on a file format", operation))]
    FixedFileStructure {
        operation: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Padding lengths must be even, found {} and {}",
        padlen,
        sub_padlen
    ))]
    OddPadding {
        padlen: u32,
        sub_padlen: u32,
        backtrace: Backtrace,
    },
    #[snafu(display("Element {} is already present", tag))]
    DoubledTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Cannot access {} {} as {}", vr, tag, requested))]
    VrMismatch {
        tag: Tag,
        vr: VR,
        requested: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Element {} cannot be created with VR {}", tag, vr))]
    InvalidVr {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },
    #[snafu(display("No such element {}", tag))]
    NoSuchElement { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Value index {} out of bounds for {} (VM {})", pos, tag, vm))]
    ValueIndex {
        tag: Tag,
        pos: usize,
        vm: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Value of {} is not loaded", tag))]
    NoValue { tag: Tag, backtrace: Backtrace },
    #[snafu(display(
        "Value of {} given with {} bytes, {} were announced",
        tag,
        given,
        expected
    ))]
    ShortValue {
        tag: Tag,
        expected: u32,
        given: usize,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Length {} of {} {} is not a multiple of {}",
        len,
        vr,
        tag,
        size
    ))]
    ValueLength {
        tag: Tag,
        vr: VR,
        len: u32,
        size: usize,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Value {} of {} {} is {} bytes long, at most {} are allowed",
        pos,
        vr,
        tag,
        len,
        max
    ))]
    ValueTooLong {
        tag: Tag,
        vr: VR,
        pos: usize,
        len: usize,
        max: u32,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not parse `{}` of {} as a number", value, tag))]
    ParseNumber {
        tag: Tag,
        value: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid character at position {}", position))]
    InvalidCharacter {
        position: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Value multiplicity {} is not within {}", vm, range))]
    VmViolated {
        vm: usize,
        range: VmRange,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid value multiplicity range"))]
    InvalidVmRange { source: VmRangeError },
    #[snafu(display("Value {} is {} characters long, at most {} are allowed", pos, len, max))]
    MaxLengthViolated {
        pos: usize,
        len: usize,
        max: u32,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not write element header"))]
    WriteHeader { source: encode::Error },
    #[snafu(display("Could not write value of {}", tag))]
    WriteValue {
        tag: Tag,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write file preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not finish the deflated data set"))]
    FinishDeflate {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("No transfer syntax to write the data set with"))]
    MissingTransferSyntax { backtrace: Backtrace },
    #[snafu(display("Cannot write with transfer syntax `{}`", uid))]
    UnwritableTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Pixel data in {} cannot be written with transfer syntax `{}`", from, to))]
    PixelRepresentation {
        from: String,
        to: String,
        backtrace: Backtrace,
    },
}

impl Error {
    /// The broad class of this error.
    pub fn condition(&self) -> Condition {
        match self {
            Error::OpenFile { .. }
            | Error::SaveFile { .. }
            | Error::ReadStream { .. }
            | Error::WriteValue { .. }
            | Error::WritePreamble { .. }
            | Error::WriteMagicCode { .. }
            | Error::FinishDeflate { .. } => Condition::InvalidStream,
            Error::ReadHeader { source } => match source {
                header::Error::UnsupportedTransferSyntax { .. } => Condition::IllegalParameter,
                header::Error::FetchHeader { .. } => Condition::InvalidStream,
                _ => Condition::CorruptedData,
            },
            Error::WriteHeader { source } => match source {
                encode::Error::LengthOverflow { .. } => Condition::CorruptedData,
                _ => Condition::InvalidStream,
            },
            Error::ItemOutsideSequence { .. }
            | Error::UndefinedFragmentLength { .. }
            | Error::ShortValue { .. }
            | Error::ValueLength { .. }
            | Error::ValueTooLong { .. }
            | Error::ParseNumber { .. } => Condition::CorruptedData,
            Error::NotInitialized { .. }
            | Error::FixedFileStructure { .. }
            | Error::OddPadding { .. }
            | Error::VrMismatch { .. }
            | Error::NoValue { .. }
            | Error::MissingTransferSyntax { .. }
            | Error::UnwritableTransferSyntax { .. }
            | Error::PixelRepresentation { .. } => Condition::IllegalCall,
            Error::UnsupportedTransferSyntax { .. }
            | Error::NoSuchElement { .. }
            | Error::ValueIndex { .. }
            | Error::InvalidVmRange { .. } => Condition::IllegalParameter,
            Error::InvalidVr { .. } => Condition::InvalidVr,
            Error::DoubledTag { .. } => Condition::DoubledTag,
            Error::InvalidCharacter { .. } => Condition::InvalidCharacter,
            Error::VmViolated { .. } => Condition::VmViolated,
            Error::MaxLengthViolated { .. } => Condition::MaxLengthViolated,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
