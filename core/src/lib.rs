#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmcodec,
//! containing the concepts and data types shared by every layer of the
//! DICOM data set codec.
//!
//! Modules:
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   tags, value representations and value lengths.
//! - [`vr`] holds the static capability record of each value representation,
//!   which drives verification, padding and byte swapping of values.
//! - [`dictionary`] is the lookup interface from a tag or alias
//!   to the attribute's typical VR and value multiplicity.
//! - [`matching`] implements the attribute matching rules of DICOM queries.

pub mod dictionary;
pub mod header;
pub mod matching;
pub mod vr;

pub use dictionary::DataDictionary;
pub use header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
pub use matching::AttributeMatching;
pub use vr::{VrCategory, VrInfo};

// dates and times of element values are chrono types
pub use chrono;
