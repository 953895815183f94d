//! This crate implements the standard DICOM dictionary used by the codec,
//! along with tag and UID constants.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: a dictionary of DICOM attributes,
//!   used by default to resolve the value representation
//!   of elements in implicit VR data sets.
//!   Unknown private attributes resolve to `UN`,
//!   while group length and private creator tags
//!   are always recognized.
//!
//! The dictionary is provided as a singleton
//! behind the unit type [`StandardDataDictionary`].
//!
//! ## Tag and UID constants
//!
//! - [`tags`]: one constant per catalogued attribute
//! - [`uids`]: transfer syntax and SOP class UIDs
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
