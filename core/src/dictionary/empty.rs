//! A dictionary which knows no attributes.

use super::{DataDictionary, DictionaryEntry};
use crate::header::Tag;

/// An attribute dictionary without entries.
///
/// Every lookup misses,
/// so implicit VR values are all read as `UN`
/// and no value multiplicity is validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmptyDataDictionary;

impl DataDictionary for EmptyDataDictionary {
    fn by_name(&self, _name: &str) -> Option<&DictionaryEntry> {
        None
    }

    fn by_tag(&self, _tag: Tag) -> Option<&DictionaryEntry> {
        None
    }
}
