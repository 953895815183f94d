//! The standard attribute dictionary, indexed once on first use.

use crate::tags::ENTRIES;
use dcmcodec_core::dictionary::{
    DataDictionary, DictionaryEntry, TagRange, GENERIC_GROUP_LENGTH, PRIVATE_CREATOR,
};
use dcmcodec_core::header::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static REGISTRY: Lazy<StandardDataDictionaryRegistry> =
    Lazy::new(|| StandardDataDictionaryRegistry::build(ENTRIES));

/// The process wide index behind [`StandardDataDictionary`].
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &REGISTRY
}

/// Lookup tables over a static list of dictionary entries.
///
/// Entries for a single tag are found by hashing.
/// The few entries covering a range of tags, such as the overlay groups,
/// are kept apart and matched one by one.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_alias: HashMap<&'static str, &'static DictionaryEntry>,
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
    ranges: Vec<&'static DictionaryEntry>,
}

impl StandardDataDictionaryRegistry {
    fn build(entries: &'static [DictionaryEntry]) -> Self {
        let mut registry = StandardDataDictionaryRegistry {
            by_alias: HashMap::with_capacity(entries.len() + 1),
            by_tag: HashMap::with_capacity(entries.len()),
            ranges: Vec::new(),
        };
        for entry in entries {
            registry.by_alias.insert(entry.alias, entry);
            match entry.tag {
                TagRange::Single(tag) => {
                    registry.by_tag.insert(tag, entry);
                }
                _ => registry.ranges.push(entry),
            }
        }
        registry
            .by_alias
            .insert(GENERIC_GROUP_LENGTH.alias, &GENERIC_GROUP_LENGTH);
        registry
    }

    fn lookup(&self, tag: Tag) -> Option<&'static DictionaryEntry> {
        if let Some(entry) = self.by_tag.get(&tag) {
            return Some(*entry);
        }
        if let Some(entry) = self.ranges.iter().find(|e| e.tag.contains(tag)) {
            return Some(*entry);
        }
        if tag.is_private_creator() {
            Some(&PRIVATE_CREATOR)
        } else if tag.is_group_length() {
            Some(&GENERIC_GROUP_LENGTH)
        } else {
            None
        }
    }

    /// The number of catalogued attributes.
    pub fn len(&self) -> usize {
        self.by_tag.len() + self.ranges.len()
    }

    /// Whether nothing is catalogued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The standard DICOM attribute dictionary.
///
/// Used by default to resolve the value representation
/// of elements read in implicit VR.
/// Private attributes are unknown,
/// but private creators and group lengths are always recognized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        registry().by_alias.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        registry().lookup(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("standard attribute dictionary")
    }
}
