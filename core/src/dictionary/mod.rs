//! This module contains the concept of a DICOM data dictionary.
//!
//! The codec only consumes dictionaries through the [`DataDictionary`] trait:
//! a read-only lookup from a tag (or an alias) to the attribute's
//! typical value representation and value multiplicity.
//! It is used to resolve value representations of implicit VR streams
//! and to validate value multiplicity.
//! The standard dictionary lives in a separate crate,
//! so that any other source of attribute definitions can be injected.

pub mod empty;

use crate::header::{Tag, VR};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::num::ParseIntError;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

/// Error type for failures parsing a value multiplicity range.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum VmRangeError {
    /// The range string is empty.
    #[snafu(display("Empty value multiplicity"))]
    Empty { backtrace: Backtrace },
    /// A bound of the range could not be parsed.
    #[snafu(display("Invalid value multiplicity bound: {}", source))]
    InvalidBound {
        source: ParseIntError,
        backtrace: Backtrace,
    },
    /// The lower bound is greater than the upper bound
    /// or the step is zero.
    #[snafu(display("Inconsistent value multiplicity range `{}`", text))]
    Inconsistent { text: String, backtrace: Backtrace },
}

/// A value multiplicity range, such as `1`, `1-3`, `1-n` or `2-2n`.
///
/// A multiplicity `v` is admitted when `min <= v`,
/// `v <= max` when `max` is bounded,
/// and `v` is a multiple of `step`.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct VmRange {
    /// the minimum number of values
    pub min: u32,
    /// the maximum number of values, `None` for `n`
    pub max: Option<u32>,
    /// the value count must be a multiple of this number
    pub step: u32,
}

impl VmRange {
    /// A range admitting exactly `n` values.
    pub const fn exactly(n: u32) -> Self {
        VmRange {
            min: n,
            max: Some(n),
            step: 1,
        }
    }

    /// A range admitting between `min` and `max` values.
    pub const fn between(min: u32, max: u32) -> Self {
        VmRange {
            min,
            max: Some(max),
            step: 1,
        }
    }

    /// A range admitting `min` or more values, in multiples of `step`.
    pub const fn unbounded(min: u32, step: u32) -> Self {
        VmRange {
            min,
            max: None,
            step,
        }
    }

    /// Check whether the given value multiplicity is admitted.
    pub fn contains(&self, vm: u32) -> bool {
        vm >= self.min && self.max.map(|max| vm <= max).unwrap_or(true) && vm % self.step == 0
    }
}

impl FromStr for VmRange {
    type Err = VmRangeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        ensure!(!text.is_empty(), EmptySnafu);
        let (min, max) = match text.split_once('-') {
            None => (text, None),
            Some((min, max)) => (min, Some(max)),
        };
        let min: u32 = min.trim().parse().context(InvalidBoundSnafu)?;
        let range = match max.map(str::trim) {
            None => VmRange::exactly(min),
            Some(max) if max.ends_with('n') => {
                let step = &max[..max.len() - 1];
                let step = if step.is_empty() {
                    1
                } else {
                    step.parse().context(InvalidBoundSnafu)?
                };
                VmRange::unbounded(min, step)
            }
            Some(max) => VmRange::between(min, max.parse().context(InvalidBoundSnafu)?),
        };
        ensure!(
            range.step > 0 && range.max.map(|max| max >= range.min).unwrap_or(true),
            InconsistentSnafu { text }
        );
        Ok(range)
    }
}

impl fmt::Display for VmRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.max, self.step) {
            (Some(max), _) if max == self.min => write!(f, "{}", self.min),
            (Some(max), _) => write!(f, "{}-{}", self.min, max),
            (None, 1) => write!(f, "{}-n", self.min),
            (None, step) => write!(f, "{}-{}n", self.min, step),
        }
    }
}

/// The range of tags covered by a dictionary entry.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`
    GroupLength,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns a zeroed out tag
    /// (equivalent to _FileMetaInformationGroupLength_)
    /// if it is a group length tag.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) | TagRange::Group100(tag) | TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
        }
    }

    /// Check whether the given tag is covered by this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => t.0 == tag.0 & 0xFF00 && t.1 == tag.1,
            TagRange::Element100(t) => t.0 == tag.0 && t.1 == tag.1 & 0xFF00,
            TagRange::GroupLength => tag.1 == 0,
        }
    }
}

/// A dictionary entry, describing one DICOM attribute (or a range of them).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DictionaryEntry {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase
    pub alias: &'static str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
    /// The value multiplicity of the attribute
    pub vm: VmRange,
}

impl DictionaryEntry {
    /// Create a dictionary entry for a single tag.
    pub const fn new(tag: Tag, alias: &'static str, vr: VR, vm: VmRange) -> Self {
        DictionaryEntry {
            tag: TagRange::Single(tag),
            alias,
            vr,
            vm,
        }
    }
}

/// The entry returned for any group length tag `(gggg,0000)`.
pub static GENERIC_GROUP_LENGTH: DictionaryEntry = DictionaryEntry {
    tag: TagRange::GroupLength,
    alias: "GenericGroupLength",
    vr: VR::UL,
    vm: VmRange::exactly(1),
};

/// The entry returned for any private creator tag `(gggg,0010-00FF)`.
pub static PRIVATE_CREATOR: DictionaryEntry = DictionaryEntry {
    tag: TagRange::Element100(Tag(0x0009, 0x0000)),
    alias: "PrivateCreator",
    vr: VR::LO,
    vm: VmRange::exactly(1),
};

/** Type trait for a dictionary of DICOM attributes. Attribute dictionaries provide the
 * means to convert a tag to an alias and vice versa, as well as a form of retrieving
 * additional information about the attribute.
 *
 * The methods herein have no generic parameters, so as to enable being
 * used as a trait object.
 */
pub trait DataDictionary {
    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are usually case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry>;

    /// Check whether the dictionary knows about the given tag.
    fn contains(&self, tag: Tag) -> bool {
        self.by_tag(tag).is_some()
    }

    /// Resolve the value representation of the given tag,
    /// `UN` if the dictionary does not know it.
    fn vr_of(&self, tag: Tag) -> VR {
        self.by_tag(tag).map(|e| e.vr).unwrap_or(VR::UN)
    }

    /// Fetch a tag by its alias.
    fn tag_by_name(&self, name: &str) -> Option<Tag> {
        self.by_name(name)
            .and_then(|e| match e.tag {
                TagRange::Single(tag) => Some(tag),
                _ => None,
            })
    }
}

impl<T: ?Sized + DataDictionary> DataDictionary for &T {
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }
}

impl<T: ?Sized + DataDictionary> DataDictionary for Box<T> {
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }
}

impl<T: ?Sized + DataDictionary> DataDictionary for Rc<T> {
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }
}

impl<T: ?Sized + DataDictionary> DataDictionary for Arc<T> {
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }
}

/// Parse a tag in the textual form `(gggg,eeee)` or `gggg,eeee`.
pub fn parse_tag(text: &str) -> Option<Tag> {
    let text = text.trim();
    let text = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);
    let (g, e) = text.split_once(',')?;
    let g = u16::from_str_radix(g.trim(), 16).ok()?;
    let e = u16::from_str_radix(e.trim(), 16).ok()?;
    Some(Tag(g, e))
}

/// Look up the tag of an alias, also admitting the textual tag form.
pub fn resolve_tag<D: ?Sized + DataDictionary>(dict: &D, name: &str) -> Option<Tag> {
    parse_tag(name).or_else(|| dict.tag_by_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vm_ranges() {
        assert_eq!("1".parse::<VmRange>().unwrap(), VmRange::exactly(1));
        assert_eq!("1-3".parse::<VmRange>().unwrap(), VmRange::between(1, 3));
        assert_eq!("1-n".parse::<VmRange>().unwrap(), VmRange::unbounded(1, 1));
        assert_eq!("2-2n".parse::<VmRange>().unwrap(), VmRange::unbounded(2, 2));
        assert_eq!("3-3n".parse::<VmRange>().unwrap(), VmRange::unbounded(3, 3));
        assert!("".parse::<VmRange>().is_err());
        assert!("n".parse::<VmRange>().is_err());
        assert!("3-1".parse::<VmRange>().is_err());
        assert!("1-0n".parse::<VmRange>().is_err());
    }

    #[test]
    fn vm_range_membership() {
        let r: VmRange = "2-2n".parse().unwrap();
        assert!(!r.contains(1));
        assert!(r.contains(2));
        assert!(!r.contains(3));
        assert!(r.contains(8));
        let r = VmRange::between(1, 3);
        assert!(!r.contains(0));
        assert!(r.contains(3));
        assert!(!r.contains(4));
    }

    #[test]
    fn vm_range_display() {
        for text in &["1", "1-3", "1-n", "2-2n"] {
            assert_eq!(text.parse::<VmRange>().unwrap().to_string(), *text);
        }
    }

    #[test]
    fn tag_range_contains() {
        assert!(TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6002, 0x3000)));
        assert!(!TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6102, 0x3000)));
        assert!(TagRange::Element100(Tag(0x0020, 0x3100)).contains(Tag(0x0020, 0x31FF)));
        assert!(TagRange::GroupLength.contains(Tag(0x0028, 0x0000)));
    }

    #[test]
    fn parse_textual_tags() {
        assert_eq!(parse_tag("(0010,0020)"), Some(Tag(0x0010, 0x0020)));
        assert_eq!(parse_tag("7FE0,0010"), Some(Tag(0x7FE0, 0x0010)));
        assert_eq!(parse_tag("PatientName"), None);
    }
}
