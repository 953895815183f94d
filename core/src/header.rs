//! The parts of a data element header:
//! attribute tag, value representation and value length,
//! along with the headers of sequence items and delimiters.

use snafu::{Backtrace, Snafu};
use std::fmt;
use std::str::FromStr;

/// Error type for headers in group `FFFE`
/// which are not a valid item or delimiter.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// The tag is neither Item, Item Delimitation Item
    /// nor Sequence Delimitation Item.
    #[snafu(display("Unexpected tag {} in a sequence", tag))]
    UnexpectedTag {
        /// the tag found
        tag: Tag,
        /// where it was found
        backtrace: Backtrace,
    },
    /// An item delimiter announced a value.
    #[snafu(display("Item delimiter with length {}", len))]
    UnexpectedDelimiterLength {
        /// the length found
        len: Length,
        /// where it was found
        backtrace: Backtrace,
    },
}

/// The header of a data element as found in the stream.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DataElementHeader {
    /// attribute tag
    pub tag: Tag,
    /// value representation,
    /// from the stream or from the dictionary for implicit VR
    pub vr: VR,
    /// value length, possibly undefined
    pub len: Length,
}

impl DataElementHeader {
    /// Create a data element header.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// The attribute tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The value length.
    #[inline]
    pub fn length(&self) -> Length {
        self.len
    }

    /// Whether this header opens an item rather than an element.
    #[inline]
    pub fn is_item(&self) -> bool {
        self.tag == Tag::ITEM
    }
}

/// The header of an item or a delimiter within a sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// An item follows, of the given length.
    Item {
        /// explicit or undefined length of the item
        len: Length,
    },
    /// The end of an item of undefined length.
    ItemDelimiter,
    /// The end of a sequence of undefined length.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Interpret a tag and length of group `FFFE`.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<Self, SequenceItemHeaderError> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER if len.0 == 0 => Ok(SequenceItemHeader::ItemDelimiter),
            Tag::ITEM_DELIMITER => UnexpectedDelimiterLengthSnafu { len }.fail(),
            // some writers put garbage in the sequence delimiter length
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }

    /// The tag this header is written with.
    pub fn tag(&self) -> Tag {
        match self {
            SequenceItemHeader::Item { .. } => Tag::ITEM,
            SequenceItemHeader::ItemDelimiter => Tag::ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => Tag::SEQUENCE_DELIMITER,
        }
    }

    /// The item length. Delimiters have none.
    pub fn length(&self) -> Length {
        match self {
            SequenceItemHeader::Item { len } => *len,
            _ => Length(0),
        }
    }

    /// Whether an item follows.
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, SequenceItemHeader::Item { .. })
    }
}

macro_rules! value_representations {
    ($($vr:ident: $desc:literal,)*) => {
        /// A DICOM value representation.
        ///
        /// The declaration order is alphabetical,
        /// and is the order of [`VR::ALL`].
        #[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
        pub enum VR {
            $(
                #[doc = $desc]
                $vr,
            )*
        }

        impl VR {
            /// Every value representation, in declaration order.
            pub const ALL: [VR; 34] = [$(VR::$vr,)*];
        }
    };
}

value_representations! {
    AE: "Application Entity",
    AS: "Age String",
    AT: "Attribute Tag",
    CS: "Code String",
    DA: "Date",
    DS: "Decimal String",
    DT: "Date Time",
    FL: "Floating Point Single",
    FD: "Floating Point Double",
    IS: "Integer String",
    LO: "Long String",
    LT: "Long Text",
    OB: "Other Byte",
    OD: "Other Double",
    OF: "Other Float",
    OL: "Other Long",
    OV: "Other 64-bit Very Long",
    OW: "Other Word",
    PN: "Person Name",
    SH: "Short String",
    SL: "Signed Long",
    SQ: "Sequence of Items",
    SS: "Signed Short",
    ST: "Short Text",
    SV: "Signed 64-bit Very Long",
    TM: "Time",
    UC: "Unlimited Characters",
    UI: "Unique Identifier",
    UL: "Unsigned Long",
    UN: "Unknown",
    UR: "Universal Resource Identifier",
    US: "Unsigned Short",
    UT: "Unlimited Text",
    UV: "Unsigned 64-bit Very Long",
}

impl VR {
    /// The value representation spelled by two upper case letters,
    /// if it is a known one.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        VR::ALL.iter().copied().find(|vr| vr.to_bytes() == chars)
    }

    /// The two letter name.
    pub fn to_string(self) -> &'static str {
        self.info().name
    }

    /// The two letter name as it is written in explicit VR headers.
    pub fn to_bytes(self) -> [u8; 2] {
        match self.info().name.as_bytes() {
            [a, b] => [*a, *b],
            _ => [b'U', b'N'],
        }
    }
}

impl FromStr for VR {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [a, b] => VR::from_binary([*a, *b]).ok_or("unknown value representation"),
            _ => Err("value representations have two letters"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// An attribute tag: group number and element number.
///
/// Tags order by group, then by element,
/// which is the order of elements in a data set.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub u16, pub u16);

impl Tag {
    /// (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// (7FE0,0010)
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
    /// (FFFC,FFFC)
    pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
    /// (FFFF,FFFF), after every other tag.
    pub const MAX: Tag = Tag(0xFFFF, 0xFFFF);

    /// The group number.
    #[inline]
    pub fn group(self) -> u16 {
        self.0
    }

    /// The element number.
    #[inline]
    pub fn element(self) -> u16 {
        self.1
    }

    /// `(gggg,0000)`
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Odd groups are private.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 % 2 == 1
    }

    /// `(gggg,0010)` to `(gggg,00FF)` of a private group
    /// reserve a block of elements for a private creator.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && self.1 >= 0x0010 && self.1 <= 0x00FF
    }

    /// Group `0002`, the file meta information.
    #[inline]
    pub fn is_meta(self) -> bool {
        self.0 == 0x0002
    }

    /// Group `FFFE` of items and delimiters,
    /// which never carry a value representation.
    #[inline]
    pub fn is_delimitation(self) -> bool {
        self.0 == 0xFFFE
    }

    /// The tag of the group length element of this tag's group.
    #[inline]
    pub fn group_length_tag(self) -> Tag {
        Tag(self.0, 0x0000)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag(0x{:04X}, 0x{:04X})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from((group, element): (u16, u16)) -> Tag {
        Tag(group, element)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from([group, element]: [u16; 2]) -> Tag {
        Tag(group, element)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        (self.0, self.1) == *other
    }
}

/// A value length in bytes as written in a header.
///
/// `0xFFFF_FFFF` is the undefined length of sequences and items
/// which end with a delimiter, and of encapsulated pixel data.
/// Two undefined lengths are equal.
///
/// ```
/// # use dcmcodec_core::Length;
/// assert_eq!(Length(12).get(), Some(12));
/// assert_eq!(Length::UNDEFINED.get(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(pub u32);

impl Length {
    /// The undefined length.
    pub const UNDEFINED: Length = Length(0xFFFF_FFFF);

    /// Whether this is the undefined length.
    #[inline]
    pub fn is_undefined(self) -> bool {
        self == Length::UNDEFINED
    }

    /// The number of bytes, none when undefined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(len: u32) -> Self {
        Length(len)
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "Length({})", len),
            None => f.write_str("Length(Undefined)"),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "{}", len),
            None => f.write_str("U/L"),
        }
    }
}
