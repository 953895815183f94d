//! Unsigned long elements which hold a byte offset into a file,
//! as used by the directory records of a DICOMDIR.

use super::Element;
use crate::item::Object;
use crate::{InvalidVrSnafu, Result, ValueIndexSnafu};
use dcmcodec_core::{Tag, VR};
use dcmcodec_dictionary_std::tags;
use snafu::ensure;
use std::convert::TryFrom;

/// A handle to the directory record an offset points to,
/// as an index into the records of the directory record sequence.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct RecordHandle(pub usize);

/// An `UL` element with a byte offset,
/// optionally linked to the record it points to.
///
/// The link is not part of the encoded element.
/// It lets the offset be brought up to date
/// once the position of the record in the file is known.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsignedLongOffset {
    element: Element,
    record: Option<RecordHandle>,
}

impl UnsignedLongOffset {
    /// Create an offset element with the given value.
    pub fn new(tag: Tag, offset: u32) -> Self {
        UnsignedLongOffset {
            element: Element::from_bytes(tag, VR::UL, offset.to_le_bytes().to_vec()),
            record: None,
        }
    }

    /// Whether `tag` is one of the offset attributes of a DICOMDIR.
    pub fn is_offset_tag(tag: Tag) -> bool {
        matches!(
            tag,
            tags::OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY
                | tags::OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY
                | tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD
                | tags::OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY
        )
    }

    pub fn tag(&self) -> Tag {
        self.element.tag()
    }

    /// The offset value.
    pub fn offset(&self) -> Result<u32> {
        self.element.get_u32(0)
    }

    pub fn set_offset(&mut self, offset: u32) {
        self.element.set_value(offset.to_le_bytes().to_vec());
    }

    /// The record this offset points to, if known.
    pub fn record(&self) -> Option<RecordHandle> {
        self.record
    }

    pub fn set_record(&mut self, record: Option<RecordHandle>) {
        self.record = record;
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}

impl TryFrom<Element> for UnsignedLongOffset {
    type Error = crate::Error;

    /// Take an element as an offset.
    /// It must be `UL` with a single value.
    fn try_from(element: Element) -> Result<Self> {
        ensure!(
            element.vr() == VR::UL,
            InvalidVrSnafu {
                tag: element.tag(),
                vr: element.vr(),
            }
        );
        let vm = element.vm();
        ensure!(
            vm == 1,
            ValueIndexSnafu {
                tag: element.tag(),
                pos: 0usize,
                vm,
            }
        );
        Ok(UnsignedLongOffset {
            element,
            record: None,
        })
    }
}

impl From<UnsignedLongOffset> for Object {
    fn from(offset: UnsignedLongOffset) -> Self {
        Object::Element(offset.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_value_and_record() {
        let mut offset = UnsignedLongOffset::new(tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, 0);
        assert_eq!(offset.offset().unwrap(), 0);
        offset.set_offset(414);
        offset.set_record(Some(RecordHandle(3)));
        assert_eq!(offset.offset().unwrap(), 414);
        assert_eq!(offset.record(), Some(RecordHandle(3)));
        assert_eq!(offset.element().value_bytes(), Some(&[0x9E, 0x01, 0, 0][..]));
    }

    #[test]
    fn offsets_from_elements() {
        assert!(UnsignedLongOffset::is_offset_tag(
            tags::OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY
        ));
        assert!(!UnsignedLongOffset::is_offset_tag(tags::ROWS));

        let e = Element::with_u32s(tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, VR::UL, &[8]).unwrap();
        let offset = UnsignedLongOffset::try_from(e).unwrap();
        assert_eq!(offset.offset().unwrap(), 8);
        assert_eq!(offset.record(), None);

        let e = Element::with_u16s(tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, VR::US, &[8]).unwrap();
        assert!(UnsignedLongOffset::try_from(e).is_err());
        let e = Element::with_u32s(tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, VR::UL, &[8, 9]).unwrap();
        assert!(UnsignedLongOffset::try_from(e).is_err());
    }
}
