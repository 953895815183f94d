//! Static properties of each value representation.
//!
//! Every generic operation on element values
//! (value multiplicity, verification, comparison, byte swapping, padding)
//! is driven by the [`VrInfo`] record of the element's VR,
//! obtained through [`VR::info`].

use crate::header::VR;

/// The broad class of a value representation.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VrCategory {
    /// Character strings.
    /// Multiple values are separated by a backslash, unless stated otherwise.
    Text,
    /// A sequence of fixed size binary scalars (`US`, `FL`, `AT`, ...).
    Numeric,
    /// An opaque byte sequence or an "other" array (`OB`, `OW`, `UN`, ...),
    /// of value multiplicity one.
    Binary,
    /// A sequence of items.
    Sequence,
}

/// The scalar type held by a binary value representation.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Scalar {
    /// unsigned 8-bit integer
    U8,
    /// unsigned 16-bit integer
    U16,
    /// signed 16-bit integer
    I16,
    /// unsigned 32-bit integer
    U32,
    /// signed 32-bit integer
    I32,
    /// unsigned 64-bit integer
    U64,
    /// signed 64-bit integer
    I64,
    /// single precision float
    F32,
    /// double precision float
    F64,
    /// attribute tag, a pair of unsigned 16-bit integers
    Tag,
}

impl Scalar {
    /// The size of one scalar in bytes.
    pub fn size(self) -> usize {
        match self {
            Scalar::U8 => 1,
            Scalar::U16 | Scalar::I16 => 2,
            Scalar::U32 | Scalar::I32 | Scalar::F32 | Scalar::Tag => 4,
            Scalar::U64 | Scalar::I64 | Scalar::F64 => 8,
        }
    }

    /// The number of bytes to reverse when converting one component
    /// between byte orders.
    /// Tags are swapped per 16-bit half.
    pub fn swap_size(self) -> usize {
        match self {
            Scalar::Tag => 2,
            s => s.size(),
        }
    }
}

/// The capability record of a value representation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VrInfo {
    /// the value representation described
    pub vr: VR,
    /// the two letter code
    pub name: &'static str,
    /// broad category
    pub category: VrCategory,
    /// binary scalar type, `None` for text and sequences
    pub scalar: Option<Scalar>,
    /// whether the explicit VR header uses
    /// two reserved bytes and a 32-bit length field
    pub long_length: bool,
    /// byte used to pad the value to an even length
    pub padding: u8,
    /// maximum length in bytes of a single value (component),
    /// `None` when unbounded
    pub max_length: Option<u32>,
    /// whether a backslash separates values
    pub multi_valued: bool,
    /// whether the Specific Character Set affects the value
    pub charset_sensitive: bool,
}

impl VrInfo {
    /// The size of one value component in bytes.
    /// Text values have no fixed size and report 1.
    pub fn value_size(&self) -> usize {
        self.scalar.map(Scalar::size).unwrap_or(1)
    }

    /// The number of bytes to reverse per component
    /// when converting between byte orders.
    /// A value of 1 means that no swapping takes place.
    pub fn swap_size(&self) -> usize {
        self.scalar.map(Scalar::swap_size).unwrap_or(1)
    }

    /// Whether values of this VR are textual.
    pub fn is_text(&self) -> bool {
        self.category == VrCategory::Text
    }

    /// Whether the length of a value must be a multiple of a scalar size.
    pub fn has_fixed_value_size(&self) -> bool {
        self.scalar.map(|s| s.size() > 1).unwrap_or(false)
    }
}

const fn text(
    vr: VR,
    name: &'static str,
    max_length: Option<u32>,
    multi_valued: bool,
    charset_sensitive: bool,
) -> VrInfo {
    VrInfo {
        vr,
        name,
        category: VrCategory::Text,
        scalar: None,
        long_length: false,
        padding: b' ',
        max_length,
        multi_valued,
        charset_sensitive,
    }
}

const fn numeric(vr: VR, name: &'static str, scalar: Scalar) -> VrInfo {
    VrInfo {
        vr,
        name,
        category: VrCategory::Numeric,
        scalar: Some(scalar),
        long_length: false,
        padding: 0,
        max_length: None,
        multi_valued: true,
        charset_sensitive: false,
    }
}

const fn binary(vr: VR, name: &'static str, scalar: Scalar) -> VrInfo {
    VrInfo {
        vr,
        name,
        category: VrCategory::Binary,
        scalar: Some(scalar),
        long_length: true,
        padding: 0,
        max_length: None,
        multi_valued: false,
        charset_sensitive: false,
    }
}

/// The capability table, in the same order as [`VR::ALL`].
static VR_TABLE: [VrInfo; 34] = [
    text(VR::AE, "AE", Some(16), true, false),
    text(VR::AS, "AS", Some(4), true, false),
    numeric(VR::AT, "AT", Scalar::Tag),
    text(VR::CS, "CS", Some(16), true, false),
    text(VR::DA, "DA", Some(8), true, false),
    text(VR::DS, "DS", Some(16), true, false),
    text(VR::DT, "DT", Some(26), true, false),
    numeric(VR::FL, "FL", Scalar::F32),
    numeric(VR::FD, "FD", Scalar::F64),
    text(VR::IS, "IS", Some(12), true, false),
    text(VR::LO, "LO", Some(64), true, true),
    text(VR::LT, "LT", Some(10240), false, true),
    binary(VR::OB, "OB", Scalar::U8),
    binary(VR::OD, "OD", Scalar::F64),
    binary(VR::OF, "OF", Scalar::F32),
    binary(VR::OL, "OL", Scalar::U32),
    binary(VR::OV, "OV", Scalar::U64),
    binary(VR::OW, "OW", Scalar::U16),
    text(VR::PN, "PN", Some(64), true, true),
    text(VR::SH, "SH", Some(16), true, true),
    numeric(VR::SL, "SL", Scalar::I32),
    VrInfo {
        vr: VR::SQ,
        name: "SQ",
        category: VrCategory::Sequence,
        scalar: None,
        long_length: true,
        padding: 0,
        max_length: None,
        multi_valued: false,
        charset_sensitive: false,
    },
    numeric(VR::SS, "SS", Scalar::I16),
    text(VR::ST, "ST", Some(1024), false, true),
    VrInfo {
        long_length: true,
        ..numeric(VR::SV, "SV", Scalar::I64)
    },
    text(VR::TM, "TM", Some(14), true, false),
    VrInfo {
        long_length: true,
        ..text(VR::UC, "UC", None, true, true)
    },
    VrInfo {
        padding: 0,
        ..text(VR::UI, "UI", Some(64), true, false)
    },
    numeric(VR::UL, "UL", Scalar::U32),
    binary(VR::UN, "UN", Scalar::U8),
    VrInfo {
        long_length: true,
        ..text(VR::UR, "UR", None, false, false)
    },
    numeric(VR::US, "US", Scalar::U16),
    VrInfo {
        long_length: true,
        ..text(VR::UT, "UT", None, false, true)
    },
    VrInfo {
        long_length: true,
        ..numeric(VR::UV, "UV", Scalar::U64)
    },
];

impl VR {
    /// Retrieve the static capability record of this value representation.
    pub fn info(self) -> &'static VrInfo {
        // the discriminants follow the declaration order, as does the table
        &VR_TABLE[self as usize]
    }

    /// Whether the explicit VR header of this VR carries a 32-bit length.
    #[inline]
    pub fn has_long_length(self) -> bool {
        self.info().long_length
    }

    /// The byte used to pad values of this VR to even length.
    #[inline]
    pub fn padding(self) -> u8 {
        self.info().padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_declaration() {
        for vr in VR::ALL.iter().copied() {
            assert_eq!(vr.info().vr, vr);
            assert_eq!(vr.info().name.as_bytes(), &vr.to_bytes());
        }
    }

    #[test]
    fn explicit_length_field_sizes() {
        let short = [
            VR::AE,
            VR::AS,
            VR::AT,
            VR::CS,
            VR::DA,
            VR::DS,
            VR::DT,
            VR::FL,
            VR::FD,
            VR::IS,
            VR::LO,
            VR::LT,
            VR::PN,
            VR::SH,
            VR::SL,
            VR::SS,
            VR::ST,
            VR::TM,
            VR::UI,
            VR::UL,
            VR::US,
        ];
        for vr in VR::ALL.iter().copied() {
            assert_eq!(!vr.has_long_length(), short.contains(&vr), "{}", vr);
        }
    }

    #[test]
    fn padding_and_sizes() {
        assert_eq!(VR::UI.padding(), 0);
        assert_eq!(VR::PN.padding(), b' ');
        assert_eq!(VR::OB.padding(), 0);
        assert_eq!(VR::FD.info().value_size(), 8);
        assert_eq!(VR::AT.info().value_size(), 4);
        assert_eq!(VR::AT.info().swap_size(), 2);
        assert_eq!(VR::OB.info().swap_size(), 1);
        assert!(VR::US.info().has_fixed_value_size());
        assert!(!VR::OB.info().has_fixed_value_size());
        assert!(!VR::UR.info().multi_valued);
    }
}
