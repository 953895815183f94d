//! Readers of the integers in headers, one per byte order,
//! and byte swapping of element values.

use super::BasicDecode;
use byteordered::{ByteOrdered, Endianness};
use std::io::{Read, Result};

macro_rules! basic_decoder {
    ($(#[$doc:meta])* $name:ident, $endianness:ident, $wrap:ident) => {
        $(#[$doc])*
        #[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
        pub struct $name;

        impl BasicDecode for $name {
            fn endianness(&self) -> Endianness {
                Endianness::$endianness
            }

            fn decode_us<S>(&self, source: S) -> Result<u16>
            where
                S: Read,
            {
                ByteOrdered::$wrap(source).read_u16()
            }

            fn decode_ul<S>(&self, source: S) -> Result<u32>
            where
                S: Read,
            {
                ByteOrdered::$wrap(source).read_u32()
            }
        }
    };
}

basic_decoder!(
    /// Reads little endian integers.
    LittleEndianBasicDecoder,
    Little,
    le
);
basic_decoder!(
    /// Reads big endian integers.
    BigEndianBasicDecoder,
    Big,
    be
);

/// Reverse the bytes of each `size` byte component of `buf` in place,
/// converting a value between little and big endian.
///
/// A trailing incomplete component is left untouched.
pub fn swap_value_bytes(buf: &mut [u8], size: usize) {
    if size <= 1 {
        return;
    }
    for component in buf.chunks_exact_mut(size) {
        component.reverse();
    }
}
