//! Writers of the integers in headers, one per byte order.

use super::BasicEncode;
use byteordered::{ByteOrdered, Endianness};
use std::io::{Result, Write};

macro_rules! basic_encoder {
    ($(#[$doc:meta])* $name:ident, $endianness:ident, $wrap:ident) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl BasicEncode for $name {
            fn endianness(&self) -> Endianness {
                Endianness::$endianness
            }

            fn encode_us<W>(&self, to: W, value: u16) -> Result<()>
            where
                W: Write,
            {
                ByteOrdered::$wrap(to).write_u16(value)
            }

            fn encode_ul<W>(&self, to: W, value: u32) -> Result<()>
            where
                W: Write,
            {
                ByteOrdered::$wrap(to).write_u32(value)
            }
        }
    };
}

basic_encoder!(
    /// Writes little endian integers.
    LittleEndianBasicEncoder,
    Little,
    le
);
basic_encoder!(
    /// Writes big endian integers.
    BigEndianBasicEncoder,
    Big,
    be
);
