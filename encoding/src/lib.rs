//! DICOM encoding and decoding primitives.
//!
//! This crate provides the encoders and decoders of DICOM element headers
//! in the native transfer syntaxes
//! (explicit VR little and big endian, implicit VR little endian),
//! the basic byte order codecs used for element values,
//! and the concept of [transfer syntax specifier],
//! which is used to produce DICOM encoders and decoders at run-time.
//!
//! All APIs are based on synchronous I/O.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html

pub mod decode;
pub mod encode;
pub mod transfer_syntax;

pub use byteordered;
pub use decode::Decode;
pub use encode::Encode;
pub use transfer_syntax::Codec;
pub use transfer_syntax::TransferSyntax;
pub use transfer_syntax::TransferSyntaxIndex;
