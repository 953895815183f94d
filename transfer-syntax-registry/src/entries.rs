//! A list of compiled transfer syntax specifiers.
//!
//! - **Fully implemented** means that data sets in the transfer syntax
//!   can be read and written.
//! - **Stub descriptors** describe a transfer syntax with encapsulated pixel data:
//!   data sets can be read and written,
//!   pixel data fragments are kept in their encoded form.

use dcmcodec_dictionary_std::uids;
use dcmcodec_encoding::transfer_syntax::{Codec, Endianness, TransferSyntax as Ts};

/// create a TS with an encapsulated pixel data stub
const fn create_ts_stub(uid: &'static str, name: &'static str) -> Ts {
    Ts::new(uid, name, Endianness::Little, true, Codec::EncapsulatedPixelData)
}

// -- the three base transfer syntaxes, fully supported --

/// **Fully implemented:** Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::IMPLICIT_VR_LITTLE_ENDIAN,
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    Codec::None,
);

/// **Fully implemented:** Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::EXPLICIT_VR_LITTLE_ENDIAN,
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::None,
);

/// **Fully implemented:** Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    uids::EXPLICIT_VR_BIG_ENDIAN,
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    Codec::None,
);

/// **Fully implemented:** Deflated Explicit VR Little Endian
///
/// Reading and writing requires the `deflate` feature of the object crate.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    "Deflated Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::Deflated,
);

// -- encapsulated pixel data stubs --

/// **Stub descriptor:** JPEG Baseline (Process 1)
pub const JPEG_BASELINE: Ts = create_ts_stub(uids::JPEG_BASELINE8_BIT, "JPEG Baseline (Process 1)");
/// **Stub descriptor:** JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: Ts =
    create_ts_stub(uids::JPEG_EXTENDED12_BIT, "JPEG Extended (Process 2 & 4)");
/// **Stub descriptor:** JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: Ts = create_ts_stub(
    uids::JPEG_LOSSLESS,
    "JPEG Lossless, Non-Hierarchical (Process 14)",
);
/// **Stub descriptor:** JPEG Lossless, Non-Hierarchical, First-Order Prediction
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: Ts = create_ts_stub(
    uids::JPEG_LOSSLESS_SV1,
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
);
/// **Stub descriptor:** JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS_IMAGE_COMPRESSION: Ts = create_ts_stub(
    uids::JPEGLS_LOSSLESS,
    "JPEG-LS Lossless Image Compression",
);
/// **Stub descriptor:** JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_LOSSY_IMAGE_COMPRESSION: Ts = create_ts_stub(
    uids::JPEGLS_NEAR_LOSSLESS,
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
);
/// **Stub descriptor:** JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY: Ts = create_ts_stub(
    uids::JPEG2000_LOSSLESS,
    "JPEG 2000 Image Compression (Lossless Only)",
);
/// **Stub descriptor:** JPEG 2000 Image Compression
pub const JPEG_2000_IMAGE_COMPRESSION: Ts =
    create_ts_stub(uids::JPEG2000, "JPEG 2000 Image Compression");
/// **Stub descriptor:** MPEG2 Main Profile / Main Level
pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL: Ts =
    create_ts_stub(uids::MPEG2MPML, "MPEG2 Main Profile / Main Level");
/// **Stub descriptor:** MPEG-4 AVC/H.264 High Profile / Level 4.1
pub const MPEG4_AVC_H264_HIGH_PROFILE: Ts = create_ts_stub(
    uids::MPEG4HP41,
    "MPEG-4 AVC/H.264 High Profile / Level 4.1",
);
/// **Stub descriptor:** RLE Lossless
pub const RLE_LOSSLESS: Ts = create_ts_stub(uids::RLE_LOSSLESS, "RLE Lossless");
