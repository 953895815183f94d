//! This crate provides the resumable reading layer of the dcmcodec data set codec:
//!
//! - [`stream`] contains the [`InputStream`],
//!   a byte source working either in push mode
//!   (bytes are fed as they arrive, e.g. from a network socket)
//!   or in pull mode (bytes are fetched from a reader on demand);
//! - [`header`] reads element and item headers,
//!   suspending when the stream does not hold a complete header yet;
//! - [`detect`] guesses the encoding of a data set from its first bytes.
//!
//! For the time being, all APIs are based on synchronous I/O.
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

pub mod detect;
pub mod header;
pub mod stream;

pub use detect::{check_transfer_syntax, detect_transfer_syntax, DetectedSyntax};
pub use header::{HeaderRead, HeaderReader};
pub use stream::{InputStream, Mark};
