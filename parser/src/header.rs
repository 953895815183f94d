//! Resumable reading of element and item headers from an [`InputStream`].
//!
//! A header is only consumed once it was decoded in full.
//! When the bytes available are not enough,
//! the stream is put back to the start of the header
//! and the reader reports that it must wait for more input.

use crate::stream::{self, InputStream};
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::header::{DataElementHeader, SequenceItemHeader};
use dcmcodec_core::{Tag, VR};
use dcmcodec_dictionary_std::StandardDataDictionary;
use dcmcodec_encoding::decode::{self, DecodeFrom};
use dcmcodec_encoding::transfer_syntax::{DynDecoder, Endianness, TransferSyntax};
use snafu::{OptionExt, ResultExt, Snafu};
use std::convert::TryInto;
use std::io::Read;
use std::sync::Arc;
use tracing::warn;

/// The largest header size of any transfer syntax.
const MAX_HEADER_SIZE: usize = 12;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The transfer syntax cannot be decoded.
    #[snafu(display("Unsupported transfer syntax {} ({})", uid, name))]
    UnsupportedTransferSyntax {
        uid: &'static str,
        name: &'static str,
    },
    /// The stream failed to provide more bytes.
    #[snafu(display("Could not fetch header bytes"))]
    FetchHeader { source: stream::Error },
    /// The header bytes are malformed.
    #[snafu(display("Could not decode header"))]
    DecodeHeader { source: decode::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The outcome of an attempt to read a header.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HeaderRead<H> {
    /// A header was read in full, consuming this many bytes.
    Header(H, u32),
    /// The header is incomplete:
    /// nothing was consumed and more bytes are needed.
    Suspended,
    /// The stream has ended.
    EndOfStream,
}

/// A reader of element and item headers in one transfer syntax.
pub struct HeaderReader {
    decoder: DynDecoder,
    explicit_vr: bool,
    endianness: Endianness,
}

impl std::fmt::Debug for HeaderReader {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("HeaderReader")
            .field("explicit_vr", &self.explicit_vr)
            .field("endianness", &self.endianness)
            .finish()
    }
}

impl HeaderReader {
    /// Create a header reader for the given transfer syntax,
    /// resolving implicit value representations
    /// with the standard data dictionary.
    pub fn new(ts: &TransferSyntax) -> Result<Self> {
        Self::with_dict(ts, Arc::new(StandardDataDictionary))
    }

    /// Create a header reader for the given transfer syntax
    /// and data dictionary.
    pub fn with_dict(ts: &TransferSyntax, dict: Arc<dyn DataDictionary>) -> Result<Self> {
        let decoder = ts
            .decoder_for(dict)
            .context(UnsupportedTransferSyntaxSnafu {
                uid: ts.uid(),
                name: ts.name(),
            })?;
        Ok(HeaderReader {
            decoder,
            explicit_vr: ts.is_explicit_vr(),
            endianness: ts.endianness(),
        })
    }

    /// Whether value representations are read from the stream.
    pub fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// The byte order of the headers.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Read the next data element header.
    ///
    /// Item and delimitation headers are also read
    /// with this method, and report a `UN` value representation.
    pub fn read_header(&self, stream: &mut InputStream) -> Result<HeaderRead<DataElementHeader>> {
        stream.fill(MAX_HEADER_SIZE).context(FetchHeaderSnafu)?;
        if stream.eos() {
            return Ok(HeaderRead::EndOfStream);
        }
        let lead: Option<[u8; 6]> = stream.peek().get(..6).and_then(|b| b.try_into().ok());

        let mark = stream.mark();
        let source: &mut dyn Read = &mut *stream;
        match self.decoder.decode_header(source) {
            Ok((header, size)) => {
                stream.release(mark);
                if let (true, Some(lead)) = (self.explicit_vr, lead) {
                    self.warn_nonstandard_vr(&lead);
                }
                if let Some(len) = header.len.get() {
                    if len % 2 == 1 {
                        warn!("Odd length {} of element {}", len, header.tag);
                    }
                }
                Ok(HeaderRead::Header(header, size as u32))
            }
            Err(e) if e.is_eof() => {
                stream.putback(mark);
                Ok(self.incomplete(stream))
            }
            Err(e) => {
                stream.putback(mark);
                Err(e).context(DecodeHeaderSnafu)
            }
        }
    }

    /// Read the next item or delimiter header in a sequence.
    pub fn read_item_header(
        &self,
        stream: &mut InputStream,
    ) -> Result<HeaderRead<SequenceItemHeader>> {
        stream.fill(8).context(FetchHeaderSnafu)?;
        if stream.eos() {
            return Ok(HeaderRead::EndOfStream);
        }

        let mark = stream.mark();
        let source: &mut dyn Read = &mut *stream;
        match self.decoder.decode_item_header(source) {
            Ok(header) => {
                stream.release(mark);
                Ok(HeaderRead::Header(header, 8))
            }
            Err(e) if e.is_eof() => {
                stream.putback(mark);
                Ok(self.incomplete(stream))
            }
            Err(e) => {
                stream.putback(mark);
                Err(e).context(DecodeHeaderSnafu)
            }
        }
    }

    /// Read the tag at the cursor without consuming it.
    pub fn peek_tag(&self, stream: &mut InputStream) -> Result<Option<Tag>> {
        stream.fill(4).context(FetchHeaderSnafu)?;
        let bytes = stream.peek();
        if bytes.len() < 4 {
            return Ok(None);
        }
        let tag = match self.endianness {
            Endianness::Little => Tag(
                u16::from_le_bytes([bytes[0], bytes[1]]),
                u16::from_le_bytes([bytes[2], bytes[3]]),
            ),
            Endianness::Big => Tag(
                u16::from_be_bytes([bytes[0], bytes[1]]),
                u16::from_be_bytes([bytes[2], bytes[3]]),
            ),
        };
        Ok(Some(tag))
    }

    fn incomplete<H>(&self, stream: &InputStream) -> HeaderRead<H> {
        if stream.is_finished() {
            warn!(
                "Stream ends within a header, {} trailing bytes ignored",
                stream.avail()
            );
            HeaderRead::EndOfStream
        } else {
            HeaderRead::Suspended
        }
    }

    fn warn_nonstandard_vr(&self, bytes: &[u8]) {
        if bytes.len() < 6 {
            return;
        }
        let group = match self.endianness {
            Endianness::Little => u16::from_le_bytes([bytes[0], bytes[1]]),
            Endianness::Big => u16::from_be_bytes([bytes[0], bytes[1]]),
        };
        if group == 0xFFFE {
            // delimitation items have no VR
            return;
        }
        let code = [bytes[4], bytes[5]];
        if VR::from_binary(code).is_none() {
            warn!(
                "Non-standard VR {:?} encountered, assuming 4 byte length field",
                String::from_utf8_lossy(&code)
            );
        }
    }
}
