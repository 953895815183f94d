//! Transfer state of resumable reads,
//! and the context shared by the nested objects of one read or write call.

use crate::options::{EncodingType, ReadOptions};
use crate::{NotInitializedSnafu, ReadHeaderSnafu, ReadStreamSnafu, Result, UnwritableTransferSyntaxSnafu};
use dcmcodec_encoding::transfer_syntax::{DynEncoder, Endianness, TransferSyntax};
use dcmcodec_parser::header::HeaderReader;
use dcmcodec_parser::stream::InputStream;
use dcmcodec_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN;
use snafu::{OptionExt, ResultExt};

/// The progress of an object through a read.
///
/// Every container tracks its own state,
/// independently of its parent and children.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum TransferState {
    /// The transfer has ended.
    /// The object must be reinitialized before it is read again.
    NotInitialized,
    /// Nothing was read yet.
    Init,
    /// The object is partially read.
    InWork,
    /// The object was read completely.
    Ready,
}

impl Default for TransferState {
    fn default() -> Self {
        TransferState::Init
    }
}

/// The outcome of a call to `read`.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadProgress {
    /// The object was read completely.
    Complete,
    /// The stream ran out of bytes.
    /// Call `read` again once more bytes were fed.
    Suspended,
}

/// The transfer state of a container
/// along with the stream position where its value starts.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub(crate) struct Cursor {
    pub state: TransferState,
    start: u64,
}

impl Cursor {
    /// The cursor of an object built in memory, which needs no read.
    pub fn complete() -> Self {
        Cursor {
            state: TransferState::Ready,
            start: 0,
        }
    }

    /// Enter the read, recording the start position on the first call.
    /// Returns whether the object was already read completely.
    pub fn enter(&mut self, stream: &InputStream) -> Result<bool> {
        match self.state {
            TransferState::NotInitialized => NotInitializedSnafu.fail(),
            TransferState::Init => {
                self.start = stream.tell();
                self.state = TransferState::InWork;
                Ok(false)
            }
            TransferState::InWork => Ok(false),
            TransferState::Ready => Ok(true),
        }
    }

    /// The number of bytes read since the start of the value.
    pub fn transferred(&self, stream: &InputStream) -> u64 {
        stream.tell().saturating_sub(self.start)
    }

    pub fn ready(&mut self) {
        self.state = TransferState::Ready;
    }

    pub fn init(&mut self) {
        self.state = TransferState::Init;
    }

    pub fn end(&mut self) {
        self.state = TransferState::NotInitialized;
    }
}

/// Everything the objects of one read call need to know.
#[derive(Debug)]
pub(crate) struct ReadContext<'a> {
    pub reader: HeaderReader,
    pub ts: TransferSyntax,
    pub options: &'a ReadOptions,
}

impl<'a> ReadContext<'a> {
    pub fn new(ts: &TransferSyntax, options: &'a ReadOptions) -> Result<Self> {
        let reader = HeaderReader::with_dict(ts, options.dictionary.clone()).context(ReadHeaderSnafu)?;
        Ok(ReadContext {
            reader,
            ts: ts.clone(),
            options,
        })
    }

    /// The context to read the items of a `UN` element of undefined length,
    /// which are always in implicit VR little endian.
    pub fn implicit_le(&self) -> Result<ReadContext<'a>> {
        ReadContext::new(&IMPLICIT_VR_LITTLE_ENDIAN, self.options)
    }

    pub fn endianness(&self) -> Endianness {
        self.ts.endianness()
    }

    /// The maximum number of value bytes taken from the stream at once.
    pub fn chunk_size(&self) -> usize {
        self.options.max_read_length.max(1) as usize
    }
}

/// Everything the objects of one write call need to know.
pub(crate) struct WriteContext<'a> {
    pub encoder: DynEncoder,
    pub ts: &'a TransferSyntax,
    pub encoding: EncodingType,
}

impl std::fmt::Debug for WriteContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("WriteContext")
            .field("ts", &self.ts.uid())
            .field("encoding", &self.encoding)
            .finish()
    }
}

impl<'a> WriteContext<'a> {
    pub fn new(ts: &'a TransferSyntax, encoding: EncodingType) -> Result<Self> {
        let encoder = ts
            .encoder()
            .context(UnwritableTransferSyntaxSnafu { uid: ts.uid() })?;
        Ok(WriteContext {
            encoder,
            ts,
            encoding,
        })
    }
}

/// The outcome of reading the bytes of a value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ValueRead {
    Complete,
    Suspended,
    /// The stream ended before the value was complete.
    Truncated,
}

/// Move value bytes from the stream into `buf`
/// until it holds `len` bytes,
/// taking at most `chunk` bytes from the stream at once.
pub(crate) fn read_value_bytes(
    stream: &mut InputStream,
    buf: &mut Vec<u8>,
    len: usize,
    chunk: usize,
) -> Result<ValueRead> {
    while buf.len() < len {
        let want = (len - buf.len()).min(chunk);
        let avail = stream.fill(want).context(ReadStreamSnafu)?;
        if avail == 0 {
            return Ok(if stream.is_finished() {
                ValueRead::Truncated
            } else {
                ValueRead::Suspended
            });
        }
        let n = avail.min(want);
        buf.reserve(n);
        buf.extend_from_slice(&stream.peek()[..n]);
        stream.consume(n);
    }
    Ok(ValueRead::Complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_bytes_arrive_in_chunks() {
        let mut stream = InputStream::new();
        stream.feed(&[1, 2, 3]).unwrap();
        let mut buf = Vec::new();
        assert_eq!(
            read_value_bytes(&mut stream, &mut buf, 6, 2).unwrap(),
            ValueRead::Suspended
        );
        assert_eq!(buf, [1, 2, 3]);

        stream.feed(&[4, 5, 6, 7]).unwrap();
        assert_eq!(
            read_value_bytes(&mut stream, &mut buf, 6, 2).unwrap(),
            ValueRead::Complete
        );
        assert_eq!(buf, [1, 2, 3, 4, 5, 6]);
        // the next byte stays in the stream
        assert_eq!(stream.peek(), &[7]);
    }

    #[test]
    fn value_bytes_truncated_at_end_of_stream() {
        let mut stream = InputStream::from_bytes(vec![9, 9]);
        let mut buf = Vec::new();
        assert_eq!(
            read_value_bytes(&mut stream, &mut buf, 4, 4096).unwrap(),
            ValueRead::Truncated
        );
        assert_eq!(buf, [9, 9]);
    }

    #[test]
    fn cursor_rejects_ended_transfer() {
        let stream = InputStream::new();
        let mut cursor = Cursor::default();
        assert!(!cursor.enter(&stream).unwrap());
        cursor.ready();
        assert!(cursor.enter(&stream).unwrap());
        cursor.end();
        assert!(cursor.enter(&stream).is_err());
        cursor.init();
        assert!(!cursor.enter(&stream).unwrap());
    }
}
