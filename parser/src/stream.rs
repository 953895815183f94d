//! A buffered, resumable source of DICOM bytes.
//!
//! An [`InputStream`] works in one of two modes:
//!
//! - **push mode** ([`InputStream::new`]):
//!   bytes are handed over with [`feed`](InputStream::feed)
//!   as they become available,
//!   and [`finish`](InputStream::finish) announces that no more will follow.
//!   Readers which run out of bytes suspend and can be resumed
//!   after the next `feed`.
//! - **pull mode** ([`InputStream::from_reader`]):
//!   bytes are fetched on demand from a [`Read`] source,
//!   and the end of that source is the end of the stream.
//!
//! Readers peek at the available bytes,
//! and commit to them with [`consume`](InputStream::consume).
//! A [`Mark`] retains every byte after it,
//! so that it can be [put back](InputStream::putback) later.

use snafu::{Backtrace, ResultExt, Snafu};
use std::fmt;
use std::io::{self, Read};

#[cfg(feature = "deflate")]
use flate2::{Decompress, FlushDecompress, Status};

/// The number of bytes requested from a pull source at once.
const PULL_CHUNK_SIZE: usize = 8192;

/// Bytes before the cursor are only dropped above this amount.
const COMPACT_THRESHOLD: usize = 16384;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The underlying data source failed.
    #[snafu(display("Could not read from the data source"))]
    ReadSource {
        source: io::Error,
        backtrace: Backtrace,
    },
    /// The compressed part of the stream is not valid deflate data.
    #[snafu(display("Could not inflate the data set"))]
    Inflate {
        source: io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A position in the stream which can be returned to.
///
/// Obtained with [`InputStream::mark`],
/// and given back with either [`InputStream::putback`]
/// or [`InputStream::release`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct Mark(u64);

impl Mark {
    /// The absolute stream position of this mark.
    pub fn position(&self) -> u64 {
        self.0
    }
}

#[cfg(feature = "deflate")]
struct Inflater {
    decompress: Decompress,
    /// compressed bytes not taken by the decompressor yet
    pending: Vec<u8>,
    done: bool,
}

/// A buffered DICOM byte source with peeking and putback.
pub struct InputStream {
    /// retained bytes, `buf[pos..]` are not consumed yet
    buf: Vec<u8>,
    pos: usize,
    /// absolute position of `buf[0]`
    base: u64,
    /// outstanding marks, as absolute positions
    marks: Vec<u64>,
    /// pull mode source
    source: Option<Box<dyn Read>>,
    /// no more bytes will be added to the buffer
    finished: bool,
    #[cfg(feature = "deflate")]
    inflater: Option<Inflater>,
}

impl fmt::Debug for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("InputStream")
            .field("position", &self.tell())
            .field("available", &self.avail())
            .field("marks", &self.marks)
            .field("pull", &self.source.is_some())
            .field("finished", &self.finished)
            .field("inflating", &self.is_inflating())
            .finish()
    }
}

impl Default for InputStream {
    fn default() -> Self {
        InputStream::new()
    }
}

impl InputStream {
    /// Create an empty stream in push mode.
    pub fn new() -> Self {
        InputStream {
            buf: Vec::new(),
            pos: 0,
            base: 0,
            marks: Vec::new(),
            source: None,
            finished: false,
            #[cfg(feature = "deflate")]
            inflater: None,
        }
    }

    /// Create a stream in pull mode,
    /// fetching bytes from the given reader on demand.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + 'static,
    {
        InputStream {
            source: Some(Box::new(reader)),
            ..InputStream::new()
        }
    }

    /// Create a finished stream over the given bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        InputStream {
            buf: bytes.into(),
            finished: true,
            ..InputStream::new()
        }
    }

    /// Hand over more bytes to a stream in push mode.
    ///
    /// Bytes fed after [`finish`](InputStream::finish) are ignored.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.compact();
        self.ingest(bytes)
    }

    /// Announce that no more bytes will be fed.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Whether no more bytes will ever be added to the buffer.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether this stream pulls its bytes from a reader.
    pub fn is_pull(&self) -> bool {
        self.source.is_some()
    }

    /// The number of bytes available without further input.
    pub fn avail(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the end of the stream was reached:
    /// the stream is finished and all its bytes were consumed.
    pub fn eos(&self) -> bool {
        self.finished && self.avail() == 0
    }

    /// The absolute position of the cursor,
    /// in bytes since the beginning of the stream.
    ///
    /// Once inflation has started,
    /// positions count inflated bytes.
    pub fn tell(&self) -> u64 {
        self.base + self.pos as u64
    }

    /// Try to make at least `n` bytes available.
    ///
    /// In pull mode this reads from the source until
    /// enough bytes are buffered or the source ends.
    /// In push mode nothing is read.
    /// Returns the number of bytes available afterwards,
    /// which may be lower than `n`.
    pub fn fill(&mut self, n: usize) -> Result<usize> {
        if self.source.is_none() || self.finished {
            return Ok(self.avail());
        }
        self.compact();
        let mut chunk = [0u8; PULL_CHUNK_SIZE];
        while self.avail() < n && !self.finished {
            let read = match self.source.as_mut() {
                Some(source) => match source.read(&mut chunk) {
                    Ok(read) => read,
                    Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e).context(ReadSourceSnafu),
                },
                None => 0,
            };
            if read == 0 {
                self.finished = true;
            } else {
                self.ingest(&chunk[..read])?;
            }
        }
        Ok(self.avail())
    }

    /// The bytes available without further input, starting at the cursor.
    pub fn peek(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Move the cursor forward by `n` bytes,
    /// at most up to the bytes available.
    /// Returns the number of bytes effectively consumed.
    pub fn consume(&mut self, n: usize) -> usize {
        let n = n.min(self.avail());
        self.pos += n;
        n
    }

    /// Set a mark at the current position.
    ///
    /// No byte after an outstanding mark is ever dropped from the buffer.
    pub fn mark(&mut self) -> Mark {
        let at = self.tell();
        self.marks.push(at);
        Mark(at)
    }

    /// Return the cursor to the given mark, releasing it.
    pub fn putback(&mut self, mark: Mark) {
        self.pos = (mark.0 - self.base) as usize;
        self.release(mark);
    }

    /// Release the given mark without moving the cursor.
    pub fn release(&mut self, mark: Mark) {
        if let Some(i) = self.marks.iter().rposition(|&m| m == mark.0) {
            self.marks.remove(i);
        }
    }

    /// Whether the bytes after the cursor are being inflated.
    pub fn is_inflating(&self) -> bool {
        #[cfg(feature = "deflate")]
        {
            self.inflater.is_some()
        }
        #[cfg(not(feature = "deflate"))]
        {
            false
        }
    }

    /// Interpret every byte after the cursor
    /// (including the ones still to come)
    /// as a raw deflate stream,
    /// as mandated by the Deflated Explicit VR Little Endian transfer syntax.
    ///
    /// Outstanding marks are dropped.
    #[cfg(feature = "deflate")]
    pub fn start_inflate(&mut self) -> Result<()> {
        if self.inflater.is_some() {
            return Ok(());
        }
        let compressed = self.buf.split_off(self.pos);
        self.marks.clear();
        self.inflater = Some(Inflater {
            decompress: Decompress::new(false),
            pending: Vec::new(),
            done: false,
        });
        self.ingest(&compressed)
    }

    fn ingest(&mut self, bytes: &[u8]) -> Result<()> {
        #[cfg(feature = "deflate")]
        {
            if let Some(inflater) = self.inflater.as_mut() {
                return inflate_into(inflater, bytes, &mut self.buf);
            }
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Drop consumed bytes which are not retained by a mark.
    fn compact(&mut self) {
        let retain_from = self
            .marks
            .iter()
            .map(|&m| (m - self.base) as usize)
            .min()
            .unwrap_or(self.pos)
            .min(self.pos);
        if retain_from >= COMPACT_THRESHOLD {
            self.buf.drain(..retain_from);
            self.pos -= retain_from;
            self.base += retain_from as u64;
        }
    }
}

#[cfg(feature = "deflate")]
fn inflate_into(inflater: &mut Inflater, bytes: &[u8], out: &mut Vec<u8>) -> Result<()> {
    if inflater.done {
        return Ok(());
    }
    inflater.pending.extend_from_slice(bytes);
    let mut consumed_total = 0;
    while consumed_total < inflater.pending.len() {
        let input = &inflater.pending[consumed_total..];
        out.reserve(input.len().saturating_mul(4).max(256));
        let in_before = inflater.decompress.total_in();
        let out_before = inflater.decompress.total_out();
        let status = inflater
            .decompress
            .decompress_vec(input, out, FlushDecompress::None)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            .context(InflateSnafu)?;
        let consumed = (inflater.decompress.total_in() - in_before) as usize;
        let produced = inflater.decompress.total_out() - out_before;
        consumed_total += consumed;
        if status == Status::StreamEnd {
            // anything after the end of the deflate stream is ignored
            inflater.done = true;
            inflater.pending.clear();
            return Ok(());
        }
        if consumed == 0 && produced == 0 {
            // wait for more input
            break;
        }
    }
    inflater.pending.drain(..consumed_total);
    Ok(())
}

/// Reading an input stream only yields the bytes already available,
/// so that an exhausted buffer reads as the end of file.
impl Read for InputStream {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.peek();
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.pos += n;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_mode_accumulates_bytes() {
        let mut stream = InputStream::new();
        assert_eq!(stream.avail(), 0);
        assert!(!stream.eos());

        stream.feed(&[1, 2, 3]).unwrap();
        stream.feed(&[4, 5]).unwrap();
        assert_eq!(stream.peek(), &[1, 2, 3, 4, 5]);
        assert_eq!(stream.consume(2), 2);
        assert_eq!(stream.tell(), 2);
        assert_eq!(stream.peek(), &[3, 4, 5]);

        // fill never blocks in push mode
        assert_eq!(stream.fill(100).unwrap(), 3);

        stream.finish();
        assert!(!stream.eos());
        assert_eq!(stream.consume(10), 3);
        assert!(stream.eos());
    }

    #[test]
    fn putback_restores_position() {
        let mut stream = InputStream::from_bytes(vec![0x10, 0x20, 0x30, 0x40]);
        stream.consume(1);
        let mark = stream.mark();
        assert_eq!(mark.position(), 1);

        let mut two = [0u8; 2];
        stream.read_exact(&mut two).unwrap();
        assert_eq!(two, [0x20, 0x30]);
        assert_eq!(stream.tell(), 3);

        stream.putback(mark);
        assert_eq!(stream.tell(), 1);
        assert_eq!(stream.peek(), &[0x20, 0x30, 0x40]);
    }

    #[test]
    fn reading_past_the_buffer_is_eof() {
        let mut stream = InputStream::new();
        stream.feed(&[1, 2]).unwrap();
        let mut four = [0u8; 4];
        let e = stream.read_exact(&mut four).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn pull_mode_fills_on_demand() {
        let data: Vec<u8> = (0..=255).collect();
        let mut stream = InputStream::from_reader(io::Cursor::new(data));
        assert!(stream.is_pull());
        assert_eq!(stream.avail(), 0);
        assert!(stream.fill(10).unwrap() >= 10);
        assert_eq!(&stream.peek()[..3], &[0, 1, 2]);
        stream.consume(250);
        assert_eq!(stream.fill(10).unwrap(), 6);
        assert!(stream.is_finished());
        stream.consume(6);
        assert!(stream.eos());
    }

    #[test]
    fn marks_survive_compaction() {
        let mut stream = InputStream::new();
        stream.feed(&vec![7u8; COMPACT_THRESHOLD]).unwrap();
        stream.consume(10);
        let mark = stream.mark();
        stream.consume(COMPACT_THRESHOLD - 10);
        stream.feed(&[1, 2, 3]).unwrap();
        assert_eq!(stream.tell(), COMPACT_THRESHOLD as u64);
        stream.putback(mark);
        assert_eq!(stream.tell(), 10);
        assert_eq!(stream.avail(), COMPACT_THRESHOLD - 10 + 3);

        // without marks, the consumed bytes can go
        stream.consume(COMPACT_THRESHOLD - 10);
        stream.feed(&[4]).unwrap();
        assert_eq!(stream.peek(), &[1, 2, 3, 4]);
        assert_eq!(stream.tell(), COMPACT_THRESHOLD as u64);
    }

    #[cfg(feature = "deflate")]
    #[test]
    fn inflates_the_rest_of_the_stream() {
        use flate2::write::DeflateEncoder;
        use flate2::Compression;
        use std::io::Write;

        let payload = b"deflated explicit VR little endian".repeat(20);
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload).unwrap();
        let compressed = encoder.finish().unwrap();

        let mut stream = InputStream::new();
        stream.feed(b"META").unwrap();
        stream.feed(&compressed[..5]).unwrap();
        stream.consume(4);
        stream.start_inflate().unwrap();
        assert!(stream.is_inflating());
        for chunk in compressed[5..].chunks(7) {
            stream.feed(chunk).unwrap();
        }
        stream.finish();
        assert_eq!(stream.peek(), &payload[..]);
        assert_eq!(stream.tell(), 4);
    }
}
