//! Line-bounded FASTQ record reader.
//!
//! Reads four-line records into buffers owned by the reader and reused for
//! every record. Input may be plain text or gzip/BGZF; compression is
//! detected from the magic bytes, not the extension.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::core::record::Record;
use crate::validation::error::ValidationError;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const BUF_SIZE: usize = 128 * 1024;

/// Open a FASTQ file, decompressing gzip input transparently
///
/// # Errors
///
/// Returns `ValidationError::Open` if the file cannot be opened, or
/// `ValidationError::Io` if its first bytes cannot be read.
pub fn open_fastq(path: &Path) -> Result<Box<dyn BufRead>, ValidationError> {
    let file = File::open(path).map_err(|source| ValidationError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    wrap_reader(BufReader::with_capacity(BUF_SIZE, file))
}

/// Wrap an already buffered stream, peeking for gzip magic without consuming it
///
/// # Errors
///
/// Returns `ValidationError::Io` if the first bytes cannot be read.
pub fn wrap_reader<R: BufRead + 'static>(
    mut reader: R,
) -> Result<Box<dyn BufRead>, ValidationError> {
    let is_gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    if is_gzip {
        Ok(Box::new(BufReader::with_capacity(
            BUF_SIZE,
            MultiGzDecoder::new(reader),
        )))
    } else {
        Ok(Box::new(reader))
    }
}

/// Read the first line of a FASTQ file, terminator excluded.
///
/// Returns `Ok(None)` for an empty file.
///
/// # Errors
///
/// Returns `ValidationError::Open` if the file cannot be opened,
/// `ValidationError::LineTooLong` if the line exceeds `max_line_length`, or
/// `ValidationError::Io` on read failure.
pub fn first_line(
    path: &Path,
    max_line_length: usize,
) -> Result<Option<Vec<u8>>, ValidationError> {
    let mut reader = open_fastq(path)?;
    let mut buf = Vec::new();
    match read_line(&mut reader, &mut buf, max_line_length, 1)? {
        Line::Eof => Ok(None),
        Line::Read => {
            let len = strip_terminator(&buf).len();
            buf.truncate(len);
            Ok(Some(buf))
        }
    }
}

/// Result of reading one line
enum Line {
    Read,
    Eof,
}

/// Streams four-line records from a buffered reader
pub struct FastqReader<R> {
    reader: R,
    max_line_length: usize,
    header: Vec<u8>,
    sequence: Vec<u8>,
    separator: Vec<u8>,
    quality: Vec<u8>,
    /// 1-based number of the next line to be read
    line: u64,
    /// Bytes consumed so far
    offset: u64,
    records: u64,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R, max_line_length: usize) -> Self {
        Self {
            reader,
            max_line_length,
            header: Vec::new(),
            sequence: Vec::new(),
            separator: Vec::new(),
            quality: Vec::new(),
            line: 1,
            offset: 0,
            records: 0,
        }
    }

    /// Number of complete records read so far
    #[must_use]
    pub fn records_read(&self) -> u64 {
        self.records
    }

    /// Bytes consumed so far
    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.offset
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` when the stream ends on a record boundary.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TruncatedFile` if the stream ends inside a
    /// record, `ValidationError::LineTooLong` if a line exceeds the limit, or
    /// `ValidationError::Io` on read failure.
    pub fn next_record(&mut self) -> Result<Option<Record<'_>>, ValidationError> {
        let line = self.line;
        let offset = self.offset;

        if let Line::Eof = read_line(
            &mut self.reader,
            &mut self.header,
            self.max_line_length,
            line,
        )? {
            return Ok(None);
        }

        let bufs = [&mut self.sequence, &mut self.separator, &mut self.quality];
        for (i, buf) in (1u64..).zip(bufs) {
            let read = read_line(&mut self.reader, buf, self.max_line_length, line + i)?;
            if let Line::Eof = read {
                return Err(ValidationError::TruncatedFile { line });
            }
        }

        self.line += 4;
        self.offset += [&self.header, &self.sequence, &self.separator, &self.quality]
            .iter()
            .map(|b| b.len() as u64)
            .sum::<u64>();
        self.records += 1;

        Ok(Some(Record {
            header: strip_terminator(&self.header),
            sequence: strip_terminator(&self.sequence),
            separator: strip_terminator(&self.separator),
            quality: strip_terminator(&self.quality),
            line,
            offset,
        }))
    }
}

/// Read one raw line, terminator included, refusing lines over `max` bytes
fn read_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max: usize,
    line: u64,
) -> Result<Line, ValidationError> {
    buf.clear();
    let limit = max as u64 + 1;
    let n = reader.by_ref().take(limit).read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(Line::Eof);
    }
    if buf.last() != Some(&b'\n') && n as u64 == limit {
        return Err(ValidationError::LineTooLong { line, limit: max });
    }
    Ok(Line::Read)
}

fn strip_terminator(buf: &[u8]) -> &[u8] {
    buf.strip_suffix(b"\n").unwrap_or(buf)
}
