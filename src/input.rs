//! Input decoding and line splitting
//!
//! The input stream is peeked for a byte-order mark and transcoded to UTF-8
//! before it is split into numbered lines. Streams without a BOM are passed
//! through untouched and must already be UTF-8.

use crate::error::{CheckError, CheckResult};

use bstr::ByteSlice;
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::io::{self, BufRead, BufReader, Read};

/// A decoded, buffered input stream
pub type DecodedInput<R> = BufReader<DecodeReaderBytes<BufReader<R>, Vec<u8>>>;

/// Detect BOM (Byte Order Mark) at the start of content
pub fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some(encoding_rs::UTF_8);
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some(encoding_rs::UTF_16BE);
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some(encoding_rs::UTF_16LE);
    }
    None
}

/// Wrap a raw stream so that it yields UTF-8 with any BOM removed
///
/// UTF-8 input is passed through byte for byte so that invalid sequences
/// are still seen by [`LineReader`]. UTF-16 input is transcoded; unpaired
/// surrogates become U+FFFD.
pub fn decode<R: Read>(reader: R) -> io::Result<DecodedInput<R>> {
    let mut buffered = BufReader::new(reader);
    let bom = detect_bom(buffered.fill_buf()?);

    match bom {
        Some(encoding) => log::debug!("Detected {} byte-order mark", encoding.name()),
        None => log::debug!("No byte-order mark, reading input as UTF-8"),
    }

    let decoder = DecodeReaderBytesBuilder::new()
        .encoding(bom)
        .bom_sniffing(true)
        .utf8_passthru(true)
        .strip_bom(true)
        .build(buffered);

    Ok(BufReader::new(decoder))
}

/// One input line with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: u64,
    /// Line content without its terminator
    pub text: String,
}

/// Iterator over the numbered lines of a UTF-8 stream
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A last line without a
/// terminator is still yielded.
pub struct LineReader<B> {
    reader: B,
    buffer: Vec<u8>,
    number: u64,
    /// Previous line ended in `\r`; a `\n` right after it belongs to it
    pending_cr: bool,
}

impl<B: BufRead> LineReader<B> {
    pub fn new(reader: B) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(256),
            number: 0,
            pending_cr: false,
        }
    }

    /// Fill the buffer with the next line. Returns `false` at end of input
    fn read_line(&mut self) -> io::Result<bool> {
        if self.pending_cr {
            self.pending_cr = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        let mut read_any = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(read_any); // EOF
            }
            read_any = true;

            match memchr::memchr2(b'\n', b'\r', available) {
                Some(end) => {
                    self.buffer.extend_from_slice(&available[..end]);
                    self.pending_cr = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.buffer.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<B: BufRead> Iterator for LineReader<B> {
    type Item = CheckResult<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();

        match self.read_line() {
            Ok(false) => None,
            Ok(true) => {
                self.number += 1;

                match self.buffer.to_str() {
                    Ok(text) => Some(Ok(Line {
                        number: self.number,
                        text: text.to_owned(),
                    })),
                    Err(_) => Some(Err(CheckError::InvalidUtf8 { line: self.number })),
                }
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
