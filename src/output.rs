//! Output management module
//!
//! Writes resolved lines to the output sink one at a time. Each line is
//! flushed as soon as it is written so a downstream reader sees it right away.

use std::io::{BufWriter, Write};

/// Buffer size for assembling a line before it is flushed
const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Buffered line writer over any sink
pub struct OutputWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer
    pub fn new(sink: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, sink),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write a line followed by `\n` and flush it to the sink
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush buffered lines to the sink
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
