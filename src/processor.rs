//! Core processing engine
//!
//! A single sequential pass over the input. Each line is resolved to either an
//! output line or a halting [`Diagnostic`] before the next line is read.
//! Output for earlier lines is flushed before a halt is reported.

use crate::dedup::SeenWords;
use crate::error::{CheckResult, Diagnostic};
use crate::input::{decode, LineReader};
use crate::normalize::{classify, is_alphabetic_word, title_case, LineKind};
use crate::output::OutputWriter;
use crate::stats::RunStats;

use std::io::{Read, Write};

/// Output form of a resolved line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedLine<'a> {
    /// Blank or comment line, trailing whitespace removed
    Passthrough(&'a str),
    /// Title-cased content word
    Word(String),
}

impl ProcessedLine<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            ProcessedLine::Passthrough(line) => line,
            ProcessedLine::Word(word) => word,
        }
    }
}

/// Outcome of processing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    /// Emit the line and keep going
    Continue(ProcessedLine<'a>),
    /// Stop the run with this diagnostic
    Halt(Diagnostic),
}

/// Validates and normalizes wordlist lines
///
/// Holds the words seen so far; one processor is one run.
#[derive(Debug, Default)]
pub struct LineProcessor {
    seen: SeenWords,
    stats: RunStats,
}

impl LineProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a single raw line (without terminator) at 1-based `number`
    pub fn step<'a>(&mut self, number: u64, raw: &'a str) -> Step<'a> {
        self.stats.add_line();

        let word = match classify(raw) {
            LineKind::Blank => {
                log::trace!("line {}: blank", number);
                self.stats.add_blank();
                return Step::Continue(ProcessedLine::Passthrough(""));
            }
            LineKind::Comment(comment) => {
                log::trace!("line {}: comment", number);
                self.stats.add_comment();
                return Step::Continue(ProcessedLine::Passthrough(comment));
            }
            LineKind::Content(word) => word,
        };

        if !is_alphabetic_word(word) {
            return Step::Halt(Diagnostic::NonAlphabetic {
                line: number,
                text: word.to_string(),
            });
        }

        let normalized = title_case(word);
        if !self.seen.insert(&normalized) {
            return Step::Halt(Diagnostic::Duplicate {
                line: number,
                word: normalized,
            });
        }

        log::trace!("line {}: word {:?}", number, normalized);
        self.stats.add_word();
        Step::Continue(ProcessedLine::Word(normalized))
    }

    /// Run over a whole input stream, writing resolved lines to `output`
    ///
    /// Stops at the first rejected line, invalid UTF-8 line, or I/O failure.
    /// Everything written before that point has been flushed to `output`.
    pub fn run<R: Read, W: Write>(mut self, input: R, output: W) -> CheckResult<RunStats> {
        let mut out = OutputWriter::new(output);

        for line in LineReader::new(decode(input)?) {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    out.flush()?;
                    return Err(err);
                }
            };

            match self.step(line.number, &line.text) {
                Step::Continue(processed) => out.write_line(processed.as_str())?,
                Step::Halt(diagnostic) => {
                    out.flush()?;
                    log::debug!(
                        "Halting after {} output lines ({} bytes): {}",
                        out.lines_written(),
                        out.bytes_written(),
                        diagnostic
                    );
                    return Err(diagnostic.into());
                }
            }
        }

        out.flush()?;
        self.stats.log_summary();
        log::debug!(
            "Wrote {} lines ({} bytes), {} distinct words",
            out.lines_written(),
            out.bytes_written(),
            self.seen.len()
        );

        Ok(self.stats)
    }

    /// Get processing statistics
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Words emitted so far
    pub fn seen(&self) -> &SeenWords {
        &self.seen
    }
}

/// Check a wordlist stream with a fresh processor
pub fn check<R: Read, W: Write>(input: R, output: W) -> CheckResult<RunStats> {
    LineProcessor::new().run(input, output)
}
