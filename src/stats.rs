//! Run statistics
//!
//! Counters collected over a single pass. They are reported through the log
//! facade and never reach stdout.

use std::time::{Duration, Instant};

/// Counters for one checker run
#[derive(Debug, Clone)]
pub struct RunStats {
    pub total_lines: u64,
    pub blank_lines: u64,
    pub comment_lines: u64,
    pub words: u64,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            blank_lines: 0,
            comment_lines: 0,
            words: 0,
            start_time: Instant::now(),
        }
    }

    pub fn add_line(&mut self) {
        self.total_lines += 1;
    }

    pub fn add_blank(&mut self) {
        self.blank_lines += 1;
    }

    pub fn add_comment(&mut self) {
        self.comment_lines += 1;
    }

    pub fn add_word(&mut self) {
        self.words += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log final statistics at debug level
    pub fn log_summary(&self) {
        log::debug!(
            "Checked {} lines ({} words, {} comments, {} blank) in {:?}",
            format_number(self.total_lines),
            format_number(self.words),
            format_number(self.comment_lines),
            format_number(self.blank_lines),
            self.elapsed(),
        );
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
