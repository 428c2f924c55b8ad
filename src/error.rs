//! Error types for wordlist checking
//!
//! A [`Diagnostic`] is the single message a rejected wordlist produces. Its
//! `Display` form is the exact text written to stderr. [`CheckError`] wraps it
//! together with the I/O failures that can also end a run.

use thiserror::Error;

/// Why a content line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Content line holds a character that is not alphabetic
    #[error("Non-alphabetic word found on line {line}: {text}")]
    NonAlphabetic {
        /// 1-based input line number
        line: u64,
        /// Line content after whitespace trimming, before casing
        text: String,
    },

    /// Content line normalizes to a word emitted earlier in the run
    #[error("Duplicate word found on line {line}: {word}")]
    Duplicate {
        /// 1-based input line number
        line: u64,
        /// The normalized (title-cased) word
        word: String,
    },
}

impl Diagnostic {
    /// Line number the diagnostic refers to
    pub fn line(&self) -> u64 {
        match self {
            Diagnostic::NonAlphabetic { line, .. } | Diagnostic::Duplicate { line, .. } => *line,
        }
    }
}

/// Everything that halts a run
#[derive(Debug, Error)]
pub enum CheckError {
    /// A content line failed validation or duplicate detection
    #[error(transparent)]
    Rejected(#[from] Diagnostic),

    /// Reading input or writing output failed
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// A line is not valid UTF-8 after decoding
    #[error("invalid UTF-8 on line {line}")]
    InvalidUtf8 {
        /// 1-based input line number
        line: u64,
    },
}

/// Result alias for checker operations
pub type CheckResult<T> = Result<T, CheckError>;
