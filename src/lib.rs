//! # Wordlist Check
//!
//! Line-oriented validator and normalizer for wordlist files.
//!
//! ## Rules
//!
//! - Trailing whitespace is removed from every line
//! - Blank lines and lines starting with `#` are passed through
//! - Other lines are trimmed and must be a single alphabetic word
//! - Words are title-cased: first letter uppercase, the rest lowercase
//! - A word may appear only once
//!
//! The first invalid or duplicate word halts the run. Output for earlier lines
//! has already been written.
//!
//! ## Example
//!
//! ```rust
//! use wordlist_check::processor::check;
//!
//! let mut output = Vec::new();
//! check("# fruit\n\napple\n  BANANA\n".as_bytes(), &mut output).unwrap();
//! assert_eq!(output, b"# fruit\n\nApple\nBanana\n");
//! ```

pub mod cli;
pub mod dedup;
pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod processor;
pub mod stats;
pub mod wordlist;

pub use cli::Args;
pub use error::{CheckError, Diagnostic};
pub use processor::{check, LineProcessor, ProcessedLine, Step};
pub use wordlist::Wordlist;
