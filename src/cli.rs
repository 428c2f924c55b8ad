//! Command-line interface definition for wordlist-check
//!
//! The checking rules are fixed; the only option controls logging.

use clap::Parser;

/// Wordlist checker for stdin/stdout pipelines
///
/// Reads a wordlist on stdin and writes the corrected list to stdout.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-check",
    author = "m0h1nd4",
    version,
    about = "Validate and normalize a wordlist read from stdin",
    long_about = r#"
Reads a wordlist on stdin and writes the corrected list to stdout.

  - Leading and trailing whitespace is removed
  - Blank lines and lines starting with # are kept as they are
  - Every other line must be a single alphabetic word
  - Words are title-cased (Apple, Banana, ...)
  - A word may appear only once

The first invalid or duplicate word stops the run with a message on stderr
and exit status 1.

EXAMPLES:
    # Check a wordlist
    wordlist-check < words.list

    # Rewrite a wordlist in place
    wordlist-check < words.list | sponge words.list
"#
)]
pub struct Args {
    /// Verbose mode - debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Default log filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["wordlist-check"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_verbose() {
        let args = Args::try_parse_from(["wordlist-check", "-v"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_rejects_file_argument() {
        assert!(Args::try_parse_from(["wordlist-check", "words.list"]).is_err());
    }
}
