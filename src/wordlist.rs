//! Loading checked wordlists
//!
//! A wordlist read at runtime is stored in a single `String`; words are
//! borrowed slices into it rather than a `Vec<String>`.

use crate::normalize::COMMENT_MARKER;

use std::io::{self, Read};

/// A wordlist loaded from a stream
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    storage: String,
}

impl Wordlist {
    /// Read a whole stream into a wordlist
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut storage = String::new();
        reader.read_to_string(&mut storage)?;
        Ok(Self { storage })
    }

    /// Iterate the words, skipping blank and comment lines
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.storage
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with(COMMENT_MARKER))
    }

    pub fn len(&self) -> usize {
        self.words().count()
    }

    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }
}

impl std::str::FromStr for Wordlist {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            storage: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::check;

    #[test]
    fn test_words_skip_structural_lines() {
        let list = Wordlist::from_reader("# fruits\n\nApple\n  Banana \n\n# end\n".as_bytes()).unwrap();
        let words: Vec<&str> = list.words().collect();

        assert_eq!(words, vec!["Apple", "Banana"]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_empty_wordlist() {
        let list: Wordlist = "# only a comment\n\n".parse().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_loads_checked_output() {
        let mut checked = Vec::new();
        check("# list\n\nkiwi\n  LIME\nmango\n".as_bytes(), &mut checked).unwrap();

        let list = Wordlist::from_reader(checked.as_slice()).unwrap();
        let words: Vec<&str> = list.words().collect();
        assert_eq!(words, vec!["Kiwi", "Lime", "Mango"]);
    }
}
