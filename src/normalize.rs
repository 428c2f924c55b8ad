//! Line classification and word normalization
//!
//! Every input line is either structural (blank or `#` comment) and passed
//! through, or content that must be a single alphabetic word. Content words are
//! title-cased: first character uppercase, the rest forced to lowercase.

/// Marker that starts a comment line
pub const COMMENT_MARKER: char = '#';

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trailing whitespace is removed
    Blank,
    /// Starts with `#`; trailing whitespace removed, leading whitespace kept
    Comment(&'a str),
    /// Anything else, with whitespace removed on both ends
    Content(&'a str),
}

/// Classify a raw line (without its terminator)
///
/// Trailing whitespace is removed before anything else, so a whitespace-only
/// line is blank. Leading whitespace is only stripped from content lines; an
/// indented `#` is content, not a comment.
#[inline]
pub fn classify(raw: &str) -> LineKind<'_> {
    let trimmed = raw.trim_end();

    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(COMMENT_MARKER) {
        LineKind::Comment(trimmed)
    } else {
        LineKind::Content(trimmed.trim_start())
    }
}

/// Check that a word is non-empty and made only of alphabetic characters
///
/// Uses the Unicode `Alphabetic` property via [`char::is_alphabetic`].
#[inline]
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Title-case a word: uppercase first character, lowercase remainder
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&rest.to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t "), LineKind::Blank);
        assert_eq!(classify("\r"), LineKind::Blank);
    }

    #[test]
    fn test_classify_comment_keeps_leading_text() {
        assert_eq!(classify("# fruits  "), LineKind::Comment("# fruits"));
        assert_eq!(classify("#"), LineKind::Comment("#"));
    }

    #[test]
    fn test_indented_hash_is_content() {
        assert_eq!(classify("  # nope"), LineKind::Content("# nope"));
    }

    #[test]
    fn test_classify_content_trims_both_ends() {
        assert_eq!(classify("  apple  "), LineKind::Content("apple"));
        assert_eq!(classify("\tpear\r"), LineKind::Content("pear"));
    }

    #[test]
    fn test_alphabetic() {
        assert!(is_alphabetic_word("apple"));
        assert!(is_alphabetic_word("École"));
        assert!(is_alphabetic_word("Straße"));
        assert!(!is_alphabetic_word("apple2"));
        assert!(!is_alphabetic_word("ice cream"));
        assert!(!is_alphabetic_word("can't"));
        assert!(!is_alphabetic_word(""));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("apple"), "Apple");
        assert_eq!(title_case("BANANA"), "Banana");
        assert_eq!(title_case("mAcHiSmO"), "Machismo");
        assert_eq!(title_case("éCOLE"), "École");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_expanding_first_char() {
        assert_eq!(title_case("ßa"), "SSa");
    }
}
