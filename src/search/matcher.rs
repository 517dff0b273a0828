//! ASCII case-insensitive literal matching.
//!
//! Only ASCII letters fold; every other byte must match exactly. The result does
//! not depend on the locale or on the document being valid UTF-8.

use memchr::{memchr, memchr2};

/// True when `needle` matches `haystack` at `offset`, ignoring ASCII case.
///
/// An empty needle never matches.
pub fn matches_at(haystack: &[u8], offset: usize, needle: &[u8]) -> bool {
    if needle.is_empty() {
        return false;
    }
    match haystack.get(offset..) {
        Some(rest) if rest.len() >= needle.len() => {
            rest[..needle.len()].eq_ignore_ascii_case(needle)
        }
        _ => false,
    }
}

/// Offset of the first case-insensitive occurrence of `needle` at or after `from`.
///
/// Candidate positions are located with memchr on both cases of the first byte.
pub fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    let first = *needle.first()?;
    let lower = first.to_ascii_lowercase();
    let upper = first.to_ascii_uppercase();

    let mut pos = from;
    while pos + needle.len() <= haystack.len() {
        let window = &haystack[pos..=haystack.len() - needle.len()];
        let candidate = if lower == upper {
            memchr(lower, window)
        } else {
            memchr2(lower, upper, window)
        };

        let at = pos + candidate?;
        if haystack[at..at + needle.len()].eq_ignore_ascii_case(needle) {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_at_ignores_ascii_case() {
        let text = b"Hello World";
        assert!(matches_at(text, 0, b"hello"));
        assert!(matches_at(text, 6, b"WORLD"));
        assert!(!matches_at(text, 1, b"hello"));
        assert!(!matches_at(text, 8, b"world"));
        assert!(!matches_at(text, 50, b"x"));
        assert!(!matches_at(text, 0, b""));
    }

    #[test]
    fn test_find_from() {
        let text = b"foo FOO fOo bar";
        assert_eq!(find_from(text, b"foo", 0), Some(0));
        assert_eq!(find_from(text, b"foo", 1), Some(4));
        assert_eq!(find_from(text, b"FOO", 5), Some(8));
        assert_eq!(find_from(text, b"foo", 9), None);
        assert_eq!(find_from(text, b"BAR", 0), Some(12));
    }

    #[test]
    fn test_find_from_edges() {
        assert_eq!(find_from(b"abc", b"", 0), None);
        assert_eq!(find_from(b"", b"a", 0), None);
        assert_eq!(find_from(b"abc", b"abcd", 0), None);
        assert_eq!(find_from(b"abc", b"c", 3), None);
        assert_eq!(find_from(b"abc", b"c", 100), None);
        assert_eq!(find_from(b"abc", b"abc", 0), Some(0));
    }

    #[test]
    fn test_non_letters_match_exactly() {
        assert_eq!(find_from(b"a-1 A_1", b"a_1", 0), Some(4));
        assert_eq!(find_from(b"[x]", b"[X]", 0), Some(0));
        // Non-ASCII bytes are not folded
        assert_eq!(find_from("Ärger".as_bytes(), "ä".as_bytes(), 0), None);
        assert_eq!(find_from("Ärger".as_bytes(), "Ä".as_bytes(), 0), Some(0));
    }

    #[test]
    fn test_partial_prefix_then_match() {
        assert_eq!(find_from(b"fofofoo", b"foo", 0), Some(4));
    }
}
