//! Character-offset indexing for `str`.
//!
//! Offsets count `char`s, not bytes. The plain accessors treat an
//! out-of-range offset as a caller bug and panic; the `get_*` accessors
//! return `None` instead.

use std::ops::{Bound, RangeBounds};

/// Integer-offset access into a string.
///
/// # Examples
///
/// ```
/// use base_type_extensions::CharIndexExt;
///
/// let s = "Hello, World!";
/// assert_eq!(s.char_at(1), 'e');
/// assert_eq!(s.substring(7..12), "World");
/// assert_eq!(s.substring(7..=11), "World");
/// assert_eq!(s.substring(7..), "World!");
/// assert_eq!(s.substring(..=4), "Hello");
/// assert_eq!(s.substring(..5), "Hello");
/// ```
pub trait CharIndexExt {
    /// Returns the char at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not less than the char count.
    fn char_at(&self, offset: usize) -> char;

    /// Returns the char at `offset`, or `None` if out of range.
    fn get_char_at(&self, offset: usize) -> Option<char>;

    /// Returns the substring covering the char offsets in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range starts after it ends or extends past the char
    /// count.
    fn substring<R: RangeBounds<usize>>(&self, range: R) -> &str;

    /// Returns the substring covering `range`, or `None` if out of range.
    fn get_substring<R: RangeBounds<usize>>(&self, range: R) -> Option<&str>;
}

impl CharIndexExt for str {
    #[track_caller]
    fn char_at(&self, offset: usize) -> char {
        match self.get_char_at(offset) {
            Some(c) => c,
            None => panic!(
                "char offset {} out of bounds for string of {} chars",
                offset,
                self.chars().count()
            ),
        }
    }

    fn get_char_at(&self, offset: usize) -> Option<char> {
        self.chars().nth(offset)
    }

    #[track_caller]
    fn substring<R: RangeBounds<usize>>(&self, range: R) -> &str {
        let (start, end) = char_bounds(&range);
        match slice_chars(self, start, end) {
            Some(s) => s,
            None => panic!(
                "char range {}..{} out of bounds for string of {} chars",
                start,
                end.map_or_else(|| "end".to_string(), |e| e.to_string()),
                self.chars().count()
            ),
        }
    }

    fn get_substring<R: RangeBounds<usize>>(&self, range: R) -> Option<&str> {
        let (start, end) = char_bounds(&range);
        slice_chars(self, start, end)
    }
}

fn slice_chars(s: &str, start: usize, end: Option<usize>) -> Option<&str> {
    if let Some(end) = end {
        if start > end {
            return None;
        }
    }

    let start_byte = byte_offset(s, start)?;
    let end_byte = match end {
        Some(end) => start_byte + byte_offset(&s[start_byte..], end - start)?,
        None => s.len(),
    };
    Some(&s[start_byte..end_byte])
}

/// Converts any range into a start offset and an exclusive end offset
/// (`None` for unbounded).
fn char_bounds<R: RangeBounds<usize>>(range: &R) -> (usize, Option<usize>) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => Some(e.saturating_add(1)),
        Bound::Excluded(&e) => Some(e),
        Bound::Unbounded => None,
    };
    (start, end)
}

/// Byte index of the `chars`-th char; the string length is a valid
/// position one past the last char.
fn byte_offset(s: &str, chars: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_at_ascii() {
        assert_eq!("Hello".char_at(0), 'H');
        assert_eq!("Hello".char_at(1), 'e');
        assert_eq!("Hello".char_at(4), 'o');
    }

    #[test]
    fn test_char_at_counts_chars_not_bytes() {
        let s = "привет";
        assert_eq!(s.char_at(2), 'и');
        assert_eq!("a€b".char_at(2), 'b');
    }

    #[test]
    #[should_panic(expected = "char offset 5 out of bounds for string of 5 chars")]
    fn test_char_at_past_end_panics() {
        "Hello".char_at(5);
    }

    #[test]
    fn test_get_char_at_out_of_range_is_none() {
        assert_eq!("Hello".get_char_at(5), None);
        assert_eq!("".get_char_at(0), None);
    }

    #[test]
    fn test_substring_all_range_shapes() {
        let s = "Hello, World!";
        assert_eq!(s.substring(7..12), "World");
        assert_eq!(s.substring(7..=11), "World");
        assert_eq!(s.substring(7..), "World!");
        assert_eq!(s.substring(..=4), "Hello");
        assert_eq!(s.substring(..5), "Hello");
        assert_eq!(s.substring(..), s);
    }

    #[test]
    fn test_substring_multibyte() {
        let s = "añb€c";
        assert_eq!(s.substring(1..4), "ñb€");
        assert_eq!(s.substring(3..), "€c");
        assert_eq!(s.substring(..=1), "añ");
    }

    #[test]
    fn test_substring_empty_ranges() {
        assert_eq!("abc".substring(3..3), "");
        assert_eq!("abc".substring(3..), "");
        assert_eq!("".substring(..), "");
    }

    #[test]
    #[should_panic(expected = "out of bounds for string of 3 chars")]
    fn test_substring_past_end_panics() {
        "abc".substring(1..5);
    }

    #[test]
    fn test_get_substring_rejects_bad_ranges() {
        assert_eq!("abc".get_substring(1..5), None);
        assert_eq!("abc".get_substring(4..), None);
        assert_eq!("abc".get_substring((Bound::Included(2), Bound::Excluded(1))), None);
        assert_eq!("abc".get_substring(1..2), Some("b"));
    }
}
