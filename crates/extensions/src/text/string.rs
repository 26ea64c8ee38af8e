//! String conversion and validation utilities.

use url::Url;

/// Extension trait for string-like receivers.
///
/// # Examples
///
/// ```
/// use base_type_extensions::StringExt;
///
/// assert_eq!("A1B2C3".digits(), "123");
/// assert!("123".is_only_digits());
/// assert_eq!("hello".uppercased_first_letter(), "Hello");
/// assert_eq!("".change_empty("default"), "default");
/// ```
pub trait StringExt {
    /// Parses the string as a URL.
    fn as_url(&self) -> Option<Url>;

    /// Parses the string as a float, yielding `0.0` when it is not a number.
    /// Surrounding whitespace makes it not a number.
    fn to_double(&self) -> f64;

    /// Splits into pieces of `size` chars; the last piece holds the
    /// remainder.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn chunked(&self, size: usize) -> Vec<String>;

    /// Uppercases the first char and leaves the rest untouched.
    fn uppercased_first_letter(&self) -> String;

    /// Keeps only the decimal digits `0`-`9`.
    fn digits(&self) -> String;

    /// Whether every char is a decimal digit. True for the empty string.
    fn is_only_digits(&self) -> bool;

    /// Whether the string parses as a URL and starts with `http`.
    fn is_remote_url(&self) -> bool;

    /// Returns `text` when the string is empty, otherwise the string itself.
    fn change_empty(&self, text: &str) -> String;

    /// Appends `other` only when `condition` holds.
    fn appending_if(&self, other: &str, condition: bool) -> String;
}

impl<S: AsRef<str> + ?Sized> StringExt for S {
    fn as_url(&self) -> Option<Url> {
        Url::parse(self.as_ref()).ok()
    }

    fn to_double(&self) -> f64 {
        self.as_ref().parse().unwrap_or(0.0)
    }

    #[track_caller]
    fn chunked(&self, size: usize) -> Vec<String> {
        assert!(size > 0, "chunk size must be greater than zero");
        let chars: Vec<char> = self.as_ref().chars().collect();
        chars
            .chunks(size)
            .map(|chunk| chunk.iter().collect())
            .collect()
    }

    fn uppercased_first_letter(&self) -> String {
        let mut chars = self.as_ref().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn digits(&self) -> String {
        self.as_ref().chars().filter(char::is_ascii_digit).collect()
    }

    fn is_only_digits(&self) -> bool {
        self.as_ref().chars().all(|c| c.is_ascii_digit())
    }

    fn is_remote_url(&self) -> bool {
        let s = self.as_ref();
        s.starts_with("http") && Url::parse(s).is_ok()
    }

    fn change_empty(&self, text: &str) -> String {
        let s = self.as_ref();
        if s.is_empty() {
            text.to_string()
        } else {
            s.to_string()
        }
    }

    fn appending_if(&self, other: &str, condition: bool) -> String {
        let s = self.as_ref();
        if condition {
            format!("{s}{other}")
        } else {
            s.to_string()
        }
    }
}
