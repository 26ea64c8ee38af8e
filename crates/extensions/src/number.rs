//! Decimal number formatting.
//!
//! Separators and fraction-digit bounds are carried by an explicit
//! [`NumberFormat`] rather than read from the process locale, so the output
//! for a given format is byte-exact on every platform.

use serde::{Deserialize, Serialize};

/// Default maximum fraction digits for [`F64FormatExt::format_with_dot_separator_text_max`].
pub const DEFAULT_DOT_FRACTION_DIGITS: usize = 2;
/// Default maximum fraction digits for [`F64FormatExt::format_text`].
pub const DEFAULT_TEXT_FRACTION_DIGITS: usize = 2;
/// Default maximum fraction digits for [`F64FormatExt::format_with_space_separator_text`].
pub const DEFAULT_SPACE_FRACTION_DIGITS: usize = 0;

// =============================================================================
// Number Format
// =============================================================================

/// How a decimal number is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormat {
    /// Fraction digits always shown, padding with zeros (default: 0)
    pub min_fraction_digits: usize,
    /// Fraction digits the value is rounded to (default: 3)
    pub max_fraction_digits: usize,
    /// Separator between integer and fraction (default: '.')
    pub decimal_separator: char,
    /// Separator between groups of three integer digits (default: ',')
    pub grouping_separator: Option<char>,
    /// Text used when the value cannot be rendered (default: "0.0")
    pub fallback: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            decimal_separator: '.',
            grouping_separator: Some(','),
            fallback: "0.0".to_string(),
        }
    }
}

impl NumberFormat {
    /// Decimal style with the conventional `,` grouping and `.` decimal
    /// separators.
    pub fn locale_default() -> Self {
        Self::default()
    }

    /// Exactly one fraction digit, `.` separator, no grouping.
    pub fn dot_one_decimal() -> Self {
        Self {
            min_fraction_digits: 1,
            max_fraction_digits: 1,
            grouping_separator: None,
            ..Self::default()
        }
    }

    /// Up to `max_fraction_digits`, `.` separator, no grouping.
    pub fn dot(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
            grouping_separator: None,
            ..Self::default()
        }
    }

    /// Locale-default separators with at least one fraction digit.
    pub fn grouped(max_fraction_digits: usize) -> Self {
        Self {
            min_fraction_digits: 1,
            max_fraction_digits,
            fallback: "0,0".to_string(),
            ..Self::locale_default()
        }
    }

    /// Space-grouped integer part and `.` separator.
    pub fn space_grouped(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
            grouping_separator: Some(' '),
            ..Self::default()
        }
    }

    /// Sets the minimum and maximum fraction digits.
    pub fn with_fraction_digits(mut self, min: usize, max: usize) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    /// Sets the separator between integer and fraction.
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Sets the group separator; `None` disables grouping.
    pub fn with_grouping_separator(mut self, separator: Option<char>) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Sets the text used for NaN and infinite values.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Renders `value`, or `None` if it is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use base_type_extensions::NumberFormat;
    ///
    /// let format = NumberFormat::space_grouped(2);
    /// assert_eq!(format.format(1234567.891).as_deref(), Some("1 234 567.89"));
    /// assert_eq!(format.format(f64::NAN), None);
    /// ```
    pub fn format(&self, value: f64) -> Option<String> {
        if !value.is_finite() {
            return None;
        }

        let max = self.max_fraction_digits;
        let min = self.min_fraction_digits.min(max);
        let rendered = format!("{:.*}", max, value.abs());
        let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        let mut fraction = fraction.to_string();
        while fraction.len() > min && fraction.ends_with('0') {
            fraction.pop();
        }

        let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
        let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 2);
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        match self.grouping_separator {
            Some(separator) => out.push_str(&group_digits(integer, separator)),
            None => out.push_str(integer),
        }
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(&fraction);
        }
        Some(out)
    }

    /// Renders `value`, substituting [`NumberFormat::fallback`] when it
    /// cannot be represented.
    pub fn format_or_fallback(&self, value: f64) -> String {
        match self.format(value) {
            Some(text) => text,
            None => {
                tracing::warn!(value, fallback = %self.fallback, "number not representable, using fallback");
                self.fallback.clone()
            }
        }
    }
}

/// Inserts `separator` between groups of three digits, counting from the
/// right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// f64 Extensions
// =============================================================================

/// Formatting shortcuts for `f64`.
pub trait F64FormatExt {
    /// Renders with the given format, falling back on non-finite input.
    fn format_with(&self, format: &NumberFormat) -> String;

    /// Exactly one fraction digit with a `.` separator, e.g. `"1234.6"`.
    fn format_with_dot_separator_text(&self) -> String;

    /// Up to `max_fraction_digits` with a `.` separator, e.g. `"1234.57"`.
    fn format_with_dot_separator_text_max(&self, max_fraction_digits: usize) -> String;

    /// Locale-default grouping with at least one fraction digit, e.g.
    /// `"1,234.57"`. Falls back to `"0,0"`.
    fn format_text(&self, max_fraction_digits: usize) -> String;

    /// Space grouping with a `.` separator, e.g. `"1 235"`.
    fn format_with_space_separator_text(&self, max_fraction_digits: usize) -> String;

    /// Truncates to one decimal place. Whole results render without a
    /// fraction (`"10"`), others use a `,` separator (`"10,5"`).
    fn rounded_price_string(&self) -> String;
}

impl F64FormatExt for f64 {
    fn format_with(&self, format: &NumberFormat) -> String {
        format.format_or_fallback(*self)
    }

    fn format_with_dot_separator_text(&self) -> String {
        self.format_with(&NumberFormat::dot_one_decimal())
    }

    fn format_with_dot_separator_text_max(&self, max_fraction_digits: usize) -> String {
        self.format_with(&NumberFormat::dot(max_fraction_digits))
    }

    fn format_text(&self, max_fraction_digits: usize) -> String {
        self.format_with(&NumberFormat::grouped(max_fraction_digits))
    }

    fn format_with_space_separator_text(&self, max_fraction_digits: usize) -> String {
        self.format_with(&NumberFormat::space_grouped(max_fraction_digits))
    }

    fn rounded_price_string(&self) -> String {
        if !self.is_finite() {
            return "0".to_string();
        }
        let rounded = (self * 10.0).trunc() / 10.0;
        if rounded == 0.0 {
            "0".to_string()
        } else if rounded.fract() == 0.0 {
            format!("{rounded:.0}")
        } else {
            format!("{rounded:.1}").replace('.', ",")
        }
    }
}
