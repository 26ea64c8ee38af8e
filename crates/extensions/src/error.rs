//! Error types shared by the extension modules.
//!
//! [`CodedError`] is the structured error callers construct themselves: a
//! message, a namespacing domain, a numeric code and the call site it was
//! built at. [`DateParseError`] is returned by the `Result` flavour of date
//! parsing.

use std::fmt;
use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Code assigned to a [`CodedError`] when none is given.
pub const DEFAULT_ERROR_CODE: i64 = -1;

/// Source location an error was created at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSite {
    pub file: &'static str,
    /// Module path of the enclosing function, when known.
    pub function: Option<&'static str>,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    /// Captures the location of the caller.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            function: None,
            line: location.line(),
            column: location.column(),
        }
    }

    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "{}:{} in {}", self.file, self.line, function),
            None => write!(f, "{}:{}", self.file, self.line),
        }
    }
}

/// An error carrying a message, a domain tag, a numeric code and the place
/// it was created.
///
/// # Examples
///
/// ```
/// use base_type_extensions::CodedError;
///
/// let err = CodedError::new("File not found", "com.example.filesystem").with_code(404);
/// assert_eq!(err.to_string(), "File not found");
/// assert_eq!(err.code(), 404);
/// assert!(err.site().file.ends_with(".rs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct CodedError {
    message: String,
    domain: String,
    code: i64,
    site: CallSite,
}

impl CodedError {
    /// Creates an error with [`DEFAULT_ERROR_CODE`], recording the caller's
    /// file, line and column.
    #[track_caller]
    pub fn new(message: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::at(message, domain, CallSite::caller())
    }

    /// Creates an error with an explicit call site.
    pub fn at(message: impl Into<String>, domain: impl Into<String>, site: CallSite) -> Self {
        Self {
            message: message.into(),
            domain: domain.into(),
            code: DEFAULT_ERROR_CODE,
            site,
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn site(&self) -> &CallSite {
        &self.site
    }
}

/// Builds a [`CodedError`] that also records the enclosing function.
///
/// ```
/// use base_type_extensions::coded_error;
///
/// fn load() -> base_type_extensions::CodedError {
///     coded_error!("File not found", "com.example.filesystem", 404)
/// }
///
/// let err = load();
/// assert_eq!(err.code(), 404);
/// assert!(err.site().function.unwrap().ends_with("load"));
/// ```
#[macro_export]
macro_rules! coded_error {
    ($message:expr, $domain:expr $(,)?) => {
        $crate::error::CodedError::at(
            $message,
            $domain,
            $crate::error::CallSite::caller().with_function($crate::__function_path!()),
        )
    };
    ($message:expr, $domain:expr, $code:expr $(,)?) => {
        $crate::coded_error!($message, $domain).with_code($code)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(marker);
        name.strip_suffix("::marker").unwrap_or(name)
    }};
}

/// Error when no supported date format matches the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The input string is empty
    #[error("Empty date string")]
    Empty,
    /// Neither the internet date-time nor the medium format matched
    #[error("Unrecognized date format: '{0}'")]
    Unrecognized(String),
}

impl DateParseError {
    pub fn unrecognized(input: impl Into<String>) -> Self {
        Self::Unrecognized(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_code_and_records_this_file() {
        let err = CodedError::new("boom", "com.example.test");
        assert_eq!(err.code(), DEFAULT_ERROR_CODE);
        assert_eq!(err.domain(), "com.example.test");
        assert_eq!(err.message(), "boom");
        assert!(err.site().file.ends_with("error.rs"));
        assert_eq!(err.site().function, None);
    }

    #[test]
    fn test_new_records_caller_line() {
        let expected_line = line!() + 1;
        let err = CodedError::new("boom", "com.example.test");
        assert_eq!(err.site().line, expected_line);
    }

    #[test]
    fn test_display_is_message() {
        let err = CodedError::new("File not found", "fs").with_code(404);
        assert_eq!(err.to_string(), "File not found");
        assert_eq!(err.code(), 404);
    }

    #[test]
    fn test_macro_captures_function_path() {
        let err = coded_error!("boom", "com.example.test");
        let function = err.site().function.unwrap();
        assert!(function.contains("test_macro_captures_function_path"));
        assert!(!function.ends_with("::marker"));
        assert_eq!(err.code(), DEFAULT_ERROR_CODE);
    }

    #[test]
    fn test_macro_with_code() {
        let err = coded_error!("gone", "com.example.test", 410);
        assert_eq!(err.code(), 410);
    }

    #[test]
    fn test_call_site_display() {
        let site = CallSite {
            file: "src/lib.rs",
            function: Some("crate::load"),
            line: 12,
            column: 5,
        };
        assert_eq!(site.to_string(), "src/lib.rs:12 in crate::load");
    }

    #[test]
    fn test_serializes_with_camel_case_site() {
        let err = CodedError::new("boom", "com.example.test").with_code(7);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["message"], "boom");
        assert_eq!(json["code"], 7);
        assert!(json["site"]["file"].as_str().unwrap().ends_with("error.rs"));
    }

    #[test]
    fn test_date_parse_error_messages() {
        assert_eq!(DateParseError::Empty.to_string(), "Empty date string");
        assert_eq!(
            DateParseError::unrecognized("yesterday").to_string(),
            "Unrecognized date format: 'yesterday'"
        );
    }
}
