//! Convenience extension traits for primitive types.
//!
//! Each module groups the helpers for one receiver type. Everything here is
//! a pure, stateless transformation of its receiver.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Explicit configuration** - number formatting takes a [`NumberFormat`]
//!   instead of reading process locale state
//! - **Fail-fast is named** - panicking helpers (`unwrap_as*`, out-of-range
//!   text indexing) are distinct from their `Option`-returning counterparts

pub mod datetime;
pub mod duration;
pub mod error;
pub mod number;
pub mod sequence;
pub mod text;
pub mod unwrap;

// Re-export commonly used items at crate root for convenience
pub use datetime::{as_date, parse_date, DateExt};
pub use duration::{F64DurationExt, I64DurationExt};
pub use error::{CallSite, CodedError, DateParseError, DEFAULT_ERROR_CODE};
pub use number::{F64FormatExt, NumberFormat};
pub use sequence::SliceExt;
pub use text::{CharIndexExt, StringExt};
pub use unwrap::UnwrapAs;
