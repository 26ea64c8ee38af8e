//! Text utilities.
//!
//! - [`index`]: integer-offset character access and slicing
//! - [`string`]: chunking, case, digits, URL checks and small conveniences

pub mod index;
pub mod string;

pub use index::CharIndexExt;
pub use string::StringExt;
