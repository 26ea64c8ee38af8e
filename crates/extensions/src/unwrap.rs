//! Type-checked unwrapping of dynamically typed optional values.
//!
//! `unwrap_as*` are assertions: a missing value or a value of another type
//! is a programmer error and panics with the requested type name, an
//! optional hint and the caller's location. Use [`UnwrapAs::try_as`] where
//! a mismatch is an expected outcome.

use std::any::{type_name, Any};
use std::error::Error;
use std::panic::Location;

/// Downcasting of `Option<Box<dyn Any>>`, `Option<Box<dyn Any + Send>>`
/// and `Option<&dyn Any>`.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use base_type_extensions::UnwrapAs;
///
/// let value: Option<Box<dyn Any>> = Some(Box::new(42_i32));
/// assert_eq!(value.unwrap_as::<i32>(), 42);
///
/// let text: Option<&dyn Any> = Some(&"text");
/// assert!(text.try_as::<i32>().is_none());
/// ```
pub trait UnwrapAs: Sized {
    /// What a successful downcast to `T` yields: `T` for boxes, `&T` for
    /// references.
    type Output<T: Any>;

    /// Downcasts to `T`, or `None` when absent or of another type.
    fn try_as<T: Any>(self) -> Option<Self::Output<T>>;

    /// Downcasts to `T`.
    ///
    /// # Panics
    ///
    /// Panics when the value is absent or not a `T`.
    #[track_caller]
    fn unwrap_as<T: Any>(self) -> Self::Output<T> {
        match self.try_as::<T>() {
            Some(value) => value,
            None => conversion_failure::<T>(None),
        }
    }

    /// Like [`UnwrapAs::unwrap_as`], adding `hint` to the panic message. The
    /// hint is only evaluated on failure.
    #[track_caller]
    fn unwrap_as_hint<T: Any>(self, hint: impl FnOnce() -> String) -> Self::Output<T> {
        match self.try_as::<T>() {
            Some(value) => value,
            None => conversion_failure::<T>(Some(hint())),
        }
    }

    /// Like [`UnwrapAs::unwrap_as`], adding the display of `error` to the
    /// panic message. The error is only built on failure.
    #[track_caller]
    fn unwrap_as_error<T: Any, E: Error>(self, error: impl FnOnce() -> E) -> Self::Output<T> {
        match self.try_as::<T>() {
            Some(value) => value,
            None => conversion_failure::<T>(Some(error().to_string())),
        }
    }
}

impl UnwrapAs for Option<Box<dyn Any>> {
    type Output<T: Any> = T;

    fn try_as<T: Any>(self) -> Option<T> {
        self?.downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl UnwrapAs for Option<Box<dyn Any + Send>> {
    type Output<T: Any> = T;

    fn try_as<T: Any>(self) -> Option<T> {
        self?.downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl<'a> UnwrapAs for Option<&'a dyn Any> {
    type Output<T: Any> = &'a T;

    fn try_as<T: Any>(self) -> Option<&'a T> {
        self?.downcast_ref::<T>()
    }
}

/// Builds the diagnostic reported when a value cannot be converted to `T`.
pub fn conversion_failure_message<T: ?Sized>(
    hint: Option<&str>,
    location: &Location<'_>,
) -> String {
    let mut message = format!("Cannot convert value to type '{}'", type_name::<T>());
    if let Some(hint) = hint {
        message.push_str(". Debugging hint: ");
        message.push_str(hint);
    }
    message.push_str(&format!(" ({}:{})", location.file(), location.line()));
    message
}

#[cold]
#[track_caller]
fn conversion_failure<T: ?Sized>(hint: Option<String>) -> ! {
    let location = Location::caller();
    let message = conversion_failure_message::<T>(hint.as_deref(), location);
    tracing::error!(
        target_type = type_name::<T>(),
        file = location.file(),
        line = location.line(),
        "{message}"
    );
    panic!("{message}");
}
