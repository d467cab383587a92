//! Maybe: the value-or-error return type.

use std::fmt;

use crate::domain::ErrorDomain;
use crate::error::Error;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Repr<T> {
    Value(T),
    Error(Error),
}

/// Either a value of type `T` or the [`Error`] explaining why there is none.
///
/// Which alternative is held is fixed at construction. Test it with
/// [`is_value`](Self::is_value) before calling [`value`](Self::value), and
/// only call [`error`](Self::error) after that test failed:
///
/// ```
/// use maybe_error::{define_error_domain, Maybe};
///
/// define_error_domain! {
///     pub enum FileError in "file_error" {
///         success Ok = 0,
///         NotFound = 1 => "file not found",
///     }
/// }
///
/// fn open(exists: bool) -> Maybe<i32> {
///     if !exists {
///         return FileError::NotFound.into();
///     }
///     Maybe::from_value(42)
/// }
///
/// let result = open(false);
/// if result.is_value() {
///     println!("opened {}", result.value());
/// } else {
///     assert_eq!(result.error().message(), "file not found");
/// }
/// ```
///
/// The safe accessors panic when the other alternative is held. Callers
/// that have already tested the alternative can use the unchecked variants,
/// whose precondition is only verified in debug builds.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Maybe<T> {
    repr: Repr<T>,
}

impl<T> Maybe<T> {
    /// Hold a value.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self {
            repr: Repr::Value(value),
        }
    }

    /// Hold an error.
    #[inline]
    pub fn from_error(error: impl Into<Error>) -> Self {
        Self {
            repr: Repr::Error(error.into()),
        }
    }

    /// True if a value is held. Never looks at the stored error's message.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self.repr, Repr::Value(_))
    }

    /// True if an error is held.
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_value()
    }

    /// Get the stored value.
    ///
    /// # Panics
    /// Panics if an error is held.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => wrong_alternative("value", error),
        }
    }

    /// Get the stored value mutably.
    ///
    /// # Panics
    /// Panics if an error is held.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => wrong_alternative("value_mut", error),
        }
    }

    /// Take the stored value.
    ///
    /// # Panics
    /// Panics if an error is held.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => wrong_alternative("into_value", &error),
        }
    }

    /// Get a copy of the stored error.
    ///
    /// # Panics
    /// Panics if a value is held.
    #[track_caller]
    pub fn error(&self) -> Error {
        match &self.repr {
            Repr::Error(error) => *error,
            Repr::Value(_) => error_on_value(),
        }
    }

    /// Get the stored value without checking the alternative.
    ///
    /// # Safety
    /// A value must be held.
    #[inline]
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.is_value(), "value_unchecked() on an error");
        match &self.repr {
            Repr::Value(value) => value,
            // SAFETY: the caller guarantees a value is held.
            Repr::Error(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Get the stored error without checking the alternative.
    ///
    /// # Safety
    /// An error must be held.
    #[inline]
    pub unsafe fn error_unchecked(&self) -> Error {
        debug_assert!(self.is_error(), "error_unchecked() on a value");
        match &self.repr {
            Repr::Error(error) => *error,
            // SAFETY: the caller guarantees an error is held.
            Repr::Value(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    pub fn as_result(&self) -> Result<&T, Error> {
        match &self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(*error),
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(error),
        }
    }

    /// Convert into an `Option`, dropping the error.
    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }

    /// The stored error, if any.
    pub fn err(&self) -> Option<Error> {
        match &self.repr {
            Repr::Value(_) => None,
            Repr::Error(error) => Some(*error),
        }
    }

    /// Transform the value, keeping an error as is.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Value(value) => Maybe::from_value(f(value)),
            Repr::Error(error) => Maybe::from_error(error),
        }
    }

    /// Chain another fallible step onto the value.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.repr {
            Repr::Value(value) => f(value),
            Repr::Error(error) => Maybe::from_error(error),
        }
    }

    /// The value, or `default` when an error is held.
    pub fn value_or(self, default: T) -> T {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => default,
        }
    }

    /// The value, or one computed from the error.
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => f(error),
        }
    }
}

#[cold]
#[track_caller]
fn wrong_alternative(accessor: &str, error: &Error) -> ! {
    tracing::error!(
        category = error.name(),
        code = error.code(),
        accessor,
        "wrong alternative accessed on Maybe"
    );
    panic!("called `Maybe::{accessor}()` on an error: {error}");
}

#[cold]
#[track_caller]
fn error_on_value() -> ! {
    tracing::error!(accessor = "error", "wrong alternative accessed on Maybe");
    panic!("called `Maybe::error()` on a value");
}

impl<T> From<Error> for Maybe<T> {
    fn from(error: Error) -> Self {
        Maybe::from_error(error)
    }
}

impl<T, E: ErrorDomain> From<E> for Maybe<T> {
    fn from(code: E) -> Self {
        Maybe::from_error(code)
    }
}

impl<T> From<Result<T, Error>> for Maybe<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Maybe::from_value(value),
            Err(error) => Maybe::from_error(error),
        }
    }
}

impl<T> From<Maybe<T>> for Result<T, Error> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Repr::Error(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}
